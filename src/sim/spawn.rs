//! Level spawning
//!
//! Lanes alternate direction (even lanes drive right, odd lanes left). Cars
//! start scattered over a double-width strip upstream of the screen so
//! traffic is already flowing when the level begins.

use glam::Vec2;
use rand::Rng;

use super::state::Car;
use crate::config::GameConfig;
use crate::consts::*;
use crate::levels::LevelConfig;

/// Build `lanes * cars_per_lane` cars for a level, lane by lane
pub fn spawn_cars<R: Rng>(level: &LevelConfig, config: &GameConfig, rng: &mut R) -> Vec<Car> {
    let width = config.width;
    let mut cars = Vec::with_capacity(level.car_count());

    for lane in 0..level.lanes {
        let dir = if lane % 2 == 0 { 1.0 } else { -1.0 };
        let y = config.lane_center_y(lane);

        for _ in 0..level.cars_per_lane {
            let w = rng.random_range(CAR_MIN_WIDTH..CAR_MAX_WIDTH);
            let h = config.lane_height * CAR_HEIGHT_RATIO;
            let x = if dir > 0.0 {
                rng.random_range(-width..width)
            } else {
                rng.random_range(0.0..width * 2.0)
            };
            let jitter = CAR_SPEED_JITTER_MIN + rng.random::<f32>() * CAR_SPEED_JITTER_SPAN;
            let vel = level.speed * jitter * dir;
            let hue = rng.random_range(0.0..360.0f32).floor();

            cars.push(Car {
                pos: Vec2::new(x, y),
                w,
                h,
                vel,
                lane,
                hue,
            });
        }
    }

    cars
}
