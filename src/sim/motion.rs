//! Player and car movement

use rand::Rng;

use super::input::{Key, KeySet};
use super::state::{Car, Player};
use crate::clamp_f32;
use crate::consts::*;

/// Frame delta (ms) as a multiple of the 60 fps baseline frame.
/// Negative deltas count as zero; long stalls are capped at ~2 frames.
pub fn frame_scale(delta_ms: f64) -> f32 {
    (delta_ms.clamp(0.0, MAX_FRAME_MS) / BASELINE_FRAME_MS) as f32
}

/// Move the player by one step per held direction key, then keep it inside
/// the field inset by its size.
pub fn move_player(player: &mut Player, keys: &KeySet, width: f32, height: f32) {
    let boost = if keys.is_held(Key::Boost) {
        BOOST_FACTOR
    } else {
        1.0
    };
    let step = player.speed * boost;

    if keys.is_held(Key::Left) {
        player.pos.x -= step;
    }
    if keys.is_held(Key::Right) {
        player.pos.x += step;
    }
    if keys.is_held(Key::Up) {
        player.pos.y -= step;
    }
    if keys.is_held(Key::Down) {
        player.pos.y += step;
    }

    player.pos.x = clamp_f32(player.pos.x, player.size, width - player.size);
    player.pos.y = clamp_f32(player.pos.y, player.size, height - player.size);
}

/// Slide every car along its lane; cars that leave one side re-enter from the
/// other at a random offset, keeping their velocity.
pub fn advance_cars<R: Rng>(cars: &mut [Car], dt: f32, width: f32, rng: &mut R) {
    for car in cars.iter_mut() {
        car.pos.x += car.vel * dt * CAR_SPEED_SCALE;

        let half = car.w / 2.0;
        if car.moving_right() && car.pos.x - half > width + WRAP_MARGIN {
            car.pos.x = -rng.random::<f32>() * width * 0.5;
        } else if !car.moving_right() && car.pos.x + half < -WRAP_MARGIN {
            car.pos.x = width + rng.random::<f32>() * width * 0.5;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn car(x: f32, vel: f32) -> Car {
        Car {
            pos: Vec2::new(x, 100.0),
            w: 60.0,
            h: 48.0,
            vel,
            lane: 0,
            hue: 0.0,
        }
    }

    #[test]
    fn test_frame_scale_clamps() {
        assert!((frame_scale(16.666) - 1.0).abs() < 1e-6);
        assert!((frame_scale(500.0) - (32.0 / 16.666) as f32).abs() < 1e-6);
        assert_eq!(frame_scale(-10.0), 0.0);
        assert!(frame_scale(1000.0) < 2.0);
    }

    #[test]
    fn test_diagonal_boosted_move() {
        let mut player = Player::new(Vec2::new(200.0, 200.0));
        let keys: KeySet = [Key::Up, Key::Right, Key::Boost].into_iter().collect();
        move_player(&mut player, &keys, 800.0, 600.0);
        let step = PLAYER_SPEED * BOOST_FACTOR;
        assert!((player.pos.x - (200.0 + step)).abs() < 1e-4);
        assert!((player.pos.y - (200.0 - step)).abs() < 1e-4);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut player = Player::new(Vec2::new(200.0, 200.0));
        let keys: KeySet = [Key::Left, Key::Right].into_iter().collect();
        move_player(&mut player, &keys, 800.0, 600.0);
        assert_eq!(player.pos, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_player_clamped_to_field() {
        let mut player = Player::new(Vec2::new(21.0, 579.0));
        let keys: KeySet = [Key::Left, Key::Down, Key::Boost].into_iter().collect();
        move_player(&mut player, &keys, 800.0, 600.0);
        assert_eq!(player.pos, Vec2::new(PLAYER_SIZE, 600.0 - PLAYER_SIZE));
    }

    #[test]
    fn test_car_advance_uses_dt() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut cars = vec![car(100.0, 2.0), car(100.0, -3.0)];
        advance_cars(&mut cars, 1.5, 800.0, &mut rng);
        assert!((cars[0].pos.x - 106.0).abs() < 1e-4);
        assert!((cars[1].pos.x - 91.0).abs() < 1e-4);
    }

    #[test]
    fn test_rightward_car_wraps_to_left() {
        let mut rng = Pcg32::seed_from_u64(2);
        let width = 800.0;
        // Trailing edge already 25px past the right bound
        let mut cars = vec![car(width + 25.0 + 30.0, 2.0)];
        advance_cars(&mut cars, 1.0, width, &mut rng);
        assert!(cars[0].pos.x <= 0.0);
        assert!(cars[0].pos.x >= -width * 0.5);
        assert_eq!(cars[0].vel, 2.0);
    }

    #[test]
    fn test_leftward_car_wraps_to_right() {
        let mut rng = Pcg32::seed_from_u64(3);
        let width = 800.0;
        let mut cars = vec![car(-25.0 - 30.0, -2.0)];
        advance_cars(&mut cars, 1.0, width, &mut rng);
        assert!(cars[0].pos.x >= width);
        assert!(cars[0].pos.x <= width * 1.5);
        assert_eq!(cars[0].vel, -2.0);
    }

    #[test]
    fn test_car_within_margin_does_not_wrap() {
        let mut rng = Pcg32::seed_from_u64(4);
        let width = 800.0;
        // Trailing edge at width + 10: still inside the margin after moving 4px
        let mut cars = vec![car(width + 10.0 + 30.0, 2.0)];
        advance_cars(&mut cars, 1.0, width, &mut rng);
        assert!((cars[0].pos.x - (width + 44.0)).abs() < 1e-4);
    }
}
