//! Scene building
//!
//! Turns the current game state into a flat triangle list plus the one line
//! of centered text (if any) that should be drawn over it. Reads state only.

use glam::Vec2;

use super::shapes::{centered_rect, circle, hline, rect, triangle};
use super::vertex::{Vertex, colors};
use crate::consts::PAUSE_TEXT;
use crate::hsl_to_rgba;
use crate::sim::{Car, GameState, Player};

/// Accent mark on a car's leading edge
const ACCENT_W: f32 = 6.0;
const ACCENT_H: f32 = 12.0;
const DIVIDER_THICKNESS: f32 = 2.0;
const PLAYER_SEGMENTS: u32 = 24;

/// One frame's worth of drawing
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Triangle list in surface pixels, back to front
    pub vertices: Vec<Vertex>,
    /// Centered message over the dimmed field
    pub message: Option<String>,
}

/// Build the scene for `state` at timestamp `now`
pub fn build_scene(state: &GameState, now: f64) -> Scene {
    let config = &state.config;
    let (width, height) = (config.width, config.height);
    let mut vertices = Vec::with_capacity(64 + state.cars.len() * 12);

    // Road bands from the bottom up
    for i in 0..config.band_count() {
        let color = if i % 2 == 0 {
            colors::LANE_EVEN
        } else {
            colors::LANE_ODD
        };
        let top = height - (i + 1) as f32 * config.lane_height;
        vertices.extend(rect(0.0, top, width, config.lane_height, color));
    }

    // Dividers bounding the traffic lanes
    for i in 1..=state.level().lanes {
        let y = height - i as f32 * config.lane_height;
        vertices.extend(hline(y, 0.0, width, DIVIDER_THICKNESS, colors::LANE_DIVIDER));
    }

    for car in &state.cars {
        push_car(&mut vertices, car);
    }

    if state.player.alive {
        push_player(&mut vertices, &state.player);
    }

    let flash = state.flash.alpha(now);
    if flash > 0.0 {
        let [r, g, b] = colors::FLASH;
        vertices.extend(rect(0.0, 0.0, width, height, [r, g, b, flash]));
    }

    // Only one full-screen message at a time; an overlay beats the pause text
    let message = match state.overlay.message() {
        Some(text) => Some(text.to_string()),
        None if state.runtime.paused => Some(PAUSE_TEXT.to_string()),
        None => None,
    };
    if message.is_some() {
        vertices.extend(rect(0.0, 0.0, width, height, colors::DIM));
    }

    Scene { vertices, message }
}

fn push_car(vertices: &mut Vec<Vertex>, car: &Car) {
    let body = hsl_to_rgba(car.hue, colors::CAR_SATURATION, colors::CAR_LIGHTNESS, 1.0);
    vertices.extend(centered_rect(car.pos, car.w, car.h, body));

    let accent_x = if car.moving_right() {
        car.pos.x + car.w / 2.0 - ACCENT_W
    } else {
        car.pos.x - car.w / 2.0
    };
    vertices.extend(rect(
        accent_x,
        car.pos.y - ACCENT_H / 2.0,
        ACCENT_W,
        ACCENT_H,
        colors::CAR_ACCENT,
    ));
}

fn push_player(vertices: &mut Vec<Vertex>, player: &Player) {
    let p = player.pos;
    vertices.extend(circle(p, player.size / 1.4, colors::PLAYER, PLAYER_SEGMENTS));
    vertices.extend(triangle(
        p + Vec2::new(6.0, 0.0),
        p + Vec2::new(16.0, -4.0),
        p + Vec2::new(16.0, 4.0),
        colors::PLAYER_WEDGE,
    ));
}
