//! Chicken Cross - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Simulation (motion, collisions, overlays, level/life/score state)
//! - `game`: Frame-driven controller that owns the simulation and the HUD hook
//! - `renderer`: Scene building and the WebGPU vertex pipeline
//! - `levels`: Level data parsing with a built-in fallback
//! - `config`: Play-field dimensions

pub mod config;
pub mod error;
pub mod game;
pub mod levels;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, LevelError, OverlayError, RenderError};
pub use game::{Game, HudCallback};
pub use levels::{LevelConfig, LevelSet};

/// Game configuration constants
pub mod consts {
    /// Baseline frame length the motion model is tuned for (60 fps)
    pub const BASELINE_FRAME_MS: f64 = 16.666;
    /// Longest frame delta honoured; longer stalls are clamped to avoid tunneling
    pub const MAX_FRAME_MS: f64 = 32.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 4.0;
    /// Step multiplier while the boost key is held
    pub const BOOST_FACTOR: f32 = 1.8;

    /// Car body width range (pixels)
    pub const CAR_MIN_WIDTH: f32 = 50.0;
    pub const CAR_MAX_WIDTH: f32 = 90.0;
    /// Car body height as a fraction of lane height
    pub const CAR_HEIGHT_RATIO: f32 = 0.6;
    /// Per-car speed jitter: base speed * (0.8 .. 1.2)
    pub const CAR_SPEED_JITTER_MIN: f32 = 0.8;
    pub const CAR_SPEED_JITTER_SPAN: f32 = 0.4;
    /// Car displacement per baseline frame is velocity * this
    pub const CAR_SPEED_SCALE: f32 = 2.0;
    /// How far past the screen edge a car travels before wrapping
    pub const WRAP_MARGIN: f32 = 20.0;

    /// Fraction of the half-extent sum that counts as overlap (forgiving hitboxes)
    pub const COLLISION_SHRINK: f32 = 0.8;

    /// Lives
    pub const START_LIVES: u8 = 3;
    pub const MAX_LIVES: u8 = 5;

    /// Scoring
    pub const DEFAULT_SCORE_STEP: u64 = 10;
    pub const LEVEL_CLEAR_BONUS: u64 = 100;

    /// Timed effects (milliseconds)
    pub const HIT_FLASH_MS: f64 = 180.0;
    pub const GAME_OVER_MS: f64 = 1400.0;
    pub const NEXT_LEVEL_MS: f64 = 900.0;
    /// Peak opacity of the damage flash
    pub const FLASH_MAX_ALPHA: f32 = 0.5;

    /// Overlay banners
    pub const GAME_OVER_TEXT: &str = "GAME OVER";
    pub const NEXT_LEVEL_TEXT: &str = "NEXT LEVEL";
    pub const PAUSE_TEXT: &str = "PAUSE";
}

/// Clamp that tolerates an inverted range (min wins), like a field narrower than the player
#[inline]
pub fn clamp_f32(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Convert HSL (hue in degrees, saturation/lightness in 0..1) to sRGB-encoded RGBA, the
/// same space as the `colors` palette
pub fn hsl_to_rgba(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> [f32; 4] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    [r + m, g + m, b + m, alpha]
}
