//! Game state and core simulation types
//!
//! Everything the per-frame step reads or mutates lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::overlay::{Flash, OverlayState};
use super::score::ScoreCounter;
use super::spawn::spawn_cars;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::consts::*;
use crate::levels::{LevelConfig, LevelSet};

/// The player's token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Half-extent used for clamping and collision
    pub size: f32,
    /// Step per frame while a direction key is held
    pub speed: f32,
    /// False between the final hit and the game reset
    pub alive: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            alive: true,
        }
    }
}

/// A car (obstacle). Never removed individually: cars leaving the screen
/// wrap to the opposite side, the whole batch is replaced on respawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    /// Center of the body
    pub pos: Vec2,
    pub w: f32,
    pub h: f32,
    /// Signed horizontal speed; the sign is the travel direction
    pub vel: f32,
    pub lane: u32,
    /// Body color hue in degrees (drawn at 80% saturation, 60% lightness)
    pub hue: f32,
}

impl Car {
    #[inline]
    pub fn moving_right(&self) -> bool {
        self.vel > 0.0
    }
}

/// Level progress, lives, pause flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeState {
    pub level_index: usize,
    /// Always within 0..=MAX_LIVES
    pub lives: u8,
    pub paused: bool,
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self {
            level_index: 0,
            lives: START_LIVES,
            paused: false,
        }
    }
}

impl RuntimeState {
    /// Gain a life, capped at MAX_LIVES
    pub fn gain_life(&mut self) {
        self.lives = (self.lives + 1).min(MAX_LIVES);
    }

    /// Lose a life, returning the lives left
    pub fn lose_life(&mut self) -> u8 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    pub levels: LevelSet,
    pub player: Player,
    /// Cars of the current level, in spawn order
    pub cars: Vec<Car>,
    pub runtime: RuntimeState,
    pub score: ScoreCounter,
    pub overlay: OverlayState,
    pub flash: Flash,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game state on the first level. The config is checked
    /// before anything is spawned against it.
    pub fn new(config: GameConfig, levels: LevelSet, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let (x, y) = config.start_position();
        let mut state = Self {
            seed,
            config,
            levels,
            player: Player::new(Vec2::new(x, y)),
            cars: Vec::new(),
            runtime: RuntimeState::default(),
            score: ScoreCounter::default(),
            overlay: OverlayState::default(),
            flash: Flash::default(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.spawn_level();
        Ok(state)
    }

    /// The level currently being played
    pub fn level(&self) -> &LevelConfig {
        self.levels.get(self.runtime.level_index)
    }

    /// Replace all cars with a fresh batch for the current level and put the
    /// player back at the start
    pub fn spawn_level(&mut self) {
        let level = *self.level();
        self.cars = spawn_cars(&level, &self.config, &mut self.rng);
        self.recenter_player();
        log::debug!(
            "Spawned level {} ({} lanes, {} cars)",
            level.id,
            level.lanes,
            self.cars.len()
        );
    }

    /// Move the player to the start position without touching anything else
    pub fn recenter_player(&mut self) {
        let (x, y) = self.config.start_position();
        self.player.pos = Vec2::new(x, y);
    }

    /// Advance to the next level (wrapping) and gain a life
    pub fn advance_level(&mut self) {
        self.runtime.gain_life();
        self.runtime.level_index = self.levels.next_index(self.runtime.level_index);
        self.spawn_level();
    }

    /// Back to a fresh run: 3 lives, no score, first level
    pub fn reset_run(&mut self) {
        self.runtime.lives = START_LIVES;
        self.runtime.level_index = 0;
        self.score.reset();
        self.player.alive = true;
        self.spawn_level();
    }
}
