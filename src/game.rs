//! Game controller
//!
//! Owns the simulation state and everything around it that is not
//! simulation: the running flag, the last frame timestamp, held keys and the
//! HUD hook. A host drives it by calling [`Game::frame`] once per animation
//! frame until it returns `None`; the controller itself never schedules
//! anything.

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::levels::{LevelConfig, LevelSet};
use crate::renderer::scene::{Scene, build_scene};
use crate::sim::{GameState, Key, KeySet, TickOutcome, frame_scale, tick};

/// Receives `(level id, score, lives)` every frame
pub type HudCallback = Box<dyn FnMut(u32, u64, u8)>;

pub struct Game {
    state: GameState,
    keys: KeySet,
    running: bool,
    /// Timestamp (ms) of the previous frame
    last_time: f64,
    hud: HudCallback,
}

impl Game {
    /// Build a game on `levels` (the built-in level if empty), cars spawned
    /// for the first level. Nothing runs until [`Game::start`].
    pub fn new(
        config: GameConfig,
        levels: Vec<LevelConfig>,
        hud: HudCallback,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let levels = LevelSet::new(levels);
        let state = GameState::new(config, levels, seed)?;
        log::info!("Game initialized with {} levels, seed {}", state.levels.len(), seed);
        Ok(Self {
            state,
            keys: KeySet::new(),
            running: false,
            last_time: 0.0,
            hud,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for hosts and tests that stage a situation directly
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin running from timestamp `now`. Returns false (and changes
    /// nothing) if already running, so the host never double-schedules.
    pub fn start(&mut self, now: f64) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.last_time = now;
        log::info!("Game started");
        true
    }

    /// Stop after the current frame; the next [`Game::frame`] returns `None`
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Game stopped");
        }
        self.running = false;
    }

    /// Run one frame at timestamp `now` and return the scene to present.
    /// `None` means the game is stopped and the host should stop scheduling.
    pub fn frame(&mut self, now: f64) -> Option<Scene> {
        if !self.running {
            return None;
        }
        self.update(now);
        Some(build_scene(&self.state, now))
    }

    /// Simulation half of a frame: timing, tick, HUD
    pub fn update(&mut self, now: f64) -> TickOutcome {
        let dt = frame_scale(now - self.last_time);
        self.last_time = now;

        let outcome = tick(&mut self.state, &self.keys, dt, now);

        (self.hud)(
            self.state.level().id,
            self.state.score.get(),
            self.state.runtime.lives,
        );
        outcome
    }

    /// Key pressed. The pause key toggles the manual pause unless an overlay
    /// holds the game paused.
    pub fn key_down(&mut self, key: Key) {
        if key == Key::Pause {
            let state = &mut self.state;
            if state.overlay.toggle_manual_pause(&mut state.runtime) {
                log::debug!("Manual pause: {}", state.runtime.paused);
            }
        }
        self.keys.press(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.keys.release(key);
    }

    /// Forget held keys (window lost focus)
    pub fn release_all_keys(&mut self) {
        self.keys.clear();
    }

    /// Respawn the current level's cars and recenter the player
    pub fn spawn_level(&mut self) {
        self.state.spawn_level();
    }
}
