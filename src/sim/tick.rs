//! Per-frame simulation step
//!
//! Overlay expiry, then (when not paused) movement, collision, and the
//! far-side check. The caller supplies the frame scale and timestamp.

use super::collision::first_hit;
use super::input::KeySet;
use super::motion::{advance_cars, move_player};
use super::overlay::PendingAction;
use super::state::GameState;
use crate::consts::*;

/// What happened during a tick (for logging and hosts)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The game-over overlay expired and the run was reset
    pub reset: bool,
    /// The player was hit by a car
    pub hit: bool,
    /// The hit used up the last life
    pub game_over: bool,
    /// The player reached the far side
    pub level_cleared: bool,
    /// Whether the simulation was paused (motion skipped)
    pub paused: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, keys: &KeySet, dt: f32, now: f64) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    // Expired overlays resume play before anything moves
    if let Some(action) = state.overlay.update(&mut state.runtime, now) {
        match action {
            PendingAction::ResetGame => {
                state.reset_run();
                outcome.reset = true;
                log::info!("Game reset after game over");
            }
        }
    }

    if state.runtime.paused {
        outcome.paused = true;
        return outcome;
    }

    let width = state.config.width;
    let height = state.config.height;
    move_player(&mut state.player, keys, width, height);
    advance_cars(&mut state.cars, dt, width, &mut state.rng);

    if let Some(index) = first_hit(&state.player, &state.cars) {
        outcome.hit = true;
        log::debug!("Hit by car {index} in lane {}", state.cars[index].lane);
        outcome.game_over = handle_hit(state, now);
    }

    // A game-over overlay may have paused us above
    if !state.runtime.paused && state.player.pos.y < state.config.goal_line() {
        clear_level(state, now);
        outcome.level_cleared = true;
    }

    outcome.paused = state.runtime.paused;
    outcome
}

/// Lose a life and flash. Returns true when that was the last life.
fn handle_hit(state: &mut GameState, now: f64) -> bool {
    let lives = state.runtime.lose_life();
    state.flash.trigger(now, HIT_FLASH_MS);

    if lives == 0 {
        state.player.alive = false;
        log::info!("Game over at level {} with {} points", state.level().id, state.score.get());
        if let Err(e) = state.overlay.begin(
            &mut state.runtime,
            GAME_OVER_TEXT,
            GAME_OVER_MS,
            now,
            Some(PendingAction::ResetGame),
        ) {
            log::warn!("{e}");
        }
        true
    } else {
        state.recenter_player();
        false
    }
}

/// Bonus, next level, banner
fn clear_level(state: &mut GameState, now: f64) {
    let cleared = state.level().id;
    state.score.add(LEVEL_CLEAR_BONUS);
    state.advance_level();
    log::info!(
        "Level {cleared} cleared, now level {} (score {}, lives {})",
        state.level().id,
        state.score.get(),
        state.runtime.lives
    );
    if let Err(e) = state
        .overlay
        .begin(&mut state.runtime, NEXT_LEVEL_TEXT, NEXT_LEVEL_MS, now, None)
    {
        log::warn!("{e}");
    }
}
