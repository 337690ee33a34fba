//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as an explicit timestamp, never from a wall clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod motion;
pub mod overlay;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{first_hit, overlaps};
pub use input::{Key, KeySet};
pub use motion::{advance_cars, frame_scale, move_player};
pub use overlay::{Flash, OverlayState, PendingAction};
pub use score::ScoreCounter;
pub use spawn::spawn_cars;
pub use state::{Car, GameState, Player, RuntimeState};
pub use tick::{TickOutcome, tick};
