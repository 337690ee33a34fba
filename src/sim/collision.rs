//! Player vs car collision
//!
//! Axis-aligned boxes with a shrink factor so grazing contact doesn't count.
//! The player box uses `size` as its half-extent on both axes.

use super::state::{Car, Player};
use crate::consts::COLLISION_SHRINK;

/// Whether the player overlaps a car (both axis gaps inside the shrunk extent sum)
pub fn overlaps(player: &Player, car: &Car) -> bool {
    let dx = (player.pos.x - car.pos.x).abs();
    let dy = (player.pos.y - car.pos.y).abs();
    dx < (player.size + car.w / 2.0) * COLLISION_SHRINK
        && dy < (player.size + car.h / 2.0) * COLLISION_SHRINK
}

/// Index of the first car (spawn order) the player overlaps, if any.
/// Only one hit is reported per frame.
pub fn first_hit(player: &Player, cars: &[Car]) -> Option<usize> {
    cars.iter().position(|car| overlaps(player, car))
}
