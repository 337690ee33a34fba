//! Keyboard input
//!
//! Event handlers only add/remove keys here; the simulation reads the set once
//! per frame.

use std::collections::HashSet;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Movement multiplier while held
    Boost,
    /// Manual pause toggle
    Pause,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value; unrecognized keys are ignored
    pub fn from_dom(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "Shift" => Some(Key::Boost),
            " " => Some(Key::Pause),
            _ => None,
        }
    }

    /// Whether the browser default (page scrolling) should be suppressed
    pub fn prevents_default(self) -> bool {
        !matches!(self, Key::Boost)
    }
}

/// Keys currently held down
#[derive(Debug, Clone, Default)]
pub struct KeySet {
    pressed: HashSet<Key>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Drop everything (focus loss)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self {
            pressed: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_mapping() {
        assert_eq!(Key::from_dom("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom("Shift"), Some(Key::Boost));
        assert_eq!(Key::from_dom(" "), Some(Key::Pause));
        assert_eq!(Key::from_dom("a"), None);
        assert_eq!(Key::from_dom("Enter"), None);
    }

    #[test]
    fn test_prevent_default_for_arrows_and_space() {
        assert!(Key::Up.prevents_default());
        assert!(Key::Pause.prevents_default());
        assert!(!Key::Boost.prevents_default());
    }

    #[test]
    fn test_press_release() {
        let mut keys = KeySet::new();
        keys.press(Key::Up);
        keys.press(Key::Up);
        assert!(keys.is_held(Key::Up));
        keys.release(Key::Up);
        assert!(!keys.is_held(Key::Up));
    }
}
