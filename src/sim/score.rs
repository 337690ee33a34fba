//! Score accumulator

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SCORE_STEP;

/// Running score. Callers only ever add positive amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCounter {
    value: u64,
}

impl ScoreCounter {
    pub fn new(initial: u64) -> Self {
        Self { value: initial }
    }

    /// Add `n` points, returning the new total
    pub fn add(&mut self, n: u64) -> u64 {
        self.value += n;
        self.value
    }

    /// Add the default step (10 points)
    pub fn add_default(&mut self) -> u64 {
        self.add(DEFAULT_SCORE_STEP)
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub fn get(&self) -> u64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_reset_get() {
        let mut score = ScoreCounter::new(5);
        assert_eq!(score.add_default(), 15);
        assert_eq!(score.add(100), 115);
        assert_eq!(score.get(), 115);
        score.reset();
        assert_eq!(score.get(), 0);
    }
}
