//! Level data
//!
//! Levels arrive as a JSON array of `{id, lanes, speed, carsPerLane}`. Any
//! failure to obtain or validate them degrades to an empty list, and an empty
//! list degrades to the single built-in level. The engine never runs with
//! zero levels.

use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// One level's traffic layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    pub id: u32,
    /// Number of traffic lanes
    pub lanes: u32,
    /// Base car speed (pixels per baseline frame, before scaling)
    pub speed: f32,
    pub cars_per_lane: u32,
}

impl LevelConfig {
    /// Built-in level used when no level data is available
    pub const DEFAULT: LevelConfig = LevelConfig {
        id: 1,
        lanes: 5,
        speed: 2.0,
        cars_per_lane: 2,
    };

    pub fn validate(&self, index: usize) -> Result<(), LevelError> {
        let reason = if self.lanes == 0 {
            "lanes must be > 0"
        } else if !(self.speed.is_finite() && self.speed > 0.0) {
            "speed must be > 0"
        } else if self.cars_per_lane == 0 {
            "carsPerLane must be > 0"
        } else {
            return Ok(());
        };
        Err(LevelError::Invalid { index, reason })
    }

    /// Total cars a spawn of this level produces
    pub fn car_count(&self) -> usize {
        self.lanes as usize * self.cars_per_lane as usize
    }
}

/// Parse and validate a JSON level list
pub fn parse_levels(json: &str) -> Result<Vec<LevelConfig>, LevelError> {
    let levels: Vec<LevelConfig> = serde_json::from_str(json)?;
    for (index, level) in levels.iter().enumerate() {
        level.validate(index)?;
    }
    Ok(levels)
}

/// Read and parse a level file
pub fn load_levels(path: impl AsRef<std::path::Path>) -> Result<Vec<LevelConfig>, LevelError> {
    let json = std::fs::read_to_string(path)?;
    parse_levels(&json)
}

/// Collapse a failed load into an empty list, logging why
pub fn levels_or_empty(result: Result<Vec<LevelConfig>, LevelError>) -> Vec<LevelConfig> {
    match result {
        Ok(levels) => {
            log::info!("Loaded {} levels", levels.len());
            levels
        }
        Err(e) => {
            log::warn!("Level data unavailable ({e}), using built-in level");
            Vec::new()
        }
    }
}

/// Non-empty ordered level list
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSet {
    levels: Vec<LevelConfig>,
}

impl LevelSet {
    /// Wrap a level list, substituting the built-in level when it is empty
    pub fn new(levels: Vec<LevelConfig>) -> Self {
        if levels.is_empty() {
            Self {
                levels: vec![LevelConfig::DEFAULT],
            }
        } else {
            Self { levels }
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Never true: an empty input list becomes the built-in level
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level at `index`, wrapping modulo the list length
    pub fn get(&self, index: usize) -> &LevelConfig {
        &self.levels[index % self.levels.len()]
    }

    /// Index following `index`, wrapping back to the first level
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.levels.len()
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
