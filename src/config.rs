//! Play-field configuration
//!
//! The drawing surface size and lane height everything is positioned against.

use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_SIZE;
use crate::error::ConfigError;

/// Surface dimensions and lane layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Surface width in pixels
    pub width: f32,
    /// Surface height in pixels
    pub height: f32,
    /// Height of one lane band
    pub lane_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 560.0,
            lane_height: 80.0,
        }
    }
}

impl GameConfig {
    /// Build and validate a config for a surface of the given size
    pub fn new(width: f32, height: f32, lane_height: f32) -> Result<Self, ConfigError> {
        let config = Self {
            width,
            height,
            lane_height,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every dimension is usable and the far side can be reached
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("lane height", self.lane_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        if self.lane_height > self.height {
            return Err(ConfigError::LaneTooTall {
                lane_height: self.lane_height,
                height: self.height,
            });
        }
        if self.goal_line() <= PLAYER_SIZE {
            return Err(ConfigError::GoalUnreachable {
                goal_line: self.goal_line(),
                min_y: PLAYER_SIZE,
            });
        }
        Ok(())
    }

    /// Where the player starts and respawns: centered, middle of the bottom band
    pub fn start_position(&self) -> (f32, f32) {
        (self.width / 2.0, self.height - self.lane_height / 2.0)
    }

    /// Vertical center of a lane (lane 0 sits just above the start band)
    pub fn lane_center_y(&self, lane: u32) -> f32 {
        self.height - self.lane_height * (lane as f32 + 1.5)
    }

    /// Player y below which the far side counts as reached
    pub fn goal_line(&self) -> f32 {
        self.lane_height * 0.5
    }

    /// Number of background bands needed to cover the surface
    pub fn band_count(&self) -> u32 {
        (self.height / self.lane_height).ceil() as u32
    }
}
