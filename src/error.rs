//! Error types

/// Level data could not be turned into a level list
#[derive(thiserror::Error, Debug)]
pub enum LevelError {
    /// Reading the level file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network failure, timeout or non-success status
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Malformed JSON or wrong shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed entry with out-of-range values
    #[error("Invalid level at index {index}: {reason}")]
    Invalid { index: usize, reason: &'static str },
}

/// Play-field configuration rejected
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("lane height {lane_height} does not fit in field height {height}")]
    LaneTooTall { lane_height: f32, height: f32 },

    /// The player is clamped at `min_y`, so the goal line must lie below it
    #[error("goal line y={goal_line} is not reachable, player stops at y={min_y}")]
    GoalUnreachable { goal_line: f32, min_y: f32 },
}

/// Overlay request made while another overlay is still showing
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum OverlayError {
    #[error("overlay \"{active}\" still showing, rejected \"{requested}\"")]
    Busy { active: String, requested: String },
}

/// GPU setup failure
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("Surface reports no texture formats")]
    NoSurfaceFormat,
}
