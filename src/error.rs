// error.rs - Error types for the grid engine and its configuration

use thiserror::Error;

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised by the grid engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid field size {size}, must be in 1..={}", crate::grid::MAX_SIZE)]
    InvalidSize { size: usize },

    #[error("coordinate ({x}, {y}) is outside the {size}x{size} field")]
    OutOfRange { x: i32, y: i32, size: usize },
}

/// Errors raised while turning command line arguments into a session config
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("field size must be at least 1")]
    ZeroSize,

    #[error("field size {size} exceeds the maximum of {max}")]
    SizeTooLarge { size: usize, max: usize },

    #[error("delay {delay_ms}ms is outside {min}..={max}ms")]
    DelayOutOfRange { delay_ms: u64, min: u64, max: u64 },

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("pattern '{name}' does not fit a {size}x{size} field")]
    PatternTooLarge { name: String, size: usize },
}
