//! Error types for review-core.

use thiserror::Error;

/// Result type alias using ScheduleError.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors from the checked scheduling path.
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("invalid quality {quality}: expected a value between 0 and 5")]
    InvalidQuality { quality: i32 },
}

/// Errors from validating scheduler tuning.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("minimum ease factor must be positive, got {0}")]
    NonPositiveMinimumEase(f64),

    #[error("initial ease factor {initial} is below the minimum {minimum}")]
    InitialEaseBelowMinimum { initial: f64, minimum: f64 },

    #[error("{name} interval must be at least one day")]
    ZeroInterval { name: &'static str },
}
