//! Error types for drift_motion

use thiserror::Error;

/// Errors raised while constructing a motion task
///
/// Construction is the only fallible surface of the engine: once a task is
/// registered, ticking it never fails (a panicking sampler is contained by
/// the scheduler instead, see [`crate::scheduler::MotionScheduler`]).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Cycle duration must be positive
    #[error("period must be positive, got {0}ms")]
    NonPositivePeriod(f32),

    /// The path has no outline to travel
    #[error("degenerate path: total length must be positive, got {0}")]
    DegeneratePath(f32),

    /// The scroll content has no extent to scroll through
    #[error("degenerate extent: must be positive, got {0}")]
    DegenerateExtent(f32),
}

/// Result type for drift_motion operations
pub type Result<T> = std::result::Result<T, ConfigError>;
