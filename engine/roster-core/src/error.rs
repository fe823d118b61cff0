//! Error types for the lineup/projection engine

use thiserror::Error;

use crate::player::PlayerId;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that abort a computation request.
///
/// Data gaps (missing schedule, projection, or rank entries) and degenerate
/// arithmetic (zero time-on-ice ratios) are deliberately absent: those are
/// recovered locally by substitution and never surface to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Week not found: {0}")]
    WeekNotFound(u32),

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Slot configuration has no usable slots")]
    EmptySlotConfig,

    #[error("Week {week} has start {start} after end {end}")]
    InvalidWeek {
        week: u32,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Unknown position code: {0}")]
    UnknownPosition(String),
}
