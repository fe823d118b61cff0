//! Matchup Projector - weekly projection over simulated optimal lineups
//!
//! Drives the daily lineup assigner across every date of a fantasy week
//! for one or two rosters, merges already-elapsed ("live") stats with
//! forward-projected ("rest of week") stats, recomputes ratio statistics
//! from summed counting stats, and reports unused slot capacity. All
//! computation is synchronous and derivable from the input snapshot;
//! nothing is persisted.

pub mod config;
pub mod driver;
pub mod open_slots;
pub mod pool;
pub mod stats;

#[cfg(test)]
mod tests;

pub use config::ProjectionConfig;
pub use driver::{
    project_matchup, weekly_lineups, GameCounts, ProjectionRequest, ProjectionResult,
    SideProjection,
};
pub use open_slots::{open_slot_report, OpenSlotReport, SlotCell};
pub use pool::eligible_today;
pub use stats::StatLine;

/// Re-export commonly used types from the engine crates
pub use lineup_engine::{assign_daily, DailyLineup, LineupConfig};
pub use roster_core::{EngineError, LeagueSnapshot, Result, SimulatedMove};
