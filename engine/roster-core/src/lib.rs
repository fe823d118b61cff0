//! Roster Core - shared data model for the lineup/projection engine
//!
//! Point-in-time, read-only value types describing a fantasy roster:
//! players with position eligibility and schedules, slot capacities,
//! fantasy weeks, scoring categories, and simulated roster moves.
//! Everything here is constructed fresh per computation from a storage
//! snapshot and never mutated afterwards.

pub mod error;
pub mod moves;
pub mod player;
pub mod scoring;
pub mod slots;
pub mod snapshot;
pub mod week;

pub use error::{EngineError, Result};
pub use moves::SimulatedMove;
pub use player::{normalize_tricode, parse_eligible_positions, Player, PlayerId, Position};
pub use scoring::{ScoringGroup, StatCategory};
pub use slots::SlotConfig;
pub use snapshot::LeagueSnapshot;
pub use week::FantasyWeek;

/// Current version of the data model crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
