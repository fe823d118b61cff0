//! Lineup Engine - daily slot assignment for one team
//!
//! Maps an eligible-today player pool into position slots. Two solvers:
//!
//! - [`assign_daily`]: the production three-pass heuristic. Fills as many
//!   slots as possible first, preferring better-ranked players, with
//!   deterministic tie-breaks (input order, then position declaration
//!   order). Fast and explainable, not guaranteed globally optimal.
//! - [`solve_by_value`]: an exact memoized assignment over skater slots,
//!   used where an explicit per-player value function applies and
//!   exactness matters more than heuristic speed. Goalies are slotted
//!   separately by taking the top values.
//!
//! The two objectives differ (rank-minimizing vs value-maximizing); the
//! exact solver is not a drop-in replacement for the heuristic.

pub mod assigner;
pub mod config;
pub mod optimal;
pub mod rank;

pub use assigner::{assign_daily, DailyLineup};
pub use config::LineupConfig;
pub use optimal::{marginal_value, solve_by_value, ValueLineup};
pub use rank::{effective_rank, total_rank};

/// Re-export commonly used data model types
pub use roster_core::{Player, PlayerId, Position, SlotConfig};
