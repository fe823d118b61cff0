//! Simulated add/drop transactions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::player::{Player, PlayerId};

/// A hypothetical roster transaction applied only during projection.
///
/// Interpreted as a roster-state overlay: for any date on or after
/// `effective`, the dropped player is excluded from the eligible pool and
/// the added player is included, regardless of the order the moves were
/// created in. Moves never touch the persisted roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatedMove {
    pub effective: NaiveDate,
    pub dropped: PlayerId,
    /// Fully hydrated replacement, schedule and projections included.
    pub added: Player,
}

impl SimulatedMove {
    /// Whether this move is in force on `date`.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        date >= self.effective
    }
}
