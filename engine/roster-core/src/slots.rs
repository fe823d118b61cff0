//! Position slot capacities for a league.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::player::Position;

/// Position code -> configured slot count, bench/IR excluded.
///
/// Immutable per league; loaded once per computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotConfig {
    capacities: BTreeMap<Position, u32>,
}

impl SlotConfig {
    /// Build from (position, count) pairs. Zero-count entries are kept out
    /// of the map entirely so they can never become assignment targets.
    /// A config with no usable slots is a caller error.
    pub fn new<I>(slots: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Position, u32)>,
    {
        let capacities: BTreeMap<Position, u32> =
            slots.into_iter().filter(|(_, count)| *count > 0).collect();
        if capacities.is_empty() {
            return Err(EngineError::EmptySlotConfig);
        }
        Ok(Self { capacities })
    }

    pub fn capacity(&self, pos: Position) -> u32 {
        self.capacities.get(&pos).copied().unwrap_or(0)
    }

    /// Positions with nonzero capacity, in deterministic position order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.capacities.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.capacities.iter().map(|(p, c)| (*p, *c))
    }

    /// Skater slots only (everything but the goalie slot), for the exact
    /// value sub-solver which handles goalies separately.
    pub fn skater_slots(&self) -> BTreeMap<Position, u32> {
        self.capacities
            .iter()
            .filter(|(p, _)| **p != Position::G)
            .map(|(p, c)| (*p, *c))
            .collect()
    }

    pub fn goalie_count(&self) -> u32 {
        self.capacity(Position::G)
    }

    pub fn total_slots(&self) -> u32 {
        self.capacities.values().sum()
    }
}
