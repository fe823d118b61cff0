//! Point-in-time league snapshot handed to the engine by the data-access
//! layer.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::player::{Player, PlayerId};
use crate::scoring::StatCategory;
use crate::slots::SlotConfig;
use crate::week::FantasyWeek;

/// Per-player, per-date recorded stat actuals (category name -> value).
pub type DailyActuals = BTreeMap<PlayerId, BTreeMap<NaiveDate, HashMap<String, f64>>>;

/// Read-only input bundle for one computation.
///
/// How this data was fetched or persisted is not the engine's concern; the
/// surrounding service assembles it before invoking any computation, and
/// nothing in here is mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    /// Team display name -> roster, IR-slotted players already excluded.
    pub rosters: BTreeMap<String, Vec<Player>>,
    /// Week number -> boundaries.
    pub weeks: BTreeMap<u32, FantasyWeek>,
    pub categories: Vec<StatCategory>,
    pub slots: SlotConfig,
    /// Recorded actuals for live-stat aggregation.
    pub actuals: DailyActuals,
}

impl LeagueSnapshot {
    pub fn team(&self, name: &str) -> Result<&[Player]> {
        self.rosters
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| EngineError::TeamNotFound(name.to_string()))
    }

    pub fn week(&self, week_num: u32) -> Result<&FantasyWeek> {
        self.weeks
            .get(&week_num)
            .ok_or(EngineError::WeekNotFound(week_num))
    }

    /// Recorded actuals for one player on one date, if any game was logged.
    pub fn actuals_for(
        &self,
        player: PlayerId,
        date: NaiveDate,
    ) -> Option<&HashMap<String, f64>> {
        self.actuals.get(&player).and_then(|days| days.get(&date))
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}
