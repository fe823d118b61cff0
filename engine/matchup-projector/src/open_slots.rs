//! Unused-slot report: which slots go unfilled each day, and which full
//! slots a flexible starter could in principle vacate.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use lineup_engine::{assign_daily, LineupConfig};
use roster_core::{LeagueSnapshot, Position, Result, SimulatedMove};

use crate::pool::eligible_today;

/// One (date, position) cell of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotCell {
    /// The date already elapsed; its slots are historically locked in.
    Past,
    Open {
        count: u32,
        /// Set on a zero-open slot when one of its starters is also
        /// eligible for a different position that still has room: moving
        /// that starter could reopen this slot. The analyzer only flags
        /// the structural possibility; it never performs the swap.
        could_vacate: bool,
    },
}

impl fmt::Display for SlotCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotCell::Past => f.write_str("-"),
            SlotCell::Open { count, could_vacate: true } => write!(f, "{count}*"),
            SlotCell::Open { count, could_vacate: false } => write!(f, "{count}"),
        }
    }
}

/// Per-day, per-position open-slot counts for one roster over one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenSlotReport {
    pub team: String,
    pub week: u32,
    pub days: BTreeMap<NaiveDate, BTreeMap<Position, SlotCell>>,
}

/// Build the open-slot report for a team's week, respecting simulated
/// moves. Dates strictly before `today` come back as non-actionable
/// placeholders.
pub fn open_slot_report(
    snapshot: &LeagueSnapshot,
    week_num: u32,
    team: &str,
    moves: &[SimulatedMove],
    today: NaiveDate,
    lineup_cfg: &LineupConfig,
) -> Result<OpenSlotReport> {
    let week = *snapshot.week(week_num)?;
    let roster = snapshot.team(team)?;

    let mut days = BTreeMap::new();
    for date in week.dates() {
        if date < today {
            days.insert(
                date,
                snapshot.slots.positions().map(|p| (p, SlotCell::Past)).collect(),
            );
            continue;
        }

        let pool = eligible_today(roster, moves, date);
        let lineup = assign_daily(&pool, &snapshot.slots, lineup_cfg);
        let open: BTreeMap<Position, u32> = snapshot
            .slots
            .iter()
            .map(|(pos, cap)| (pos, cap - lineup.assigned(pos).len() as u32))
            .collect();

        let mut cells = BTreeMap::new();
        for (pos, count) in &open {
            let could_vacate = *count == 0
                && lineup.assigned(*pos).iter().any(|id| {
                    let Some(starter) = pool.iter().find(|p| p.id == *id) else {
                        return false;
                    };
                    starter.positions.iter().any(|other| {
                        *other != *pos && open.get(other).copied().unwrap_or(0) > 0
                    })
                });
            if could_vacate {
                debug!(%date, %pos, "full slot flagged as vacatable");
            }
            cells.insert(*pos, SlotCell::Open { count: *count, could_vacate });
        }
        days.insert(date, cells);
    }

    Ok(OpenSlotReport { team: team.to_string(), week: week.week_num, days })
}
