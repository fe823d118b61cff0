//! Fantasy week boundaries.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// One fantasy week: inclusive start and end dates, typically 7 days.
///
/// Weeks are assumed contiguous and non-overlapping across a season; that
/// is the ingestion layer's contract, not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FantasyWeek {
    pub week_num: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FantasyWeek {
    pub fn new(week_num: u32, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(EngineError::InvalidWeek { week: week_num, start, end });
        }
        Ok(Self { week_num, start, end })
    }

    /// All dates in the week, inclusive on both ends.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let days = (self.end - self.start).num_days();
        (0..=days).map(move |d| self.start + Duration::days(d))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
