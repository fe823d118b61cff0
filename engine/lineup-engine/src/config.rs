//! Tunable constants for ranking and assignment.

use serde::{Deserialize, Serialize};

/// Configuration for the ranking normalizer and daily assigner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineupConfig {
    /// Worst-case rank substituted for players with no rank data, at the
    /// assignment boundary. Keeps unranked players assignable but always
    /// lowest priority.
    pub unranked_sentinel: f64,

    /// Divisor applied to a category's rank contribution when the caller
    /// leaves that category unchecked. Call sites have used 2.0 and 10.0;
    /// the weighting is a knob, not a constant.
    pub unchecked_divisor: f64,
}

impl Default for LineupConfig {
    fn default() -> Self {
        Self { unranked_sentinel: 60.0, unchecked_divisor: 2.0 }
    }
}
