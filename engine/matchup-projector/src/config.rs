//! Projection constants and display precision.

use serde::{Deserialize, Serialize};

/// Configuration for weekly projection and stat aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Minutes of time-on-ice credited per goalie start during projection,
    /// and per recorded shutout during live aggregation. Box-score feeds
    /// record the shutout stat but omit the associated ice time, and
    /// projections are expressed as rates, so both sides need the same
    /// fixed credit.
    pub goalie_toi_credit: f64,

    /// Display precision for goals-against-average.
    pub gaa_decimals: u32,

    /// Display precision for save percentage.
    pub save_pct_decimals: u32,

    /// Display precision for counting stats.
    pub counting_decimals: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            goalie_toi_credit: 60.0,
            gaa_decimals: 2,
            save_pct_decimals: 3,
            counting_decimals: 1,
        }
    }
}
