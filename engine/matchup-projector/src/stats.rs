//! Category stat accumulation and derived-ratio recomputation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ProjectionConfig;

/// Goalie counting stats that feed the derived ratios. These are always
/// accumulated even when the league scores only the ratios themselves.
pub const GOALS_AGAINST: &str = "GA";
pub const SAVES: &str = "SV";
pub const SHUTOUTS: &str = "SO";
pub const TIME_ON_ICE: &str = "TOI";

/// Derived ratio categories. Never summed day by day; always recomputed
/// from the summed counting stats.
pub const GAA: &str = "GAA";
pub const SAVE_PCT: &str = "SV%";

pub fn is_ratio(category: &str) -> bool {
    category == GAA || category == SAVE_PCT
}

/// One side's accumulated category totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatLine(BTreeMap<String, f64>);

impl StatLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: &str) -> f64 {
        self.0.get(category).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, category: &str, value: f64) {
        self.0.insert(category.to_string(), value);
    }

    /// Accumulate into a category. Ratio categories are rejected at this
    /// boundary: summing daily GAA/SV% across starts is statistically
    /// invalid, so ratios only ever enter via [`StatLine::recompute_ratios`].
    pub fn add(&mut self, category: &str, value: f64) {
        if is_ratio(category) {
            return;
        }
        *self.0.entry(category.to_string()).or_insert(0.0) += value;
    }

    /// Add the fixed time-on-ice credit for each recorded shutout.
    pub fn apply_shutout_credit(&mut self, cfg: &ProjectionConfig) {
        let shutouts = self.get(SHUTOUTS);
        if shutouts > 0.0 {
            self.add(TIME_ON_ICE, shutouts * cfg.goalie_toi_credit);
        }
    }

    /// Recompute GAA and save percentage from the summed counting stats.
    /// Degenerate denominators resolve to zero, never an error.
    pub fn recompute_ratios(&mut self) {
        let ga = self.get(GOALS_AGAINST);
        let sv = self.get(SAVES);
        let toi = self.get(TIME_ON_ICE);

        let gaa = if toi > 0.0 { ga * 60.0 / toi } else { 0.0 };
        let shots_against = sv + ga;
        let save_pct = if shots_against > 0.0 { sv / shots_against } else { 0.0 };

        self.0.insert(GAA.to_string(), gaa);
        self.0.insert(SAVE_PCT.to_string(), save_pct);
    }

    /// Round every category to its documented display precision: GAA to
    /// hundredths, save percentage to thousandths, counting stats to
    /// tenths.
    pub fn rounded(&self, cfg: &ProjectionConfig) -> StatLine {
        StatLine(
            self.0
                .iter()
                .map(|(category, value)| {
                    let places = match category.as_str() {
                        GAA => cfg.gaa_decimals,
                        SAVE_PCT => cfg.save_pct_decimals,
                        _ => cfg.counting_decimals,
                    };
                    (category.clone(), round_to(*value, places))
                })
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(c, v)| (c.as_str(), *v))
    }
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
