//! Ranking normalizer: per-category ranks -> one ascending total rank.

use std::collections::{BTreeSet, HashMap};

use roster_core::{Player, StatCategory};

use crate::config::LineupConfig;

/// Collapse a player's per-category ranks into a single ascending score
/// (lower is better) over the league's scored categories.
///
/// Categories the caller left unchecked still contribute, dampened by
/// `cfg.unchecked_divisor`, rather than being excluded outright. A player
/// with no rank for any scored category gets `None`; the sentinel
/// substitution happens later, at the assignment boundary.
pub fn total_rank(
    category_ranks: &HashMap<String, f64>,
    categories: &[StatCategory],
    checked: &BTreeSet<String>,
    cfg: &LineupConfig,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut any = false;
    for category in categories {
        let Some(rank) = category_ranks.get(&category.name) else {
            continue;
        };
        any = true;
        if checked.contains(&category.name) {
            sum += rank;
        } else {
            sum += rank / cfg.unchecked_divisor;
        }
    }
    any.then_some(sum)
}

/// Rank used for assignment ordering: the player's total rank, or the
/// worst-case sentinel when no rank data exists.
pub fn effective_rank(player: &Player, cfg: &LineupConfig) -> f64 {
    player.total_rank.unwrap_or(cfg.unranked_sentinel)
}
