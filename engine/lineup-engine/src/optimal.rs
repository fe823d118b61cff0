//! Exact value-maximizing assignment for skater slots.
//!
//! Used where an explicit per-player value function (not just a rank
//! ordering) applies and exactness matters more than heuristic speed.
//! Goalies carry no position ambiguity, so they are slotted separately by
//! taking the top values up to the goalie capacity. Skaters are solved
//! exactly: a skip-or-assign recursion memoized on
//! (player index, remaining capacity per position). The state space is
//! bounded by position-count tuples of small capacities, which keeps this
//! tractable for lineup-sized inputs.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use roster_core::{Player, PlayerId, Position, SlotConfig};

/// Result of the exact solver: starters with slots, bench, and the
/// maximized summed value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueLineup {
    pub starters: Vec<(PlayerId, Position)>,
    pub bench: Vec<PlayerId>,
    pub total_value: f64,
}

/// A player's single marginal value: per-game projections weighted by the
/// caller's category weights. Missing projections contribute zero.
pub fn marginal_value(player: &Player, weights: &HashMap<String, f64>) -> f64 {
    weights
        .iter()
        .map(|(category, weight)| player.projection(category) * weight)
        .sum()
}

struct SkaterSolver<'a> {
    players: Vec<&'a Player>,
    values: Vec<f64>,
    slot_order: Vec<Position>,
    memo: HashMap<(usize, Vec<u32>), (f64, Vec<(PlayerId, Position)>)>,
}

impl SkaterSolver<'_> {
    fn solve(&mut self, index: usize, caps: Vec<u32>) -> (f64, Vec<(PlayerId, Position)>) {
        if index == self.players.len() {
            return (0.0, Vec::new());
        }
        let state = (index, caps.clone());
        if let Some(hit) = self.memo.get(&state) {
            return hit.clone();
        }

        // Path 1: bench the current player.
        let (mut best_value, mut best_lineup) = self.solve(index + 1, caps.clone());

        // Path 2: each eligible slot with remaining capacity.
        let player = self.players[index];
        for (slot_idx, &pos) in self.slot_order.clone().iter().enumerate() {
            if caps[slot_idx] == 0 || !player.positions.contains(&pos) {
                continue;
            }
            let mut next = caps.clone();
            next[slot_idx] -= 1;
            let (tail_value, tail_lineup) = self.solve(index + 1, next);
            let value = self.values[index] + tail_value;
            if value > best_value {
                best_value = value;
                best_lineup = std::iter::once((player.id, pos)).chain(tail_lineup).collect();
            }
        }

        self.memo.insert(state, (best_value, best_lineup.clone()));
        (best_value, best_lineup)
    }
}

/// Exact assignment maximizing summed marginal value under slot
/// capacities.
///
/// Players are considered best value first (ties keep input order, for
/// determinism); goalies are anyone eligible at G and never occupy skater
/// slots.
pub fn solve_by_value(
    pool: &[Player],
    slots: &SlotConfig,
    weights: &HashMap<String, f64>,
) -> ValueLineup {
    let mut ordered: Vec<(&Player, f64)> =
        pool.iter().map(|p| (p, marginal_value(p, weights))).collect();
    ordered.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let (goalies, skaters): (Vec<_>, Vec<_>) =
        ordered.into_iter().partition(|(p, _)| p.is_goalie());

    let skater_slots: BTreeMap<Position, u32> = slots.skater_slots();
    let slot_order: Vec<Position> = skater_slots.keys().copied().collect();
    let caps: Vec<u32> = slot_order.iter().map(|p| skater_slots[p]).collect();

    let mut solver = SkaterSolver {
        players: skaters.iter().map(|(p, _)| *p).collect(),
        values: skaters.iter().map(|(_, v)| *v).collect(),
        slot_order,
        memo: HashMap::new(),
    };
    let (skater_value, mut starters) = solver.solve(0, caps);
    debug!(
        states = solver.memo.len(),
        skaters = skaters.len(),
        "skater assignment memoized"
    );

    let mut total_value = skater_value;
    for (goalie, value) in goalies.iter().take(slots.goalie_count() as usize) {
        starters.push((goalie.id, Position::G));
        total_value += value;
    }

    let starter_ids: Vec<PlayerId> = starters.iter().map(|(id, _)| *id).collect();
    let bench = pool
        .iter()
        .map(|p| p.id)
        .filter(|id| !starter_ids.contains(id))
        .collect();

    ValueLineup { starters, bench, total_value }
}
