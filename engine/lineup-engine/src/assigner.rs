//! Three-pass daily lineup assignment.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use roster_core::{Player, PlayerId, Position, SlotConfig};

use crate::config::LineupConfig;
use crate::rank::effective_rank;

/// Slot assignments for one (team, date) pair.
///
/// Every eligible-today player absent from all slots is benched for that
/// date; the bench list makes that explicit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyLineup {
    slots: BTreeMap<Position, Vec<PlayerId>>,
    bench: Vec<PlayerId>,
}

impl DailyLineup {
    pub fn assigned(&self, pos: Position) -> &[PlayerId] {
        self.slots.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All starters with their slot, in position order.
    pub fn starters(&self) -> impl Iterator<Item = (Position, PlayerId)> + '_ {
        self.slots
            .iter()
            .flat_map(|(pos, ids)| ids.iter().map(move |id| (*pos, *id)))
    }

    pub fn starter_count(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    pub fn bench(&self) -> &[PlayerId] {
        &self.bench
    }

    pub fn slot_of(&self, id: PlayerId) -> Option<Position> {
        self.starters().find(|(_, p)| *p == id).map(|(pos, _)| pos)
    }

    pub fn is_empty(&self) -> bool {
        self.starter_count() == 0
    }
}

/// Assign an eligible-today pool to slots: maximize filled slots first,
/// prefer better-ranked players second.
///
/// Three deterministic passes over players sorted ascending by effective
/// rank (stable sort, so ties keep input order):
///
/// 1. Single-eligibility players claim their only position while capacity
///    remains, so inflexible players are never crowded out.
/// 2. Multi-eligibility players go to their open position with the fewest
///    other unassigned players eligible for it, preserving flexibility for
///    the scarce slots. Ties go to the first position in iteration order.
/// 3. Each still-benched player may evict one strictly worse-ranked
///    starter from one of its positions; the evicted starter is re-seated
///    into its first other open position if it has one.
///
/// One pass of local swaps can leave an improvable configuration; that is
/// an accepted limitation of the heuristic.
pub fn assign_daily(pool: &[Player], slots: &SlotConfig, cfg: &LineupConfig) -> DailyLineup {
    if pool.is_empty() {
        return DailyLineup {
            slots: slots.positions().map(|p| (p, Vec::new())).collect(),
            bench: Vec::new(),
        };
    }

    let rank = |i: usize| effective_rank(&pool[i], cfg);
    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.sort_by(|&a, &b| rank(a).partial_cmp(&rank(b)).unwrap_or(Ordering::Equal));

    // Eligibility intersected with positions that actually have capacity.
    let usable: Vec<Vec<Position>> = pool
        .iter()
        .map(|p| {
            p.positions
                .iter()
                .copied()
                .filter(|pos| slots.capacity(*pos) > 0)
                .collect()
        })
        .collect();

    // filled[pos] holds pool indices of current starters.
    let mut filled: BTreeMap<Position, Vec<usize>> =
        slots.positions().map(|p| (p, Vec::new())).collect();
    let mut assigned: Vec<Option<Position>> = vec![None; pool.len()];

    // Pass 1: single-eligibility players, best rank first.
    for &i in &order {
        if let [only] = usable[i].as_slice() {
            let starters = filled.entry(*only).or_default();
            if starters.len() < slots.capacity(*only) as usize {
                starters.push(i);
                assigned[i] = Some(*only);
            }
        }
    }
    debug!(
        after_pass1 = assigned.iter().filter(|a| a.is_some()).count(),
        pool = pool.len(),
        "single-eligibility pass complete"
    );

    // Pass 2: multi-eligibility players to the scarcest open position.
    for &i in &order {
        if assigned[i].is_some() || usable[i].len() < 2 {
            continue;
        }
        let mut best: Option<(Position, usize)> = None;
        for &pos in &usable[i] {
            if filled.entry(pos).or_default().len() >= slots.capacity(pos) as usize {
                continue;
            }
            // How many other unassigned players could also fill this slot.
            let scarcity = (0..pool.len())
                .filter(|&j| j != i && assigned[j].is_none() && pool[j].positions.contains(&pos))
                .count();
            if best.is_none_or(|(_, s)| scarcity < s) {
                best = Some((pos, scarcity));
            }
        }
        if let Some((pos, scarcity)) = best {
            debug!(player = %pool[i].id, %pos, scarcity, "scarcity assignment");
            filled.entry(pos).or_default().push(i);
            assigned[i] = Some(pos);
        }
    }

    // Pass 3: upgrade pass. One swap per benched player, then move on.
    let benched: Vec<usize> = order
        .iter()
        .copied()
        .filter(|&i| assigned[i].is_none())
        .collect();
    for i in benched {
        for &pos in &usable[i] {
            let starters = filled.entry(pos).or_default();
            if starters.is_empty() {
                continue;
            }
            let (worst_at, worst) = starters
                .iter()
                .enumerate()
                .fold((0, starters[0]), |acc, (k, &j)| {
                    if rank(j) > rank(acc.1) { (k, j) } else { acc }
                });
            if rank(i) >= rank(worst) {
                continue;
            }
            debug!(
                promoted = %pool[i].id,
                evicted = %pool[worst].id,
                %pos,
                "upgrade swap"
            );
            starters[worst_at] = i;
            assigned[i] = Some(pos);
            assigned[worst] = None;
            // Try to re-seat the evicted starter somewhere else it fits.
            for &other in &usable[worst] {
                if other == pos {
                    continue;
                }
                let starters = filled.entry(other).or_default();
                if starters.len() < slots.capacity(other) as usize {
                    starters.push(worst);
                    assigned[worst] = Some(other);
                    break;
                }
            }
            break;
        }
    }

    let lineup = DailyLineup {
        slots: filled
            .into_iter()
            .map(|(pos, ids)| (pos, ids.into_iter().map(|i| pool[i].id).collect()))
            .collect(),
        bench: order
            .into_iter()
            .filter(|&i| assigned[i].is_none())
            .map(|i| pool[i].id)
            .collect(),
    };
    debug!(
        starters = lineup.starter_count(),
        benched = lineup.bench.len(),
        "daily assignment complete"
    );
    lineup
}
