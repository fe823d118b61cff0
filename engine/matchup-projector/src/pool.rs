//! Eligible-today pool construction with simulated-move overlays.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use roster_core::{Player, PlayerId, SimulatedMove};

/// Build the pool of players available to start on `date`: the roster with
/// every in-force move overlaid (drops excluded, adds included), filtered
/// to players whose team plays that day.
///
/// Moves are a pure overlay scoped to this computation; the roster slice
/// is never modified. Overlay membership depends only on each move's
/// effective date, not on the order the moves were created in.
pub fn eligible_today(
    roster: &[Player],
    moves: &[SimulatedMove],
    date: NaiveDate,
) -> Vec<Player> {
    let dropped: BTreeSet<PlayerId> = moves
        .iter()
        .filter(|m| m.applies_on(date))
        .map(|m| m.dropped)
        .collect();

    let mut pool: Vec<Player> = roster
        .iter()
        .filter(|p| !dropped.contains(&p.id))
        .cloned()
        .collect();
    for m in moves.iter().filter(|m| m.applies_on(date)) {
        if !dropped.contains(&m.added.id) && !pool.iter().any(|p| p.id == m.added.id) {
            pool.push(m.added.clone());
        }
    }

    pool.retain(|p| p.plays_on(date));
    pool
}
