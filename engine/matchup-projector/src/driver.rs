//! Weekly simulation driver: day-by-day lineup simulation and stat
//! accumulation for one or two rosters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use lineup_engine::{assign_daily, DailyLineup, LineupConfig};
use roster_core::{LeagueSnapshot, Player, Position, Result, SimulatedMove};

use std::collections::BTreeSet;

use crate::config::ProjectionConfig;
use crate::pool::eligible_today;
use crate::stats::{StatLine, GOALS_AGAINST, SAVES, SHUTOUTS, TIME_ON_ICE};

/// One matchup projection request. `team2` is optional so the same driver
/// serves single-roster what-if views.
#[derive(Debug, Clone)]
pub struct ProjectionRequest<'a> {
    pub snapshot: &'a LeagueSnapshot,
    pub week: u32,
    pub team1: &'a str,
    pub team2: Option<&'a str>,
    /// The current date. Days strictly before it are live; today itself is
    /// always re-simulated, since the day's outcome is not fixed until it
    /// is over.
    pub today: NaiveDate,
    pub team1_moves: &'a [SimulatedMove],
    pub team2_moves: &'a [SimulatedMove],
    pub with_game_counts: bool,
}

/// Starter totals for "games played" comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCounts {
    /// Starters across every day of the week (elapsed days re-simulated).
    pub full_week: u32,
    /// Starters across today through week end only.
    pub remaining: u32,
}

/// One side of the projection: already-accrued totals and
/// live-plus-projected totals, both rounded for display stability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideProjection {
    pub team: String,
    pub live: StatLine,
    pub row: StatLine,
    pub games: Option<GameCounts>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub week: u32,
    pub team1: SideProjection,
    pub team2: Option<SideProjection>,
}

/// Simulated optimal lineup for every date of a week, for one roster.
///
/// This is the per-day view behind the weekly projection; callers that
/// want the actual assignments (rather than the aggregated totals) use
/// this directly.
pub fn weekly_lineups(
    snapshot: &LeagueSnapshot,
    week_num: u32,
    team: &str,
    moves: &[SimulatedMove],
    lineup_cfg: &LineupConfig,
) -> Result<Vec<(NaiveDate, DailyLineup)>> {
    let week = *snapshot.week(week_num)?;
    let roster = snapshot.team(team)?;
    Ok(week
        .dates()
        .map(|date| {
            let pool = eligible_today(roster, moves, date);
            (date, assign_daily(&pool, &snapshot.slots, lineup_cfg))
        })
        .collect())
}

/// Project a head-to-head matchup for one fantasy week.
///
/// Missing week or team lookups abort with a typed NotFound error before
/// any partial output is produced. Data gaps (no schedule, projection, or
/// rank for a player) are recovered by substitution inside the pipeline.
pub fn project_matchup(
    req: &ProjectionRequest<'_>,
    cfg: &ProjectionConfig,
    lineup_cfg: &LineupConfig,
) -> Result<ProjectionResult> {
    let week = *req.snapshot.week(req.week)?;
    // Resolve every lookup up front so a NotFound cannot leave a
    // half-computed result.
    let roster1 = req.snapshot.team(req.team1)?;
    let roster2 = match req.team2 {
        Some(name) => Some(req.snapshot.team(name)?),
        None => None,
    };
    info!(
        week = week.week_num,
        team1 = req.team1,
        team2 = req.team2.unwrap_or("-"),
        today = %req.today,
        "projecting matchup"
    );

    let team1 = project_side(
        req.snapshot,
        req.team1,
        roster1,
        req.team1_moves,
        &week,
        req.today,
        req.with_game_counts,
        cfg,
        lineup_cfg,
    );
    let team2 = match (req.team2, roster2) {
        (Some(name), Some(roster)) => Some(project_side(
            req.snapshot,
            name,
            roster,
            req.team2_moves,
            &week,
            req.today,
            req.with_game_counts,
            cfg,
            lineup_cfg,
        )),
        _ => None,
    };

    Ok(ProjectionResult { week: week.week_num, team1, team2 })
}

#[allow(clippy::too_many_arguments)]
fn project_side(
    snapshot: &LeagueSnapshot,
    team: &str,
    roster: &[Player],
    moves: &[SimulatedMove],
    week: &roster_core::FantasyWeek,
    today: NaiveDate,
    with_game_counts: bool,
    cfg: &ProjectionConfig,
    lineup_cfg: &LineupConfig,
) -> SideProjection {
    // Live window: dates strictly before today. Everything from today
    // through week end is (re-)simulated.
    let mut live = StatLine::new();
    for date in week.dates().filter(|d| *d < today) {
        for player in roster {
            let Some(actuals) = snapshot.actuals_for(player.id, date) else {
                continue;
            };
            for (category, value) in actuals {
                live.add(category, *value);
            }
        }
    }
    live.apply_shutout_credit(cfg);
    live.recompute_ratios();

    // Rest-of-week totals start from the corrected live totals. The
    // goalie counting stats accumulate even when the league scores only
    // the derived ratios, so the final recomputation has inputs.
    let accumulated: BTreeSet<&str> = snapshot
        .category_names()
        .chain([GOALS_AGAINST, SAVES, SHUTOUTS])
        .collect();
    let mut row = live.clone();
    let mut remaining_starts = 0u32;
    for date in week.dates().filter(|d| *d >= today) {
        let pool = eligible_today(roster, moves, date);
        if pool.is_empty() {
            continue;
        }
        let lineup = assign_daily(&pool, &snapshot.slots, lineup_cfg);
        debug!(%date, team, starters = lineup.starter_count(), "simulated day");
        for (pos, id) in lineup.starters() {
            remaining_starts += 1;
            let Some(player) = pool.iter().find(|p| p.id == id) else {
                continue;
            };
            for category in &accumulated {
                row.add(category, player.projection(category));
            }
            if pos == Position::G {
                // Projections are rates; credit the start's ice time so
                // the recomputed ratios have a denominator.
                row.add(TIME_ON_ICE, cfg.goalie_toi_credit);
            }
        }
    }
    row.recompute_ratios();

    let games = with_game_counts.then(|| {
        let elapsed_starts: u32 = week
            .dates()
            .filter(|d| *d < today)
            .map(|date| {
                let pool = eligible_today(roster, moves, date);
                assign_daily(&pool, &snapshot.slots, lineup_cfg).starter_count() as u32
            })
            .sum();
        GameCounts {
            full_week: elapsed_starts + remaining_starts,
            remaining: remaining_starts,
        }
    });

    SideProjection {
        team: team.to_string(),
        live: live.rounded(cfg),
        row: row.rounded(cfg),
        games,
    }
}
