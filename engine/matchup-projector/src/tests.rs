//! End-to-end tests for the weekly driver and the open-slot analyzer.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use lineup_engine::LineupConfig;
use roster_core::{
    parse_eligible_positions, EngineError, FantasyWeek, LeagueSnapshot, Player, PlayerId,
    Position, SimulatedMove, SlotConfig, StatCategory,
};

use crate::config::ProjectionConfig;
use crate::driver::{project_matchup, weekly_lineups, ProjectionRequest};
use crate::open_slots::{open_slot_report, SlotCell};

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// Week 5: Monday 2025-11-03 through Sunday 2025-11-09.
fn week5() -> FantasyWeek {
    FantasyWeek::new(5, d("2025-11-03"), d("2025-11-09")).unwrap()
}

fn player(
    id: u64,
    positions: &str,
    rank: f64,
    projections: &[(&str, f64)],
    dates: &[&str],
) -> Player {
    Player {
        id: PlayerId(id),
        name: format!("Player {id}"),
        team: "TOR".to_string(),
        positions: parse_eligible_positions(positions).unwrap(),
        total_rank: Some(rank),
        projections: projections
            .iter()
            .map(|(c, v)| (c.to_string(), *v))
            .collect(),
        category_ranks: HashMap::new(),
        game_dates: dates.iter().map(|s| d(s)).collect(),
    }
}

fn all_week() -> Vec<&'static str> {
    vec![
        "2025-11-03",
        "2025-11-04",
        "2025-11-05",
        "2025-11-06",
        "2025-11-07",
        "2025-11-08",
        "2025-11-09",
    ]
}

fn snapshot(rosters: BTreeMap<String, Vec<Player>>) -> LeagueSnapshot {
    LeagueSnapshot {
        rosters,
        weeks: [(5, week5())].into(),
        categories: vec![
            StatCategory::skater("G"),
            StatCategory::skater("A"),
            StatCategory::goaltending("GAA"),
            StatCategory::goaltending("SV%"),
        ],
        slots: SlotConfig::new([
            (Position::C, 2),
            (Position::D, 2),
            (Position::G, 1),
        ])
        .unwrap(),
        actuals: BTreeMap::new(),
    }
}

fn request<'a>(snap: &'a LeagueSnapshot, today: &str) -> ProjectionRequest<'a> {
    ProjectionRequest {
        snapshot: snap,
        week: 5,
        team1: "Ice Holes",
        team2: None,
        today: d(today),
        team1_moves: &[],
        team2_moves: &[],
        with_game_counts: false,
    }
}

#[test]
fn missing_week_and_team_are_typed_failures() {
    let snap = snapshot([("Ice Holes".to_string(), vec![])].into());
    let cfg = ProjectionConfig::default();
    let lineup_cfg = LineupConfig::default();

    let mut req = request(&snap, "2025-11-03");
    req.week = 9;
    assert_eq!(
        project_matchup(&req, &cfg, &lineup_cfg).unwrap_err(),
        EngineError::WeekNotFound(9)
    );

    let mut req = request(&snap, "2025-11-03");
    req.team1 = "Zamboni Drivers";
    assert_eq!(
        project_matchup(&req, &cfg, &lineup_cfg).unwrap_err(),
        EngineError::TeamNotFound("Zamboni Drivers".to_string())
    );

    assert_eq!(
        open_slot_report(&snap, 9, "Ice Holes", &[], d("2025-11-03"), &lineup_cfg)
            .unwrap_err(),
        EngineError::WeekNotFound(9)
    );
}

#[test]
fn skater_projections_accumulate_per_start() {
    // One center with two games left: row totals are two games of
    // per-game projections, live stays empty.
    let roster = vec![player(
        1,
        "C",
        5.0,
        &[("G", 0.5), ("A", 0.7)],
        &["2025-11-04", "2025-11-06"],
    )];
    let snap = snapshot([("Ice Holes".to_string(), roster)].into());
    let result = project_matchup(
        &request(&snap, "2025-11-03"),
        &ProjectionConfig::default(),
        &LineupConfig::default(),
    )
    .unwrap();

    assert_eq!(result.team1.row.get("G"), 1.0);
    assert_eq!(result.team1.row.get("A"), 1.4);
    assert_eq!(result.team1.live.get("G"), 0.0);
}

#[test]
fn goalie_starts_credit_ice_time_and_recompute_ratios() {
    // Two projected starts at 2.5 GA / 28 SV per game. With the 60-minute
    // credit per start: GAA = 5*60/120 = 2.5, SV% = 56/61.
    let roster = vec![player(
        1,
        "G",
        3.0,
        &[("GA", 2.5), ("SV", 28.0)],
        &["2025-11-04", "2025-11-06"],
    )];
    let snap = snapshot([("Ice Holes".to_string(), roster)].into());
    let result = project_matchup(
        &request(&snap, "2025-11-03"),
        &ProjectionConfig::default(),
        &LineupConfig::default(),
    )
    .unwrap();

    assert_eq!(result.team1.row.get("TOI"), 120.0);
    assert_eq!(result.team1.row.get("GAA"), 2.5);
    assert_eq!(result.team1.row.get("SV%"), 0.918);
}

#[test]
fn live_stats_get_shutout_credit_and_exact_ratio() {
    // Week fully elapsed. Day one: 2 GA on 25 saves over 65 recorded
    // minutes. Day two: a shutout with no recorded ice time; the fixed
    // 60-minute credit stands in. GAA must come from the summed counting
    // stats: 2*60/125 = 0.96, never the sum of daily GAA values.
    let goalie = player(1, "G", 3.0, &[], &["2025-11-03", "2025-11-04"]);
    let mut snap = snapshot([("Ice Holes".to_string(), vec![goalie])].into());
    snap.actuals = [(
        PlayerId(1),
        [
            (
                d("2025-11-03"),
                [
                    ("GA".to_string(), 2.0),
                    ("SV".to_string(), 25.0),
                    ("TOI".to_string(), 65.0),
                ]
                .into(),
            ),
            (
                d("2025-11-04"),
                [("SV".to_string(), 20.0), ("SO".to_string(), 1.0)].into(),
            ),
        ]
        .into(),
    )]
    .into();

    let result = project_matchup(
        &request(&snap, "2025-11-20"),
        &ProjectionConfig::default(),
        &LineupConfig::default(),
    )
    .unwrap();

    assert_eq!(result.team1.live.get("TOI"), 125.0);
    assert_eq!(result.team1.live.get("GAA"), 0.96);
    assert_eq!(result.team1.live.get("SV%"), 0.957); // 45/47
    // Nothing left to project: row matches live.
    assert_eq!(result.team1.row, result.team1.live);
}

#[test]
fn projection_is_idempotent() {
    let roster = vec![
        player(1, "C", 2.0, &[("G", 0.4)], &all_week()),
        player(2, "D", 7.0, &[("A", 0.6)], &all_week()),
        player(3, "G", 4.0, &[("GA", 2.2), ("SV", 30.0)], &all_week()),
    ];
    let snap = snapshot([("Ice Holes".to_string(), roster)].into());
    let cfg = ProjectionConfig::default();
    let lineup_cfg = LineupConfig::default();

    let first = project_matchup(&request(&snap, "2025-11-05"), &cfg, &lineup_cfg).unwrap();
    let second = project_matchup(&request(&snap, "2025-11-05"), &cfg, &lineup_cfg).unwrap();
    assert_eq!(first, second);
}

#[test]
fn simulated_move_swaps_pool_membership_from_effective_date() {
    // Player 1 projects 1.0 G/game; the added player 2 projects 10.0.
    // Effective Thursday: three days of player 1, four of player 2.
    let roster = vec![player(1, "C", 5.0, &[("G", 1.0)], &all_week())];
    let moves = vec![SimulatedMove {
        effective: d("2025-11-06"),
        dropped: PlayerId(1),
        added: player(2, "C", 1.0, &[("G", 10.0)], &all_week()),
    }];
    let snap = snapshot([("Ice Holes".to_string(), roster)].into());
    let mut req = request(&snap, "2025-11-03");
    req.team1_moves = &moves;

    let result =
        project_matchup(&req, &ProjectionConfig::default(), &LineupConfig::default())
            .unwrap();
    assert_eq!(result.team1.row.get("G"), 43.0);
}

#[test]
fn head_to_head_projects_both_sides_with_game_counts() {
    let roster1 = vec![player(1, "C", 2.0, &[("G", 0.5)], &all_week())];
    let roster2 = vec![
        player(11, "C", 3.0, &[("G", 0.3)], &all_week()),
        player(12, "D", 6.0, &[("A", 0.4)], &["2025-11-08"]),
    ];
    let snap = snapshot(
        [
            ("Ice Holes".to_string(), roster1),
            ("Puck Hogs".to_string(), roster2),
        ]
        .into(),
    );
    let mut req = request(&snap, "2025-11-06");
    req.team2 = Some("Puck Hogs");
    req.with_game_counts = true;

    let result =
        project_matchup(&req, &ProjectionConfig::default(), &LineupConfig::default())
            .unwrap();

    let games1 = result.team1.games.unwrap();
    assert_eq!(games1.full_week, 7);
    assert_eq!(games1.remaining, 4);

    let team2 = result.team2.unwrap();
    let games2 = team2.games.unwrap();
    assert_eq!(games2.full_week, 8);
    assert_eq!(games2.remaining, 5);
}

#[test]
fn weekly_lineups_cover_every_date_and_respect_schedules() {
    let roster = vec![
        player(1, "C", 2.0, &[], &all_week()),
        player(2, "G", 4.0, &[], &["2025-11-05"]),
    ];
    let snap = snapshot([("Ice Holes".to_string(), roster)].into());
    let lineups =
        weekly_lineups(&snap, 5, "Ice Holes", &[], &LineupConfig::default()).unwrap();

    assert_eq!(lineups.len(), 7);
    assert_eq!(lineups[0].0, d("2025-11-03"));
    assert_eq!(lineups[6].0, d("2025-11-09"));
    // The goalie starts only on their lone game night.
    assert_eq!(lineups[0].1.slot_of(PlayerId(2)), None);
    assert_eq!(lineups[2].1.slot_of(PlayerId(2)), Some(Position::G));
    for (_, lineup) in &lineups {
        assert_eq!(lineup.slot_of(PlayerId(1)), Some(Position::C));
    }
}

#[test]
fn day_with_no_games_contributes_nothing() {
    let roster = vec![player(1, "C", 2.0, &[("G", 0.5)], &[])];
    let snap = snapshot([("Ice Holes".to_string(), roster)].into());
    let result = project_matchup(
        &request(&snap, "2025-11-03"),
        &ProjectionConfig::default(),
        &LineupConfig::default(),
    )
    .unwrap();
    assert_eq!(result.team1.row.get("G"), 0.0);
}

#[test]
fn full_slot_with_flexible_starters_is_flagged() {
    // C (capacity 2) fills with two C/D-eligible players while D holds
    // one of two: C reports 0 but flagged, D reports a plain 1.
    let roster = vec![
        player(1, "C, D", 1.0, &[], &["2025-11-03"]),
        player(2, "C, D", 2.0, &[], &["2025-11-03"]),
        player(3, "D", 3.0, &[], &["2025-11-03"]),
    ];
    let snap = snapshot([("Ice Holes".to_string(), roster)].into());
    let report = open_slot_report(
        &snap,
        5,
        "Ice Holes",
        &[],
        d("2025-11-03"),
        &LineupConfig::default(),
    )
    .unwrap();

    let monday = &report.days[&d("2025-11-03")];
    assert_eq!(monday[&Position::C], SlotCell::Open { count: 0, could_vacate: true });
    assert_eq!(monday[&Position::D], SlotCell::Open { count: 1, could_vacate: false });
    assert_eq!(monday[&Position::G], SlotCell::Open { count: 1, could_vacate: false });
}

#[test]
fn elapsed_days_render_as_placeholders() {
    let roster = vec![player(1, "C", 1.0, &[], &all_week())];
    let snap = snapshot([("Ice Holes".to_string(), roster)].into());
    let report = open_slot_report(
        &snap,
        5,
        "Ice Holes",
        &[],
        d("2025-11-05"),
        &LineupConfig::default(),
    )
    .unwrap();

    assert_eq!(report.days[&d("2025-11-03")][&Position::C], SlotCell::Past);
    assert_eq!(report.days[&d("2025-11-04")][&Position::C], SlotCell::Past);
    assert_eq!(
        report.days[&d("2025-11-05")][&Position::C],
        SlotCell::Open { count: 1, could_vacate: false }
    );
    assert_eq!(report.days.len(), 7);
}
