//! Runs a matchup projection and an open-slot report against a small
//! in-memory snapshot, printing the results as JSON.

use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, Level};

use lineup_engine::LineupConfig;
use matchup_projector::{
    open_slot_report, project_matchup, ProjectionConfig, ProjectionRequest,
};
use roster_core::{
    parse_eligible_positions, FantasyWeek, LeagueSnapshot, Player, PlayerId, Position,
    SlotConfig, StatCategory,
};

fn date(s: &str) -> Result<NaiveDate> {
    s.parse().with_context(|| format!("bad date: {s}"))
}

fn player(
    id: u64,
    name: &str,
    team: &str,
    positions: &str,
    rank: f64,
    projections: &[(&str, f64)],
    dates: &[&str],
) -> Result<Player> {
    Ok(Player {
        id: PlayerId(id),
        name: name.to_string(),
        team: team.to_string(),
        positions: parse_eligible_positions(positions)?,
        total_rank: Some(rank),
        projections: projections.iter().map(|(c, v)| (c.to_string(), *v)).collect(),
        category_ranks: HashMap::new(),
        game_dates: dates.iter().map(|s| date(s)).collect::<Result<_>>()?,
    })
}

fn build_snapshot() -> Result<LeagueSnapshot> {
    let everyday = ["2025-11-03", "2025-11-05", "2025-11-07", "2025-11-08"];
    let roster1 = vec![
        player(101, "Dash Kringle", "COL", "C", 4.0, &[("G", 0.6), ("A", 0.8)], &everyday)?,
        player(102, "Moe Sizlak", "COL", "C, LW", 9.0, &[("G", 0.4), ("A", 0.5)], &everyday)?,
        player(103, "Ty Rod", "DAL", "D", 14.0, &[("G", 0.1), ("A", 0.6)], &everyday)?,
        player(104, "Sal Minella", "DAL", "G", 6.0, &[("GA", 2.4), ("SV", 27.0)], &everyday)?,
    ];
    let roster2 = vec![
        player(201, "Bo Darville", "NYR", "C", 3.0, &[("G", 0.7), ("A", 0.6)], &everyday)?,
        player(202, "Stu Pendous", "NYR", "D", 11.0, &[("G", 0.2), ("A", 0.4)], &everyday)?,
        player(203, "Art Vandelay", "NYI", "G", 8.0, &[("GA", 2.8), ("SV", 29.0)], &everyday)?,
    ];

    Ok(LeagueSnapshot {
        rosters: BTreeMap::from([
            ("Ice Holes".to_string(), roster1),
            ("Puck Hogs".to_string(), roster2),
        ]),
        weeks: BTreeMap::from([(
            5,
            FantasyWeek::new(5, date("2025-11-03")?, date("2025-11-09")?)?,
        )]),
        categories: vec![
            StatCategory::skater("G"),
            StatCategory::skater("A"),
            StatCategory::goaltending("GAA"),
            StatCategory::goaltending("SV%"),
        ],
        slots: SlotConfig::new([
            (Position::C, 2),
            (Position::LW, 2),
            (Position::D, 2),
            (Position::G, 1),
        ])?,
        actuals: BTreeMap::new(),
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let snapshot = build_snapshot()?;
    let today = date("2025-11-05")?;

    let request = ProjectionRequest {
        snapshot: &snapshot,
        week: 5,
        team1: "Ice Holes",
        team2: Some("Puck Hogs"),
        today,
        team1_moves: &[],
        team2_moves: &[],
        with_game_counts: true,
    };
    let projection =
        project_matchup(&request, &ProjectionConfig::default(), &LineupConfig::default())?;
    info!("projection complete");
    println!("{}", serde_json::to_string_pretty(&projection)?);

    let report = open_slot_report(
        &snapshot,
        5,
        "Ice Holes",
        &[],
        today,
        &LineupConfig::default(),
    )?;
    for (day, cells) in &report.days {
        let rendered: Vec<String> =
            cells.iter().map(|(pos, cell)| format!("{pos}:{cell}")).collect();
        println!("{day}  {}", rendered.join("  "));
    }

    Ok(())
}
