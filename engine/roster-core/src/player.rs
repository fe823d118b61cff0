//! Players, position codes, and eligibility parsing.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Stable numeric player identifier from the league snapshot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lineup slot position codes.
///
/// Bench and injured-reserve designations are intentionally not
/// representable; they are stripped at ingestion. The derived `Ord`
/// (declaration order) is the deterministic iteration order used by every
/// eligible-position tie-break in the assigner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Position {
    C,
    LW,
    RW,
    W,
    D,
    Util,
    G,
}

impl Position {
    pub fn code(&self) -> &'static str {
        match self {
            Position::C => "C",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::W => "W",
            Position::D => "D",
            Position::Util => "Util",
            Position::G => "G",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "C" => Ok(Position::C),
            "LW" => Ok(Position::LW),
            "RW" => Ok(Position::RW),
            "W" => Ok(Position::W),
            "D" => Ok(Position::D),
            "Util" | "UTIL" => Ok(Position::Util),
            "G" => Ok(Position::G),
            other => Err(EngineError::UnknownPosition(other.to_string())),
        }
    }
}

/// Parse the comma-joined eligibility string stored by the ingestion layer
/// (e.g. `"C, LW"`), once, at construction. Bench/IR tokens are dropped;
/// any other unknown token is an error.
pub fn parse_eligible_positions(raw: &str) -> Result<BTreeSet<Position>> {
    let mut out = BTreeSet::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() || token == "BN" || token == "IR" || token == "IR+" {
            continue;
        }
        out.insert(token.parse::<Position>()?);
    }
    Ok(out)
}

/// Normalize the handful of feed abbreviations that diverge from standard
/// NHL tricodes.
pub fn normalize_tricode(abbr: &str) -> String {
    match abbr.to_ascii_uppercase().as_str() {
        "TB" => "TBL".to_string(),
        "NJ" => "NJD".to_string(),
        "SJ" => "SJS".to_string(),
        "LA" => "LAK".to_string(),
        "MON" => "MTL".to_string(),
        "WAS" => "WSH".to_string(),
        other => other.to_string(),
    }
}

/// A rostered player, fully hydrated from the snapshot.
///
/// Read-only after construction. `total_rank` is ascending (lower is
/// better); `None` means the player has no rank data at all and gets the
/// worst-case sentinel substituted at the assignment boundary, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Real-world team tricode, already normalized.
    pub team: String,
    pub positions: BTreeSet<Position>,
    pub total_rank: Option<f64>,
    /// Per-game projected value by category name.
    pub projections: HashMap<String, f64>,
    /// Category-specific rank by category name (lower is better).
    pub category_ranks: HashMap<String, f64>,
    /// Dates on which this player's real-world team plays.
    pub game_dates: BTreeSet<NaiveDate>,
}

impl Player {
    /// Whether the player's team has a game on `date`. A player with no
    /// schedule entries is simply treated as not playing.
    pub fn plays_on(&self, date: NaiveDate) -> bool {
        self.game_dates.contains(&date)
    }

    /// Per-game projection for a category; absent projections contribute
    /// zero.
    pub fn projection(&self, category: &str) -> f64 {
        self.projections.get(category).copied().unwrap_or(0.0)
    }

    pub fn is_goalie(&self) -> bool {
        self.positions.contains(&Position::G)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_eligibility_skips_bench_and_ir() {
        let set = parse_eligible_positions("C, LW, BN, IR+").unwrap();
        assert_eq!(
            set.into_iter().collect::<Vec<_>>(),
            vec![Position::C, Position::LW]
        );
    }

    #[test]
    fn parse_eligibility_rejects_unknown_codes() {
        assert!(matches!(
            parse_eligible_positions("C, XX"),
            Err(EngineError::UnknownPosition(code)) if code == "XX"
        ));
    }

    #[test]
    fn position_order_is_declaration_order() {
        let set: BTreeSet<Position> =
            [Position::G, Position::C, Position::D].into_iter().collect();
        assert_eq!(
            set.into_iter().collect::<Vec<_>>(),
            vec![Position::C, Position::D, Position::G]
        );
    }

    #[test]
    fn tricode_normalization() {
        assert_eq!(normalize_tricode("TB"), "TBL");
        assert_eq!(normalize_tricode("mon"), "MTL");
        assert_eq!(normalize_tricode("BOS"), "BOS");
    }
}
