//! League scoring categories.

use serde::{Deserialize, Serialize};

/// Whether a category is scored for skaters or goaltenders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringGroup {
    Skater,
    Goaltending,
}

/// One scored stat category, as configured by the league (e.g. "G", "A",
/// "SOG", "GAA", "SV%").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCategory {
    pub name: String,
    pub group: ScoringGroup,
}

impl StatCategory {
    pub fn skater(name: &str) -> Self {
        Self { name: name.to_string(), group: ScoringGroup::Skater }
    }

    pub fn goaltending(name: &str) -> Self {
        Self { name: name.to_string(), group: ScoringGroup::Goaltending }
    }
}
