//! Sports and sport categories.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{SportCategoryId, SportId};

/// A sport offered by the federation (e.g. volleyball, futsal).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sport {
    pub id: SportId,
    pub name: String,
}

impl Sport {
    pub fn new(id: SportId, name: String) -> Self {
        Self { id, name }
    }
}

/// Competition division within a sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Division {
    Men,
    Women,
    Mixed,
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Division::Men => "men",
            Division::Women => "women",
            Division::Mixed => "mixed",
        };
        write!(f, "{s}")
    }
}

/// Competition level within a division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Varsity,
    JuniorVarsity,
    Club,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Varsity => "varsity",
            Level::JuniorVarsity => "junior_varsity",
            Level::Club => "club",
        };
        write!(f, "{s}")
    }
}

/// A (sport, division, level) triple — the unit teams actually compete in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportCategory {
    pub id: SportCategoryId,
    pub sport_id: SportId,
    pub division: Division,
    pub level: Level,
}

impl SportCategory {
    pub fn new(id: SportCategoryId, sport_id: SportId, division: Division, level: Level) -> Self {
        Self {
            id,
            sport_id,
            division,
            level,
        }
    }

    /// Short label for dropdowns and logs, e.g. "women varsity".
    pub fn label(&self) -> String {
        format!("{} {}", self.division, self.level)
    }
}
