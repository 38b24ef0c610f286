//! Competition stages — the unit standings are computed over.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{SeasonId, SportCategoryId, StageId};

/// The phase of a competition a stage represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionStage {
    GroupStage,
    Playins,
    Playoffs,
    Finals,
}

/// How a stage's results are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageFormat {
    /// Round-robin style, ranked by win/loss record.
    RoundRobin,
    /// Elimination tree with winner propagation.
    Elimination,
}

impl CompetitionStage {
    /// The aggregation format for this phase. This mapping, not the caller,
    /// decides which standings path runs.
    pub fn format(&self) -> StageFormat {
        match self {
            CompetitionStage::GroupStage => StageFormat::RoundRobin,
            CompetitionStage::Playins | CompetitionStage::Playoffs | CompetitionStage::Finals => {
                StageFormat::Elimination
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionStage::GroupStage => "group_stage",
            CompetitionStage::Playins => "playins",
            CompetitionStage::Playoffs => "playoffs",
            CompetitionStage::Finals => "finals",
        }
    }
}

impl fmt::Display for CompetitionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CompetitionStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group_stage" => Ok(CompetitionStage::GroupStage),
            "playins" => Ok(CompetitionStage::Playins),
            "playoffs" => Ok(CompetitionStage::Playoffs),
            "finals" => Ok(CompetitionStage::Finals),
            other => Err(format!("unknown competition stage: {other}")),
        }
    }
}

/// A (sport category, season, competition phase) combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    pub sport_category_id: SportCategoryId,
    pub season_id: SeasonId,
    pub competition_stage: CompetitionStage,
}

impl Stage {
    pub fn new(
        id: StageId,
        sport_category_id: SportCategoryId,
        season_id: SeasonId,
        competition_stage: CompetitionStage,
    ) -> Self {
        Self {
            id,
            sport_category_id,
            season_id,
            competition_stage,
        }
    }
}
