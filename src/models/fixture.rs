//! Fixtures and their participants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FixtureId, ParticipantId, StageId, TeamId};

/// A single match within a stage.
///
/// `round`/`slot` position the fixture inside an elimination bracket:
/// round 0 holds the entry matches, `slot` numbers matches within a round
/// from 0. Group-stage fixtures leave both unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,

    pub stage_id: StageId,

    pub round: Option<u32>,

    pub slot: Option<u32>,

    pub scheduled_at: Option<DateTime<Utc>>,
}

impl Fixture {
    pub fn new(id: FixtureId, stage_id: StageId) -> Self {
        Self {
            id,
            stage_id,
            round: None,
            slot: None,
            scheduled_at: None,
        }
    }

    /// Builder method to place the fixture in a bracket.
    pub fn with_bracket_position(mut self, round: u32, slot: u32) -> Self {
        self.round = Some(round);
        self.slot = Some(slot);
        self
    }

    pub fn with_scheduled_at(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(at);
        self
    }
}

/// Links a team to a fixture, with its score once recorded.
///
/// A `None` score means the result is not yet decided — it is never treated
/// as zero by any derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureParticipant {
    pub id: ParticipantId,

    pub fixture_id: FixtureId,

    pub team_id: TeamId,

    pub score: Option<i64>,
}

impl FixtureParticipant {
    pub fn new(id: ParticipantId, fixture_id: FixtureId, team_id: TeamId) -> Self {
        Self {
            id,
            fixture_id,
            team_id,
            score: None,
        }
    }

    pub fn with_score(mut self, score: i64) -> Self {
        self.score = Some(score);
        self
    }
}
