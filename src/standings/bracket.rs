//! Elimination-bracket assembly: fixtures placed by round/slot hints, with
//! winners propagated upward into parents that have no participant yet.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

use crate::models::{Fixture, FixtureId, FixtureParticipant, Team, TeamId};

/// One side of a bracket fixture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketSide {
    pub team_id: TeamId,
    pub team_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    /// Set when this side was filled by propagation from a feeder fixture
    /// rather than by a recorded participant row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_fixture: Option<FixtureId>,
}

/// Whether a bracket fixture has produced a winner.
///
/// A tie in an elimination round is a data anomaly; it is surfaced as
/// `Unresolved`, never silently broken.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NodeOutcome {
    Decided { winner: TeamId },
    Pending,
    Unresolved,
}

#[derive(Debug, Clone, Serialize)]
pub struct BracketNode {
    pub fixture_id: FixtureId,
    pub round: u32,
    pub slot: u32,
    /// Left side (even feeder slot), then right side (odd feeder slot).
    pub sides: [Option<BracketSide>; 2],
    #[serde(flatten)]
    pub outcome: NodeOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct BracketRound {
    pub round: u32,
    pub fixtures: Vec<BracketNode>,
}

/// The assembled elimination tree for one stage.
#[derive(Debug, Serialize)]
pub struct BracketTree {
    pub rounds: Vec<BracketRound>,
    /// Fixtures whose scores tie and therefore cannot feed a parent.
    pub unresolved: Vec<FixtureId>,
}

/// Assemble the bracket for one elimination stage.
///
/// Fixtures without both a round and a slot hint cannot be placed and are
/// skipped with a warning. A child at `(round, slot)` feeds the parent at
/// `(round + 1, slot / 2)`, landing on side `slot % 2`; propagation only
/// fills empty sides, never displacing a recorded participant.
pub fn assemble(
    fixtures: &[Fixture],
    participants: &[FixtureParticipant],
    teams: &HashMap<TeamId, Team>,
) -> BracketTree {
    let mut by_fixture: HashMap<FixtureId, Vec<&FixtureParticipant>> = HashMap::new();
    for p in participants {
        by_fixture.entry(p.fixture_id).or_default().push(p);
    }

    let team_name = |id: TeamId| -> String {
        teams
            .get(&id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("Team {id}"))
    };

    // Ordered arena keyed by coordinate: iteration order is the
    // bottom-up propagation order.
    let mut arena: BTreeMap<(u32, u32), BracketNode> = BTreeMap::new();

    for fixture in fixtures {
        let (round, slot) = match (fixture.round, fixture.slot) {
            (Some(r), Some(s)) => (r, s),
            _ => {
                warn!(fixture_id = %fixture.id, "fixture has no bracket position, skipping");
                continue;
            }
        };

        if let Some(existing) = arena.get(&(round, slot)) {
            warn!(
                fixture_id = %fixture.id,
                occupied_by = %existing.fixture_id,
                round, slot,
                "duplicate bracket position, skipping"
            );
            continue;
        }

        let mut parts: Vec<&FixtureParticipant> = by_fixture
            .get(&fixture.id)
            .map(|v| v.clone())
            .unwrap_or_default();
        parts.sort_by_key(|p| p.id);
        if parts.len() > 2 {
            warn!(
                fixture_id = %fixture.id,
                count = parts.len(),
                "bracket fixture has more than two participants, keeping first two"
            );
        }

        let mut sides: [Option<BracketSide>; 2] = [None, None];
        for (i, p) in parts.iter().take(2).enumerate() {
            sides[i] = Some(BracketSide {
                team_id: p.team_id,
                team_name: team_name(p.team_id),
                score: p.score,
                from_fixture: None,
            });
        }

        arena.insert(
            (round, slot),
            BracketNode {
                fixture_id: fixture.id,
                round,
                slot,
                sides,
                outcome: NodeOutcome::Pending,
            },
        );
    }

    let coordinates: Vec<(u32, u32)> = arena.keys().copied().collect();
    let mut unresolved = Vec::new();

    for (round, slot) in coordinates {
        let (winner, fixture_id) = {
            let node = match arena.get_mut(&(round, slot)) {
                Some(node) => node,
                None => continue,
            };
            node.outcome = decide(&node.sides);

            match &node.outcome {
                NodeOutcome::Decided { winner } => (*winner, node.fixture_id),
                NodeOutcome::Unresolved => {
                    unresolved.push(node.fixture_id);
                    continue;
                }
                NodeOutcome::Pending => continue,
            }
        };

        let parent = (round + 1, slot / 2);
        let side = (slot % 2) as usize;
        if let Some(parent_node) = arena.get_mut(&parent) {
            // Recorded participants keep their side; the feeder takes the
            // parity side if free, else the remaining one. A fully seated
            // parent is never touched.
            let target = if parent_node.sides[side].is_none() {
                Some(side)
            } else if parent_node.sides[side ^ 1].is_none() {
                Some(side ^ 1)
            } else {
                None
            };
            if let Some(side) = target {
                parent_node.sides[side] = Some(BracketSide {
                    team_id: winner,
                    team_name: team_name(winner),
                    score: None,
                    from_fixture: Some(fixture_id),
                });
            }
        }
    }

    let mut rounds: BTreeMap<u32, Vec<BracketNode>> = BTreeMap::new();
    for ((round, _), node) in arena {
        rounds.entry(round).or_default().push(node);
    }

    BracketTree {
        rounds: rounds
            .into_iter()
            .map(|(round, fixtures)| BracketRound { round, fixtures })
            .collect(),
        unresolved,
    }
}

fn decide(sides: &[Option<BracketSide>; 2]) -> NodeOutcome {
    match (&sides[0], &sides[1]) {
        (Some(a), Some(b)) => match (a.score, b.score) {
            (Some(sa), Some(sb)) if sa > sb => NodeOutcome::Decided { winner: a.team_id },
            (Some(sa), Some(sb)) if sa < sb => NodeOutcome::Decided { winner: b.team_id },
            (Some(_), Some(_)) => NodeOutcome::Unresolved,
            _ => NodeOutcome::Pending,
        },
        _ => NodeOutcome::Pending,
    }
}
