//! Group-stage standings: win/loss records ranked by an explicit
//! tiebreak chain.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::models::{Fixture, FixtureId, FixtureParticipant, Team, TeamId};

/// One ranked row of a group-stage table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStanding {
    /// 1-based rank after all tiebreaks.
    pub position: u32,
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub points_for: i64,
    pub points_against: i64,
    pub point_differential: i64,
    /// Three or more teams tied on record and differential: the two-team
    /// head-to-head rule does not apply, so the remaining ordering is
    /// deterministic but not sporting — surfaced for the caller to display.
    pub unresolved_tie: bool,
}

impl TeamStanding {
    fn zeroed(team_id: TeamId, team_name: String) -> Self {
        Self {
            position: 0,
            team_id,
            team_name,
            played: 0,
            wins: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
            point_differential: 0,
            unresolved_tie: false,
        }
    }
}

/// Win counts between pairs of teams, for the two-team tiebreak.
#[derive(Debug, Default)]
pub struct HeadToHead {
    wins: HashMap<(TeamId, TeamId), u32>,
}

impl HeadToHead {
    pub fn record(&mut self, winner: TeamId, loser: TeamId) {
        *self.wins.entry((winner, loser)).or_default() += 1;
    }

    /// Which of the pair won more of their meetings, if either did.
    pub fn winner_between(&self, a: TeamId, b: TeamId) -> Option<TeamId> {
        let a_wins = self.wins.get(&(a, b)).copied().unwrap_or(0);
        let b_wins = self.wins.get(&(b, a)).copied().unwrap_or(0);
        match a_wins.cmp(&b_wins) {
            Ordering::Greater => Some(a),
            Ordering::Less => Some(b),
            Ordering::Equal => None,
        }
    }
}

// The tiebreak cascade is a chain of individual comparators, not one sort
// key, so each criterion's short-circuit behavior stays testable on its own.

/// Wins, descending.
pub fn by_wins(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.wins.cmp(&a.wins)
}

/// Point differential (for minus against), descending.
pub fn by_differential(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.point_differential.cmp(&a.point_differential)
}

/// Points scored, descending.
pub fn by_points_for(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points_for.cmp(&a.points_for)
}

/// Team name, ascending. The deterministic final tiebreak — never leaves an
/// unresolved ordering.
pub fn by_name(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    a.team_name.cmp(&b.team_name)
}

/// Compute the ranked table for one group stage.
///
/// Every team appearing in any participant row gets a row, zeroed if none of
/// its fixtures are complete. A fixture counts as complete only when it has
/// at least two participants and every participant has a recorded score — a
/// missing opponent or a `None` score means "not yet decided", never zero.
pub fn compute(
    fixtures: &[Fixture],
    participants: &[FixtureParticipant],
    teams: &HashMap<TeamId, Team>,
) -> Vec<TeamStanding> {
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

    let mut rows: BTreeMap<TeamId, TeamStanding> = BTreeMap::new();
    let mut h2h = HeadToHead::default();

    for fixture in fixtures {
        let parts = by_fixture
            .get(&fixture.id)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);

        for p in parts {
            rows.entry(p.team_id)
                .or_insert_with(|| TeamStanding::zeroed(p.team_id, team_name(p.team_id)));
        }

        let scored: Vec<(TeamId, i64)> = parts
            .iter()
            .filter_map(|p| p.score.map(|s| (p.team_id, s)))
            .collect();
        let complete = parts.len() >= 2 && scored.len() == parts.len();
        if !complete {
            continue;
        }

        for &(team_id, score) in &scored {
            let others: Vec<i64> = scored
                .iter()
                .filter(|(t, _)| *t != team_id)
                .map(|(_, s)| *s)
                .collect();
            let won = others.iter().all(|&s| score > s);

            let row = rows
                .entry(team_id)
                .or_insert_with(|| TeamStanding::zeroed(team_id, team_name(team_id)));
            row.played += 1;
            row.points_for += score;
            row.points_against += others.iter().sum::<i64>();
            if won {
                row.wins += 1;
            } else {
                // Complete matches not won — draws land here too.
                row.losses += 1;
            }
        }

        if let [(a, sa), (b, sb)] = scored.as_slice() {
            match sa.cmp(sb) {
                Ordering::Greater => h2h.record(*a, *b),
                Ordering::Less => h2h.record(*b, *a),
                Ordering::Equal => {}
            }
        }
    }

    for row in rows.values_mut() {
        row.point_differential = row.points_for - row.points_against;
    }

    rank(rows.into_values().collect(), &h2h)
}

/// Order rows by the full cascade and assign positions.
///
/// Head-to-head applies only when exactly two teams are tied on wins and
/// differential; larger contested tie groups keep the deterministic
/// points-for/name ordering and are flagged `unresolved_tie`.
pub fn rank(mut rows: Vec<TeamStanding>, h2h: &HeadToHead) -> Vec<TeamStanding> {
    rows.sort_by(|a, b| {
        by_wins(a, b)
            .then_with(|| by_differential(a, b))
            .then_with(|| by_points_for(a, b))
            .then_with(|| by_name(a, b))
    });

    let mut i = 0;
    while i < rows.len() {
        let mut j = i + 1;
        while j < rows.len()
            && rows[j].wins == rows[i].wins
            && rows[j].point_differential == rows[i].point_differential
        {
            j += 1;
        }

        if j - i == 2 {
            if let Some(winner) = h2h.winner_between(rows[i].team_id, rows[i + 1].team_id) {
                if rows[i + 1].team_id == winner {
                    rows.swap(i, i + 1);
                }
            }
        } else if j - i > 2 && rows[i..j].iter().any(|r| r.played > 0) {
            for row in &mut rows[i..j] {
                row.unresolved_tie = true;
            }
        }

        i = j;
    }

    for (idx, row) in rows.iter_mut().enumerate() {
        row.position = idx as u32 + 1;
    }
    rows
}
