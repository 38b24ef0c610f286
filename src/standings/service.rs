//! Service facade: the only surface external collaborators call.
//!
//! Every public method returns an [`Envelope`] so callers never match on
//! error types; failures arrive as `{ success: false, error }`.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::clock::Clock;
use crate::models::{
    CompetitionStage, Fixture, FixtureId, FixtureParticipant, SeasonId, SportId, StageFormat,
    StageId, Team, TeamId,
};
use crate::store::LeagueStore;

use super::bracket::{self, BracketTree};
use super::filters::{FilterResolver, ResolvedSelection, StandingsFilters};
use super::group::{self, TeamStanding};
use super::navigation::{
    self, CategoryOption, NavigationOptions, SeasonOption, SportOption,
};
use super::{Envelope, StandingsError};

/// Stage standings in the shape matching the stage's format.
#[derive(Debug, Serialize)]
#[serde(tag = "format", content = "standings", rename_all = "snake_case")]
pub enum StandingsData {
    GroupStage(Vec<TeamStanding>),
    Bracket(BracketTree),
}

/// The resolved selection plus the standings it produced, so clients can
/// see which stage a defaulted query landed on.
#[derive(Debug, Serialize)]
pub struct StandingsReport {
    pub selection: ResolvedSelection,
    #[serde(flatten)]
    pub data: StandingsData,
}

/// Stateless standings query service over a shared store and clock.
#[derive(Clone)]
pub struct StandingsService {
    store: Arc<LeagueStore>,
    clock: Arc<dyn Clock>,
    default_stage: CompetitionStage,
}

impl StandingsService {
    pub fn new(
        store: Arc<LeagueStore>,
        clock: Arc<dyn Clock>,
        default_stage: CompetitionStage,
    ) -> Self {
        Self {
            store,
            clock,
            default_stage,
        }
    }

    /// Resolve filters and compute standings for the selected stage.
    pub fn get_standings(&self, filters: &StandingsFilters) -> Envelope<StandingsReport> {
        self.standings(filters).into()
    }

    /// Navigation lists for the current (possibly partial) selection.
    pub fn get_standings_navigation(
        &self,
        filters: &StandingsFilters,
    ) -> Envelope<NavigationOptions> {
        navigation::navigation(&self.store, filters).into()
    }

    /// All seasons that have at least one stage.
    pub fn get_available_seasons(&self) -> Envelope<Vec<SeasonOption>> {
        navigation::navigation(&self.store, &StandingsFilters::default())
            .map(|nav| nav.available_seasons)
            .into()
    }

    /// Sports with a stage in the given season (or any season).
    pub fn get_available_sports(&self, season_id: Option<SeasonId>) -> Envelope<Vec<SportOption>> {
        let filters = StandingsFilters {
            season_id,
            ..Default::default()
        };
        navigation::navigation(&self.store, &filters)
            .map(|nav| nav.available_sports)
            .into()
    }

    /// Categories with a stage matching the given season/sport constraints.
    pub fn get_available_categories(
        &self,
        season_id: Option<SeasonId>,
        sport_id: Option<SportId>,
    ) -> Envelope<Vec<CategoryOption>> {
        let filters = StandingsFilters {
            season_id,
            sport_id,
            ..Default::default()
        };
        navigation::navigation(&self.store, &filters)
            .map(|nav| nav.available_categories)
            .into()
    }

    fn standings(&self, filters: &StandingsFilters) -> Result<StandingsReport, StandingsError> {
        let resolver = FilterResolver::new(&self.store, self.clock.as_ref(), self.default_stage);
        let selection = resolver.resolve(filters)?;

        let data = match selection.competition_stage.format() {
            StageFormat::RoundRobin => {
                StandingsData::GroupStage(self.group_stage_standings(selection.stage_id)?)
            }
            StageFormat::Elimination => {
                StandingsData::Bracket(self.bracket_standings(selection.stage_id)?)
            }
        };

        info!(
            stage_id = %selection.stage_id,
            phase = %selection.competition_stage,
            "computed standings"
        );
        Ok(StandingsReport { selection, data })
    }

    /// Ranked round-robin table for one group stage.
    pub fn group_stage_standings(
        &self,
        stage_id: StageId,
    ) -> Result<Vec<TeamStanding>, StandingsError> {
        let (fixtures, participants, teams) = self.stage_inputs(stage_id)?;
        Ok(group::compute(&fixtures, &participants, &teams))
    }

    /// Elimination tree for one bracket stage.
    pub fn bracket_standings(&self, stage_id: StageId) -> Result<BracketTree, StandingsError> {
        let (fixtures, participants, teams) = self.stage_inputs(stage_id)?;
        Ok(bracket::assemble(&fixtures, &participants, &teams))
    }

    fn stage_inputs(
        &self,
        stage_id: StageId,
    ) -> Result<(Vec<Fixture>, Vec<FixtureParticipant>, HashMap<TeamId, Team>), StandingsError>
    {
        self.store
            .stage(stage_id)?
            .ok_or(StandingsError::StageNotFound)?;

        let fixtures = self.store.fixtures_for_stage(stage_id)?;
        let fixture_ids: Vec<FixtureId> = fixtures.iter().map(|f| f.id).collect();
        let participants = self.store.participants_for_fixtures(&fixture_ids)?;
        let teams = self.store.teams_by_id()?;
        Ok((fixtures, participants, teams))
    }
}
