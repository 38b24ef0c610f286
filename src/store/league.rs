//! Typed queries over the league tables.

use std::collections::{HashMap, HashSet};

use crate::models::{
    Fixture, FixtureId, FixtureParticipant, Season, SeasonId, Sport, SportCategory,
    SportCategoryId, SportId, Stage, StageId, Team, TeamId,
};

use super::{JsonlReader, StoreConfig, StoreError, Table};

/// Read-through handle over the league data directory.
///
/// Every call re-reads the underlying table — the store owns no cache and no
/// mutable state, so handles are freely shareable across requests.
#[derive(Debug, Clone)]
pub struct LeagueStore {
    config: StoreConfig,
}

impl LeagueStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn seasons(&self) -> Result<Vec<Season>, StoreError> {
        JsonlReader::for_table(&self.config, Table::Season).read_all()
    }

    pub fn season(&self, id: SeasonId) -> Result<Option<Season>, StoreError> {
        Ok(self.seasons()?.into_iter().find(|s| s.id == id))
    }

    pub fn sports(&self) -> Result<Vec<Sport>, StoreError> {
        JsonlReader::for_table(&self.config, Table::Sport).read_all()
    }

    pub fn sport(&self, id: SportId) -> Result<Option<Sport>, StoreError> {
        Ok(self.sports()?.into_iter().find(|s| s.id == id))
    }

    pub fn sport_categories(&self) -> Result<Vec<SportCategory>, StoreError> {
        JsonlReader::for_table(&self.config, Table::SportCategory).read_all()
    }

    pub fn sport_category(&self, id: SportCategoryId) -> Result<Option<SportCategory>, StoreError> {
        Ok(self.sport_categories()?.into_iter().find(|c| c.id == id))
    }

    pub fn categories_for_sport(&self, sport_id: SportId) -> Result<Vec<SportCategory>, StoreError> {
        JsonlReader::<SportCategory>::for_table(&self.config, Table::SportCategory)
            .read_where(|c| c.sport_id == sport_id)
    }

    pub fn stages(&self) -> Result<Vec<Stage>, StoreError> {
        JsonlReader::for_table(&self.config, Table::Stage).read_all()
    }

    pub fn stage(&self, id: StageId) -> Result<Option<Stage>, StoreError> {
        Ok(self.stages()?.into_iter().find(|s| s.id == id))
    }

    pub fn stages_for_season(&self, season_id: SeasonId) -> Result<Vec<Stage>, StoreError> {
        JsonlReader::<Stage>::for_table(&self.config, Table::Stage)
            .read_where(|s| s.season_id == season_id)
    }

    pub fn fixtures_for_stage(&self, stage_id: StageId) -> Result<Vec<Fixture>, StoreError> {
        JsonlReader::<Fixture>::for_table(&self.config, Table::Fixture)
            .read_where(|f| f.stage_id == stage_id)
    }

    pub fn participants_for_fixtures(
        &self,
        fixture_ids: &[FixtureId],
    ) -> Result<Vec<FixtureParticipant>, StoreError> {
        let wanted: HashSet<FixtureId> = fixture_ids.iter().copied().collect();
        JsonlReader::<FixtureParticipant>::for_table(&self.config, Table::FixtureParticipant)
            .read_where(|p| wanted.contains(&p.fixture_id))
    }

    pub fn teams(&self) -> Result<Vec<Team>, StoreError> {
        JsonlReader::for_table(&self.config, Table::Team).read_all()
    }

    pub fn teams_by_id(&self) -> Result<HashMap<TeamId, Team>, StoreError> {
        Ok(self.teams()?.into_iter().map(|t| (t.id, t)).collect())
    }
}
