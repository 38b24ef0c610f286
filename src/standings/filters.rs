//! Filter resolution: partial selection criteria to a concrete stage.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::Clock;
use crate::models::{
    CompetitionStage, SeasonId, SportCategoryId, SportId, Stage, StageId,
};
use crate::store::LeagueStore;

use super::StandingsError;

/// A partial, possibly ambiguous standings selection. Every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingsFilters {
    pub season_id: Option<SeasonId>,
    pub sport_id: Option<SportId>,
    pub sport_category_id: Option<SportCategoryId>,
    pub stage_id: Option<StageId>,
    pub competition_stage: Option<CompetitionStage>,
}

impl StandingsFilters {
    pub fn for_stage(stage_id: StageId) -> Self {
        Self {
            stage_id: Some(stage_id),
            ..Self::default()
        }
    }
}

/// A fully-specified query target derived from [`StandingsFilters`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSelection {
    pub season_id: SeasonId,
    pub sport_id: SportId,
    pub sport_category_id: SportCategoryId,
    pub stage_id: StageId,
    pub competition_stage: CompetitionStage,
}

/// Normalizes partial filters against the seasons/categories/stages that
/// actually exist. Pure read-through; no side effects.
pub struct FilterResolver<'a> {
    store: &'a LeagueStore,
    clock: &'a dyn Clock,
    default_stage: CompetitionStage,
}

impl<'a> FilterResolver<'a> {
    pub fn new(store: &'a LeagueStore, clock: &'a dyn Clock, default_stage: CompetitionStage) -> Self {
        Self {
            store,
            clock,
            default_stage,
        }
    }

    /// Resolve filters into a concrete selection.
    ///
    /// `stage_id` takes precedence: every other field is derived from the
    /// stage row and conflicting sibling filters are ignored, not validated.
    pub fn resolve(&self, filters: &StandingsFilters) -> Result<ResolvedSelection, StandingsError> {
        if let Some(stage_id) = filters.stage_id {
            let stage = self
                .store
                .stage(stage_id)?
                .ok_or(StandingsError::StageNotFound)?;
            return self.selection_from_stage(&stage);
        }

        let season_id = match filters.season_id {
            Some(id) => id,
            None => self.default_season()?,
        };

        let category_id = self.resolve_category(filters, season_id)?;
        let phase = filters.competition_stage.unwrap_or(self.default_stage);

        let stage = self
            .store
            .stages()?
            .into_iter()
            .find(|s| {
                s.sport_category_id == category_id
                    && s.season_id == season_id
                    && s.competition_stage == phase
            })
            .ok_or(StandingsError::StageNotFound)?;

        debug!(stage_id = %stage.id, phase = %phase, "resolved standings selection");
        self.selection_from_stage(&stage)
    }

    fn selection_from_stage(&self, stage: &Stage) -> Result<ResolvedSelection, StandingsError> {
        // A stage pointing at a missing category row cannot be fully
        // resolved; report it the same way as a missing stage.
        let category = self
            .store
            .sport_category(stage.sport_category_id)?
            .ok_or(StandingsError::StageNotFound)?;

        Ok(ResolvedSelection {
            season_id: stage.season_id,
            sport_id: category.sport_id,
            sport_category_id: category.id,
            stage_id: stage.id,
            competition_stage: stage.competition_stage,
        })
    }

    /// The season bracketing "now", else the most recently ended one.
    ///
    /// Overlapping running seasons are malformed data; the most recently
    /// started wins, deterministically.
    fn default_season(&self) -> Result<SeasonId, StandingsError> {
        let seasons = self.store.seasons()?;
        let now = self.clock.now();

        if let Some(running) = seasons
            .iter()
            .filter(|s| s.is_running_at(now))
            .max_by_key(|s| s.starts_at)
        {
            return Ok(running.id);
        }

        seasons
            .iter()
            .filter(|s| s.has_ended_at(now))
            .max_by_key(|s| s.ends_at)
            .map(|s| s.id)
            .ok_or(StandingsError::NoSeasonAvailable)
    }

    /// Pick the category: given directly, or the only category of the given
    /// sport with a stage in the season. Anything less specific is ambiguous.
    fn resolve_category(
        &self,
        filters: &StandingsFilters,
        season_id: SeasonId,
    ) -> Result<SportCategoryId, StandingsError> {
        if let Some(id) = filters.sport_category_id {
            return Ok(id);
        }

        let sport_id = filters.sport_id.ok_or(StandingsError::AmbiguousSelection)?;
        let staged: Vec<SportCategoryId> = {
            let season_stages = self.store.stages_for_season(season_id)?;
            self.store
                .categories_for_sport(sport_id)?
                .into_iter()
                .filter(|c| season_stages.iter().any(|s| s.sport_category_id == c.id))
                .map(|c| c.id)
                .collect()
        };

        match staged.as_slice() {
            [only] => Ok(*only),
            [] => Err(StandingsError::StageNotFound),
            _ => Err(StandingsError::AmbiguousSelection),
        }
    }
}
