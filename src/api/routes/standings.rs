use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::CompetitionStage;
use crate::standings::filters::StandingsFilters;
use crate::standings::service::StandingsReport;
use crate::standings::Envelope;

/// Query-string form of [`StandingsFilters`]. The stage phase arrives as a
/// string and is validated here so a typo is a 400, not an empty result.
#[derive(Debug, Default, Deserialize)]
pub struct StandingsParams {
    pub season_id: Option<i64>,
    pub sport_id: Option<i64>,
    pub sport_category_id: Option<i64>,
    pub stage_id: Option<i64>,
    pub competition_stage: Option<String>,
}

impl StandingsParams {
    pub fn into_filters(self) -> Result<StandingsFilters, ApiError> {
        let competition_stage = self
            .competition_stage
            .as_deref()
            .map(|s| s.parse::<CompetitionStage>())
            .transpose()
            .map_err(ApiError::BadRequest)?;

        Ok(StandingsFilters {
            season_id: self.season_id.map(Into::into),
            sport_id: self.sport_id.map(Into::into),
            sport_category_id: self.sport_category_id.map(Into::into),
            stage_id: self.stage_id.map(Into::into),
            competition_stage,
        })
    }
}

pub async fn standings(
    State(state): State<AppState>,
    Query(params): Query<StandingsParams>,
) -> Result<Json<Envelope<StandingsReport>>, ApiError> {
    let filters = params.into_filters()?;
    Ok(Json(state.service.get_standings(&filters)))
}
