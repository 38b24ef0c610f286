use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::standings::navigation::{CategoryOption, SeasonOption, SportOption};
use crate::standings::Envelope;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Deserialize)]
pub struct FacetParams {
    pub season_id: Option<i64>,
    pub sport_id: Option<i64>,
}

pub async fn seasons(State(state): State<AppState>) -> Json<Envelope<Vec<SeasonOption>>> {
    Json(state.service.get_available_seasons())
}

pub async fn sports(
    State(state): State<AppState>,
    Query(params): Query<FacetParams>,
) -> Json<Envelope<Vec<SportOption>>> {
    Json(state.service.get_available_sports(params.season_id.map(Into::into)))
}

pub async fn categories(
    State(state): State<AppState>,
    Query(params): Query<FacetParams>,
) -> Json<Envelope<Vec<CategoryOption>>> {
    Json(state.service.get_available_categories(
        params.season_id.map(Into::into),
        params.sport_id.map(Into::into),
    ))
}
