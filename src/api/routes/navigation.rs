use axum::extract::{Query, State};
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::standings::navigation::NavigationOptions;
use crate::standings::Envelope;

use super::standings::StandingsParams;

pub async fn navigation_options(
    State(state): State<AppState>,
    Query(params): Query<StandingsParams>,
) -> Result<Json<Envelope<NavigationOptions>>, ApiError> {
    let filters = params.into_filters()?;
    Ok(Json(state.service.get_standings_navigation(&filters)))
}
