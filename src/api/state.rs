use std::sync::Arc;

use crate::standings::service::StandingsService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<StandingsService>,
}
