//! # League Standings
//!
//! Standings computation and faceted navigation for a collegiate sports
//! league: seasons, sports, divisions, and competition stages over a
//! filesystem data directory.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (seasons, stages, fixtures, teams)
//! - **store**: Filesystem data directory operations (JSONL tables)
//! - **standings**: Filter resolution, navigation, and stage aggregation
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod clock;
pub mod config;
pub mod models;
pub mod standings;
pub mod store;

pub use models::*;
