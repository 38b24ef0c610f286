//! Standings computation core.
//!
//! Two components compose the subsystem:
//!
//! - **filters / navigation**: normalize a partial [`filters::StandingsFilters`]
//!   into a concrete stage, and derive which alternative selections are legal.
//! - **group / bracket**: aggregate a stage's fixtures into either a ranked
//!   round-robin table or an elimination tree, depending on the stage's
//!   competition phase.
//!
//! Everything here is stateless, read-only query composition: each call is
//! independent and safe to run with unbounded concurrency.

pub mod bracket;
pub mod filters;
pub mod group;
pub mod navigation;
pub mod service;

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::store::StoreError;

/// Failures surfaced by the resolver and aggregators.
#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("no season available")]
    NoSeasonAvailable,

    #[error("selection is ambiguous: a sport or sport category is required")]
    AmbiguousSelection,

    #[error("stage not found")]
    StageNotFound,

    #[error("data source unavailable: {0}")]
    DataSource(#[from] StoreError),
}

/// Uniform result envelope exposed to external collaborators.
///
/// `{ success: true, data } | { success: false, error }` — no error type
/// crosses this boundary.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
        }
    }
}

impl<T> From<Result<T, StandingsError>> for Envelope<T> {
    fn from(result: Result<T, StandingsError>) -> Self {
        match result {
            Ok(data) => Envelope::ok(data),
            Err(e) => Envelope::err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_ok_shape() {
        let env = Envelope::ok(vec![1, 2, 3]);
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"][2], 3);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_envelope_err_shape() {
        let env: Envelope<()> = Envelope::err(StandingsError::StageNotFound);
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "stage not found");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_envelope_from_result() {
        let ok: Envelope<u32> = Ok(7).into();
        assert!(ok.success);
        let err: Envelope<u32> = Err(StandingsError::NoSeasonAvailable).into();
        assert!(!err.success);
        assert_eq!(err.error.as_deref(), Some("no season available"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StandingsError::AmbiguousSelection.to_string(),
            "selection is ambiguous: a sport or sport category is required"
        );
    }
}
