//! Competition seasons.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SeasonId;

/// A federation season, bounded by start and end timestamps.
///
/// Exactly one season is expected to be running at any wall-clock time, but
/// malformed data can leave zero or several overlapping — callers resolving
/// "the current season" must not assume uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub id: SeasonId,

    /// Display name, e.g. "2025/26".
    pub name: String,

    pub starts_at: DateTime<Utc>,

    pub ends_at: DateTime<Utc>,
}

impl Season {
    pub fn new(id: SeasonId, name: String, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            starts_at,
            ends_at,
        }
    }

    /// Whether the season brackets the given instant (inclusive on both ends).
    pub fn is_running_at(&self, now: DateTime<Utc>) -> bool {
        self.starts_at <= now && now <= self.ends_at
    }

    /// Whether the season has already ended at the given instant.
    pub fn has_ended_at(&self, now: DateTime<Utc>) -> bool {
        self.ends_at < now
    }
}
