//! Integer entity ids assigned by the data store.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }
    };
}

entity_id! {
    /// Season id.
    SeasonId
}

entity_id! {
    /// Sport id.
    SportId
}

entity_id! {
    /// Sport category id (a sport/division/level triple).
    SportCategoryId
}

entity_id! {
    /// Stage id (a category/season/competition-stage triple).
    StageId
}

entity_id! {
    /// Fixture id.
    FixtureId
}

entity_id! {
    /// Fixture participant id.
    ParticipantId
}

entity_id! {
    /// Team id.
    TeamId
}
