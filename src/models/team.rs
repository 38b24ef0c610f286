//! School teams.

use serde::{Deserialize, Serialize};

use super::TeamId;

/// A team fielded by a member school.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,

    /// Display name, the deterministic final ranking tiebreak.
    pub name: String,

    /// School the team belongs to.
    pub school: Option<String>,
}

impl Team {
    pub fn new(id: TeamId, name: String) -> Self {
        Self {
            id,
            name,
            school: None,
        }
    }

    pub fn with_school(mut self, school: String) -> Self {
        self.school = Some(school);
        self
    }
}
