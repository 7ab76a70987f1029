//! Project domain model.
//!
//! # Responsibility
//! - Define the project record and its two-valued lifecycle status.
//!
//! # Invariants
//! - `id` is generated once at creation and never reused.
//! - New projects always start as `ProjectStatus::Active`.
//! - `status` is the only field the store mutates after creation.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one project.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Which list a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work still in progress.
    Active,
    /// Work completed.
    Finished,
}

impl ProjectStatus {
    /// Returns the lowercase wire name (`active|finished`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned. Callers validate `>= 1` before creation.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, people)
    }

    /// Creates an active project with a caller-provided id.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}
