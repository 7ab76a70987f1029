//! Status-filtered project list view.
//!
//! # Responsibility
//! - Keep the projects of one status, in store order, from each snapshot.
//! - Render a plain-text projection of that list.
//!
//! # Invariants
//! - Each snapshot fully replaces the previous assignment.

use crate::model::project::{Project, ProjectStatus};

/// One list of the board, showing projects of a single status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListView {
    status: ProjectStatus,
    assigned: Vec<Project>,
}

impl ProjectListView {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            assigned: Vec::new(),
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Projects currently shown by this list.
    pub fn projects(&self) -> &[Project] {
        &self.assigned
    }

    /// Replaces the assignment with the snapshot's projects of this status.
    pub fn apply_snapshot(&mut self, snapshot: Vec<Project>) {
        let status = self.status;
        self.assigned = snapshot
            .into_iter()
            .filter(|project| project.status == status)
            .collect();
    }

    /// Upper-case list heading, e.g. `ACTIVE PROJECTS`.
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_ascii_uppercase())
    }

    /// Renders the heading followed by one line per project.
    pub fn render(&self) -> String {
        let mut out = self.heading();
        for project in &self.assigned {
            out.push('\n');
            out.push_str(&format!(
                "- {} | {} assigned | {}",
                project.title,
                people_label(project.people),
                project.description
            ));
        }
        out
    }
}

/// Human label for a people count: `1 person`, `3 people`.
pub fn people_label(people: u32) -> String {
    if people == 1 {
        "1 person".to_string()
    } else {
        format!("{people} people")
    }
}
