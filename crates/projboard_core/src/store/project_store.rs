//! Project store with synchronous snapshot notifications.
//!
//! # Responsibility
//! - Hold projects in insertion order for one application instance.
//! - Apply add/move mutations and notify listeners after each change.
//!
//! # Invariants
//! - `add_project` always notifies; `move_project` notifies only when a
//!   status actually changes.
//! - Each listener receives its own copy of the full sequence.
//! - One failing or panicking listener never blocks delivery to the rest.
//! - A panicking listener still runs the process panic hook before it is
//!   caught, so it shows up on stderr (and as `event=panic_captured` when
//!   file logging is active) in addition to the `listener_failed` warning.
//! - The store never validates input; callers validate before adding.

use crate::logging::sanitize_message;
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::listener::{
    FailureKind, Listener, ListenerFailure, ListenerId, ListenerResult, NotifyReport,
};
use log::{debug, info, warn};
use std::panic::{catch_unwind, AssertUnwindSafe};

const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

/// Result of `ProjectStore::add_project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedProject {
    pub id: ProjectId,
    pub report: NotifyReport,
}

/// Result of `ProjectStore::move_project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No project has the requested id. Nothing changed, nobody notified.
    NotFound,
    /// The project already had the requested status. Nobody notified.
    Unchanged,
    /// Status changed and listeners were notified.
    Moved(NotifyReport),
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

/// In-memory registry of projects plus its listener list.
///
/// Constructed explicitly by the application assembly and passed to
/// consumers by reference; there is no global instance.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new active project and notifies every listener.
    ///
    /// # Contract
    /// - The new project gets a fresh id and `ProjectStatus::Active`.
    /// - Inputs are stored as given; validation is the caller's job.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> AddedProject {
        let project = Project::new(title, description, people);
        let id = project.id;
        self.projects.push(project);
        info!(
            "event=project_added module=store status=ok project_id={} total={}",
            id,
            self.projects.len()
        );

        let report = self.notify();
        AddedProject { id, report }
    }

    /// Switches the status of one project.
    ///
    /// Unknown ids and same-status moves are tolerated no-ops without
    /// notification.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) -> MoveOutcome {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            debug!(
                "event=project_move module=store status=skipped reason=not_found project_id={}",
                id
            );
            return MoveOutcome::NotFound;
        };

        if project.status == new_status {
            debug!(
                "event=project_move module=store status=skipped reason=unchanged project_id={} project_status={}",
                id, new_status
            );
            return MoveOutcome::Unchanged;
        }

        let previous = project.status;
        project.status = new_status;
        info!(
            "event=project_move module=store status=ok project_id={} from={} to={}",
            id, previous, new_status
        );

        MoveOutcome::Moved(self.notify())
    }

    /// Registers a listener. The same callback may be registered twice.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(Vec<Project>) -> ListenerResult + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(
            "event=listener_subscribed module=store status=ok listener={} listeners={}",
            id,
            self.listeners.len()
        );
        id
    }

    /// Removes one listener. Returns `false` when `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = self.listeners.len() != before;
        if removed {
            debug!(
                "event=listener_unsubscribed module=store status=ok listener={}",
                id
            );
        }
        removed
    }

    /// Returns an independent copy of all projects in insertion order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) -> NotifyReport {
        let mut report = NotifyReport::default();

        for (id, listener) in self.listeners.iter_mut() {
            let snapshot = self.projects.clone();
            let outcome = catch_unwind(AssertUnwindSafe(|| listener(snapshot)));
            let kind = match outcome {
                Ok(Ok(())) => {
                    report.delivered += 1;
                    continue;
                }
                Ok(Err(err)) => FailureKind::Failed(err),
                Err(payload) => FailureKind::Panicked(panic_payload_summary(payload.as_ref())),
            };

            let failure = ListenerFailure { listener: *id, kind };
            warn!(
                "event=listener_failed module=store status=error detail={}",
                sanitize_message(&failure.to_string(), MAX_PANIC_PAYLOAD_CHARS)
            );
            report.failures.push(failure);
        }

        report
    }
}

fn panic_payload_summary(payload: &(dyn std::any::Any + Send)) -> String {
    let message = if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    sanitize_message(&message, MAX_PANIC_PAYLOAD_CHARS)
}
