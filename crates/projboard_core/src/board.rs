//! Application assembly: one store, two list views.
//!
//! # Responsibility
//! - Own the project store for the application's lifetime.
//! - Subscribe the active and finished views exactly once at construction.
//! - Translate form submits and drop gestures into store operations.
//!
//! # Invariants
//! - Views always reflect the latest store snapshot after a mutation returns.
//! - Invalid input never reaches the store.

use crate::model::project::ProjectStatus;
use crate::store::listener::ListenerError;
use crate::store::project_store::{AddedProject, MoveOutcome, ProjectStore};
use crate::validation::project_input::{ProjectInput, ValidationError};
use crate::view::project_list::ProjectListView;
use log::{debug, info, warn};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use uuid::Uuid;

/// Top-level board wiring the store to its views.
pub struct ProjectBoard {
    store: ProjectStore,
    active: Rc<RefCell<ProjectListView>>,
    finished: Rc<RefCell<ProjectListView>>,
}

impl ProjectBoard {
    pub fn new() -> Self {
        let mut store = ProjectStore::new();
        let active = attach_view(&mut store, ProjectStatus::Active);
        let finished = attach_view(&mut store, ProjectStatus::Finished);
        Self {
            store,
            active,
            finished,
        }
    }

    /// Validates form input and adds the project.
    ///
    /// On validation failure nothing is added and no listener runs. On
    /// success the returned report lists any listener that failed.
    pub fn submit(&mut self, input: &ProjectInput) -> Result<AddedProject, ValidationError> {
        let valid = input.validate().map_err(|err| {
            info!(
                "event=project_submit module=board status=rejected reason={:?}",
                err
            );
            err
        })?;

        let added = self
            .store
            .add_project(valid.title, valid.description, valid.people);
        if !added.report.is_clean() {
            warn!(
                "event=project_submit module=board status=degraded project_id={} failed_listeners={}",
                added.id,
                added.report.failures.len()
            );
        }
        Ok(added)
    }

    /// Handles a drop onto the list of `target` status.
    ///
    /// `payload` is the dragged project's id in text form. A payload that is
    /// not an id is handled like an unknown id.
    pub fn drop_on(&mut self, target: ProjectStatus, payload: &str) -> MoveOutcome {
        match Uuid::parse_str(payload.trim()) {
            Ok(id) => self.store.move_project(id, target),
            Err(_) => {
                debug!(
                    "event=project_drop module=board status=skipped reason=invalid_payload target={}",
                    target
                );
                MoveOutcome::NotFound
            }
        }
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn active(&self) -> Ref<'_, ProjectListView> {
        self.active.borrow()
    }

    pub fn finished(&self) -> Ref<'_, ProjectListView> {
        self.finished.borrow()
    }

    /// Renders the active list, a blank line, then the finished list.
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.active().render(), self.finished().render())
    }
}

impl Default for ProjectBoard {
    fn default() -> Self {
        Self::new()
    }
}

fn attach_view(store: &mut ProjectStore, status: ProjectStatus) -> Rc<RefCell<ProjectListView>> {
    let view = Rc::new(RefCell::new(ProjectListView::new(status)));
    let target = Rc::clone(&view);
    store.subscribe(move |snapshot| {
        let mut view = target
            .try_borrow_mut()
            .map_err(|_| ListenerError::new(format!("{status} view is borrowed")))?;
        view.apply_snapshot(snapshot);
        Ok(())
    });
    view
}
