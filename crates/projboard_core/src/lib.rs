//! Core domain logic for ProjBoard.
//! This crate is the single source of truth for project state.

pub mod board;
pub mod config;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;

pub use board::ProjectBoard;
pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status, LoggingError};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use store::listener::{
    FailureKind, ListenerError, ListenerFailure, ListenerId, ListenerResult, NotifyReport,
};
pub use store::project_store::{AddedProject, MoveOutcome, ProjectStore};
pub use validation::project_input::{
    ProjectInput, ValidProjectInput, ValidationError, DESCRIPTION_MIN_CHARS, PEOPLE_MAX,
    PEOPLE_MIN, TITLE_MAX_CHARS,
};
pub use view::project_list::{people_label, ProjectListView};

/// Minimal health-check API for wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
