//! Domain model for tracked projects.
//!
//! # Responsibility
//! - Define the canonical project record shared by the store and its views.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Projects are never deleted; only `status` changes after creation.

pub mod project;
