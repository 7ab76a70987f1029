//! Input validation performed before projects reach the store.
//!
//! # Responsibility
//! - Turn raw form values into typed, validated project fields.
//!
//! # Invariants
//! - The store never re-validates; everything it receives passed here first.

pub mod project_input;
