//! In-memory project store and its listener protocol.
//!
//! # Responsibility
//! - Own the ordered project sequence for one application instance.
//! - Publish full-snapshot change notifications to registered listeners.
//!
//! # Invariants
//! - Listeners only ever receive independent copies of the sequence.
//! - Notification completes before the mutating call returns.

pub mod listener;
pub mod project_store;
