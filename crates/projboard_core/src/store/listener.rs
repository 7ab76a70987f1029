//! Listener contracts for store change notifications.

use crate::model::project::Project;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result a listener returns after handling one snapshot.
pub type ListenerResult = Result<(), ListenerError>;

/// Boxed listener callback. Receives an owned snapshot it may freely mutate.
pub type Listener = Box<dyn FnMut(Vec<Project>) -> ListenerResult>;

/// Handle returned by `ProjectStore::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

impl ListenerId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for ListenerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Failure reported by a listener while handling a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerError(pub String);

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl Display for ListenerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener failed: {}", self.0)
    }
}

impl Error for ListenerError {}

/// How one listener failed during a notification round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The listener returned an error.
    Failed(ListenerError),
    /// The listener panicked; carries the sanitized panic payload.
    Panicked(String),
}

/// One isolated listener failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerFailure {
    pub listener: ListenerId,
    pub kind: FailureKind,
}

impl Display for ListenerFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            FailureKind::Failed(err) => write!(f, "{}: {err}", self.listener),
            FailureKind::Panicked(payload) => {
                write!(f, "{}: listener panicked: {payload}", self.listener)
            }
        }
    }
}

/// Outcome of one notification round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifyReport {
    /// Listeners that handled the snapshot without failing.
    pub delivered: usize,
    /// Listeners that failed, in subscription order.
    pub failures: Vec<ListenerFailure>,
}

impl NotifyReport {
    /// Total listeners invoked in this round.
    pub fn attempted(&self) -> usize {
        self.delivered + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
