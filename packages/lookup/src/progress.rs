//! Stage reporting for in-flight lookups.
//!
//! Decouples the orchestrator from how (or whether) a front end shows
//! progress, e.g. an `indicatif` spinner or nothing at all.

use std::sync::Arc;

use crate::LookupState;

/// Receives every state transition of a lookup session.
///
/// Implementations must be `Send + Sync` so an orchestrator can be shared
/// across tasks.
pub trait LookupProgress: Send + Sync {
    /// Called after the session enters `state`.
    fn on_transition(&self, state: &LookupState);
}

/// A [`LookupProgress`] that ignores every transition.
pub struct NullProgress;

impl LookupProgress for NullProgress {
    fn on_transition(&self, _state: &LookupState) {}
}

/// Returns a shared [`NullProgress`].
#[must_use]
pub fn null_progress() -> Arc<dyn LookupProgress> {
    Arc::new(NullProgress)
}
