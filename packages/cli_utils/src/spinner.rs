//! `indicatif`-backed lookup spinner.
//!
//! Wraps [`indicatif::ProgressBar`] behind the [`LookupProgress`] trait so
//! that the orchestrator stays decoupled from the rendering backend.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use hazard_risk_lookup::{LookupProgress, LookupState};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

/// A spinner that shows the current lookup stage.
///
/// One spinner is created per lookup when the session leaves
/// [`LookupState::Idle`] and cleared once it reaches a terminal state, so
/// the same instance can serve any number of searches.
pub struct LookupSpinner {
    multi: MultiProgress,
    style: ProgressStyle,
    bar: Mutex<Option<ProgressBar>>,
}

impl LookupSpinner {
    /// Creates a spinner that attaches its bars to `multi`.
    #[must_use]
    pub fn new(multi: &MultiProgress) -> Arc<Self> {
        Arc::new(Self {
            multi: multi.clone(),
            style: ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            bar: Mutex::new(None),
        })
    }

    fn start(&self) -> ProgressBar {
        let bar = self.multi.add(ProgressBar::new_spinner());
        bar.set_style(self.style.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    }
}

impl LookupProgress for LookupSpinner {
    fn on_transition(&self, state: &LookupState) {
        let mut slot = self.bar.lock().unwrap_or_else(PoisonError::into_inner);

        if state.is_pending() {
            slot.get_or_insert_with(|| self.start())
                .set_message(state.label());
        } else if let Some(bar) = slot.take() {
            bar.finish_and_clear();
        }
    }
}
