#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! ZIP code to county hazard risk lookup orchestration.
//!
//! A lookup validates the ZIP code, resolves it to a county through a
//! [`LocationResolver`], then fetches that county's hazard record through a
//! [`RiskDataFetcher`]. The two calls are strictly sequential and the first
//! failure ends the session. [`RiskLookupOrchestrator`] owns the single
//! session slot and refuses a new submission while one is in flight.

pub mod config;
pub mod orchestrator;
pub mod progress;
pub mod service;
pub mod session;
pub mod zip;

use hazard_risk_geocoder::GeocodeError;
use hazard_risk_nri::NriError;
use thiserror::Error;

pub use orchestrator::RiskLookupOrchestrator;
pub use progress::{LookupProgress, NullProgress, null_progress};
pub use service::{LocationResolver, RiskDataFetcher};
pub use session::{LookupResult, LookupSession, LookupState};

/// Errors that end a lookup session.
///
/// Each variant's `Display` text is shown to the user as-is. Resolver and
/// fetcher failures keep their own messages.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The ZIP code was not exactly five digits. No request was sent.
    #[error("{message}")]
    InputValidation {
        /// Message shown to the user.
        message: String,
    },

    /// The ZIP code could not be resolved to a county.
    #[error(transparent)]
    LocationResolution(#[from] GeocodeError),

    /// The county's hazard record could not be fetched.
    #[error(transparent)]
    RiskData(#[from] NriError),

    /// Another lookup is still in flight; this submission was ignored.
    #[error("A lookup is already in progress")]
    Busy,

    /// A fault outside the known failure modes (e.g. a panic inside a
    /// resolver). The detail is logged, not shown.
    #[error("An unexpected error occurred. Please try again.")]
    Unexpected {
        /// Internal description of the fault.
        detail: String,
    },
}
