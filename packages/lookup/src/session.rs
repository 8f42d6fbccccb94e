//! Lookup session state machine.
//!
//! ```text
//! Idle -> Validating -> ResolvingLocation -> FetchingRisk -> Success
//!             |               |                   |
//!             +---------------+-------------------+--> Failed
//! ```

use std::fmt;
use std::sync::Arc;

use hazard_risk_geography_models::CountyLocation;
use hazard_risk_hazard::RiskReport;
use hazard_risk_hazard_models::CountyRiskRecord;

use crate::LookupError;

/// The outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    /// The ZIP code that was submitted.
    pub zip: String,
    /// The county it resolved to.
    pub location: CountyLocation,
    /// The county's hazard record.
    pub record: CountyRiskRecord,
}

impl LookupResult {
    /// Builds the display model for this result.
    #[must_use]
    pub fn report(&self) -> RiskReport {
        RiskReport::build(self.location.clone(), &self.record)
    }
}

/// Where a lookup session currently stands.
///
/// Terminal payloads are reference counted so snapshots are cheap to hand
/// out.
#[derive(Debug, Clone, Default)]
pub enum LookupState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Checking the submitted ZIP code.
    Validating,
    /// Waiting on the geocoder.
    ResolvingLocation,
    /// Waiting on the hazard index.
    FetchingRisk,
    /// Both calls succeeded.
    Success(Arc<LookupResult>),
    /// The session ended on the first failure.
    Failed(Arc<LookupError>),
}

impl LookupState {
    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(
            self,
            Self::Validating | Self::ResolvingLocation | Self::FetchingRisk
        )
    }

    /// Whether the session has finished, successfully or not.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failed(_))
    }

    /// The result, if the session succeeded.
    #[must_use]
    pub fn result(&self) -> Option<&LookupResult> {
        match self {
            Self::Success(result) => Some(result.as_ref()),
            _ => None,
        }
    }

    /// The error, if the session failed.
    #[must_use]
    pub fn error(&self) -> Option<&LookupError> {
        match self {
            Self::Failed(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    /// Short status text for the front end.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Validating => "Validating ZIP code...",
            Self::ResolvingLocation => "Resolving location...",
            Self::FetchingRisk => "Fetching hazard data...",
            Self::Success(_) => "Complete",
            Self::Failed(_) => "Failed",
        }
    }
}

impl fmt::Display for LookupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(err) => write!(f, "Failed: {err}"),
            other => f.write_str(other.label()),
        }
    }
}

/// The single result slot for one ZIP query.
///
/// Every new submission overwrites the previous session, so a failed
/// lookup never leaves a stale result behind.
#[derive(Debug, Clone, Default)]
pub struct LookupSession {
    state: LookupState,
}

impl LookupSession {
    /// Starts a new session, discarding whatever came before.
    pub fn begin(&mut self) {
        self.state = LookupState::Validating;
    }

    /// Moves to `state`.
    pub fn set_state(&mut self, state: LookupState) {
        self.state = state;
    }

    /// Returns to [`LookupState::Idle`].
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &LookupState {
        &self.state
    }
}
