//! Sequential resolve-then-fetch lookup with a single result slot.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::FutureExt as _;
use hazard_risk_geocoder::{CensusConfig, CensusGeocoder};
use hazard_risk_nri::{NriClient, NriConfig};

use crate::config::{http_client, timeout_from_env};
use crate::zip::validate_zip;
use crate::{
    LocationResolver, LookupError, LookupProgress, LookupResult, LookupSession, LookupState,
    RiskDataFetcher, null_progress,
};

/// Runs lookups one at a time and holds the latest session.
///
/// [`Self::submit`] takes `&self` so the orchestrator can be shared with a
/// front end; a busy flag rejects overlapping submissions instead of
/// letting two sessions write the same slot.
pub struct RiskLookupOrchestrator {
    resolver: Box<dyn LocationResolver>,
    fetcher: Box<dyn RiskDataFetcher>,
    progress: Arc<dyn LookupProgress>,
    busy: AtomicBool,
    session: Mutex<LookupSession>,
}

/// Clears the busy flag when dropped, including on panic.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl RiskLookupOrchestrator {
    /// Creates an orchestrator over the given services.
    #[must_use]
    pub fn new(resolver: Box<dyn LocationResolver>, fetcher: Box<dyn RiskDataFetcher>) -> Self {
        Self {
            resolver,
            fetcher,
            progress: null_progress(),
            busy: AtomicBool::new(false),
            session: Mutex::new(LookupSession::default()),
        }
    }

    /// Creates an orchestrator backed by the Census geocoder and the
    /// National Risk Index, configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`reqwest::Error`] if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        let timeout = timeout_from_env();
        let client = http_client(timeout)?;
        log::debug!("HTTP timeout: {}s", timeout.as_secs());

        Ok(Self::new(
            Box::new(CensusGeocoder::new(client.clone(), CensusConfig::from_env())),
            Box::new(NriClient::new(client, NriConfig::from_env())),
        ))
    }

    /// Reports every state transition to `progress`.
    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn LookupProgress>) -> Self {
        self.progress = progress;
        self
    }

    /// Whether a lookup is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Snapshot of the current session state.
    #[must_use]
    pub fn state(&self) -> LookupState {
        self.lock_session().state().clone()
    }

    /// The result of the latest session, if it succeeded.
    #[must_use]
    pub fn result(&self) -> Option<Arc<LookupResult>> {
        match self.lock_session().state() {
            LookupState::Success(result) => Some(Arc::clone(result)),
            _ => None,
        }
    }

    /// Discards the current session unless a lookup is in flight.
    pub fn reset(&self) {
        if let Some(_guard) = BusyGuard::acquire(&self.busy) {
            self.lock_session().reset();
            self.progress.on_transition(&LookupState::Idle);
        }
    }

    /// Runs a full lookup for `zip` and returns the session's terminal
    /// state, [`LookupState::Success`] or [`LookupState::Failed`].
    ///
    /// The previous session is discarded before anything else happens. A
    /// malformed ZIP code fails without any network call; a resolver
    /// failure fails without calling the fetcher. Panics inside either
    /// service are caught and reported as [`LookupError::Unexpected`].
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Busy`] if another lookup is in flight. The
    /// session slot is left untouched in that case.
    pub async fn submit(&self, zip: &str) -> Result<LookupState, LookupError> {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            log::warn!("Ignoring submission for {zip:?}: a lookup is already in progress");
            return Err(LookupError::Busy);
        };

        self.lock_session().begin();
        self.progress.on_transition(&LookupState::Validating);
        log::debug!("Lookup {zip:?}: validating");

        let outcome = AssertUnwindSafe(self.run(zip)).catch_unwind().await;

        let terminal = match outcome {
            Ok(Ok(result)) => {
                log::info!(
                    "Lookup {zip}: {} ({})",
                    result.location.display_name(),
                    result.location.fips
                );
                LookupState::Success(Arc::new(result))
            }
            Ok(Err(err)) => {
                log::warn!("Lookup {zip:?} failed: {err}");
                LookupState::Failed(Arc::new(err))
            }
            Err(panic) => {
                let detail = panic_detail(panic.as_ref());
                log::error!("Lookup {zip:?} panicked: {detail}");
                LookupState::Failed(Arc::new(LookupError::Unexpected { detail }))
            }
        };

        self.transition(terminal.clone());
        Ok(terminal)
    }

    async fn run(&self, zip: &str) -> Result<LookupResult, LookupError> {
        let zip = validate_zip(zip)?;

        self.transition(LookupState::ResolvingLocation);
        let location = self.resolver.resolve(zip).await?;

        self.transition(LookupState::FetchingRisk);
        let record = self.fetcher.fetch(location.fips()).await?;

        Ok(LookupResult {
            zip: zip.to_string(),
            location,
            record,
        })
    }

    fn transition(&self, state: LookupState) {
        log::debug!("Lookup state: {}", state.label());
        self.lock_session().set_state(state.clone());
        self.progress.on_transition(&state);
    }

    fn lock_session(&self) -> MutexGuard<'_, LookupSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn panic_detail(panic: &(dyn Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use async_trait::async_trait;
    use hazard_risk_geocoder::GeocodeError;
    use hazard_risk_geography_models::{CountyFips, CountyLocation};
    use hazard_risk_hazard_models::{
        CountyRiskRecord, HazardScores, HazardType, RatingBand, RiskScore,
    };
    use hazard_risk_nri::NriError;
    use tokio::sync::Notify;

    use super::*;

    #[derive(Clone, Copy)]
    enum ResolveWith {
        County(&'static str),
        NoMatch,
        NoCounty,
        Unavailable,
        Panic,
    }

    struct StubResolver {
        calls: Arc<AtomicUsize>,
        outcome: ResolveWith,
        gate: Option<Arc<Notify>>,
    }

    #[async_trait]
    impl LocationResolver for StubResolver {
        async fn resolve(&self, zip: &str) -> Result<CountyLocation, GeocodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            match self.outcome {
                ResolveWith::County(fips) => Ok(CountyLocation {
                    fips: CountyFips::parse(fips).unwrap(),
                    county_name: "Los Angeles County".to_string(),
                    state_name: "CA".to_string(),
                    longitude: -118.406,
                    latitude: 34.090,
                    matched_address: zip.to_string(),
                }),
                ResolveWith::NoMatch => Err(GeocodeError::NoMatch {
                    zip: zip.to_string(),
                }),
                ResolveWith::NoCounty => Err(GeocodeError::NoCounty {
                    zip: zip.to_string(),
                }),
                ResolveWith::Unavailable => {
                    Err(GeocodeError::ServiceUnavailable { status: 503 })
                }
                ResolveWith::Panic => panic!("resolver exploded"),
            }
        }
    }

    enum FetchWith {
        Record(CountyRiskRecord),
        NoRecord,
        ServiceError(u16),
    }

    struct StubFetcher {
        calls: Arc<AtomicUsize>,
        requested: Arc<Mutex<Vec<String>>>,
        outcome: FetchWith,
    }

    #[async_trait]
    impl RiskDataFetcher for StubFetcher {
        async fn fetch(&self, fips: &CountyFips) -> Result<CountyRiskRecord, NriError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requested.lock().unwrap().push(fips.to_string());
            match &self.outcome {
                FetchWith::Record(record) => Ok(record.clone()),
                FetchWith::NoRecord => Err(NriError::NoRecord { fips: fips.clone() }),
                FetchWith::ServiceError(status) => Err(NriError::Service { status: *status }),
            }
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        labels: Mutex<Vec<&'static str>>,
    }

    impl LookupProgress for RecordingProgress {
        fn on_transition(&self, state: &LookupState) {
            self.labels.lock().unwrap().push(state.label());
        }
    }

    struct Harness {
        orchestrator: RiskLookupOrchestrator,
        resolver_calls: Arc<AtomicUsize>,
        fetcher_calls: Arc<AtomicUsize>,
        requested: Arc<Mutex<Vec<String>>>,
    }

    fn harness(resolve: ResolveWith, fetch: FetchWith, gate: Option<Arc<Notify>>) -> Harness {
        let resolver_calls = Arc::new(AtomicUsize::new(0));
        let fetcher_calls = Arc::new(AtomicUsize::new(0));
        let requested = Arc::new(Mutex::new(Vec::new()));
        let orchestrator = RiskLookupOrchestrator::new(
            Box::new(StubResolver {
                calls: Arc::clone(&resolver_calls),
                outcome: resolve,
                gate,
            }),
            Box::new(StubFetcher {
                calls: Arc::clone(&fetcher_calls),
                requested: Arc::clone(&requested),
                outcome: fetch,
            }),
        );
        Harness {
            orchestrator,
            resolver_calls,
            fetcher_calls,
            requested,
        }
    }

    fn earthquake_record(score: f64) -> CountyRiskRecord {
        let mut record = CountyRiskRecord::default();
        record.hazards.insert(
            HazardType::Earthquake,
            HazardScores {
                risk_score: RiskScore::new(score),
                ..HazardScores::default()
            },
        );
        record
    }

    #[tokio::test]
    async fn successful_lookup_classifies_earthquake() {
        let h = harness(
            ResolveWith::County("06037"),
            FetchWith::Record(earthquake_record(42.3)),
            None,
        );

        let state = h.orchestrator.submit("90210").await.unwrap();
        let result = state.result().expect("lookup should succeed");

        let quake = result.record.hazard(HazardType::Earthquake);
        assert_eq!(quake.risk_score, RiskScore::new(42.3));

        let report = result.report();
        let quake = report.hazard(HazardType::Earthquake).unwrap();
        assert_eq!(quake.risk.band, RatingBand::RelativelyModerate);
        assert_eq!(quake.risk.band.label(), "Relatively Moderate");

        assert_eq!(*h.requested.lock().unwrap(), vec!["06037".to_string()]);
        assert!(h.orchestrator.result().is_some());
        assert!(!h.orchestrator.is_busy());
    }

    #[tokio::test]
    async fn invalid_zip_never_reaches_network() {
        let h = harness(
            ResolveWith::County("06037"),
            FetchWith::Record(earthquake_record(10.0)),
            None,
        );

        for bad in ["abcde", "1234", "123456"] {
            let state = h.orchestrator.submit(bad).await.unwrap();
            let err = state.error().expect("validation should fail");
            assert!(matches!(err, LookupError::InputValidation { .. }));
            assert_eq!(err.to_string(), "Please enter a valid 5-digit ZIP code");
        }

        assert_eq!(h.resolver_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.fetcher_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn resolver_failure_skips_fetcher() {
        for outcome in [
            ResolveWith::NoMatch,
            ResolveWith::NoCounty,
            ResolveWith::Unavailable,
        ] {
            let h = harness(outcome, FetchWith::Record(earthquake_record(10.0)), None);
            let state = h.orchestrator.submit("90210").await.unwrap();
            assert!(matches!(
                state.error(),
                Some(LookupError::LocationResolution(_))
            ));
            assert_eq!(h.resolver_calls.load(Ordering::SeqCst), 1);
            assert_eq!(h.fetcher_calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn zero_matches_reports_no_location() {
        let h = harness(ResolveWith::NoMatch, FetchWith::NoRecord, None);

        let state = h.orchestrator.submit("00000").await.unwrap();

        let err = state.error().unwrap();
        assert_eq!(err.to_string(), "No location found for ZIP code 00000");
        assert_eq!(h.fetcher_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fetcher_messages_pass_through_verbatim() {
        let h = harness(ResolveWith::County("06037"), FetchWith::NoRecord, None);
        let state = h.orchestrator.submit("90210").await.unwrap();
        assert_eq!(
            state.error().unwrap().to_string(),
            "No risk data found for this county"
        );

        let h = harness(ResolveWith::County("06037"), FetchWith::ServiceError(502), None);
        let state = h.orchestrator.submit("90210").await.unwrap();
        assert_eq!(
            state.error().unwrap().to_string(),
            "Hazard data service error: HTTP 502"
        );
    }

    #[tokio::test]
    async fn failure_clears_previous_result() {
        let h = harness(
            ResolveWith::County("06037"),
            FetchWith::Record(earthquake_record(42.3)),
            None,
        );
        h.orchestrator.submit("90210").await.unwrap();
        assert!(h.orchestrator.result().is_some());

        h.orchestrator.submit("9021").await.unwrap();
        assert!(h.orchestrator.result().is_none());
        assert!(matches!(h.orchestrator.state(), LookupState::Failed(_)));
    }

    #[tokio::test]
    async fn panic_is_reported_as_unexpected() {
        let h = harness(ResolveWith::Panic, FetchWith::NoRecord, None);

        let state = h.orchestrator.submit("90210").await.unwrap();

        let err = state.error().unwrap();
        assert!(matches!(err, LookupError::Unexpected { detail } if detail == "resolver exploded"));
        assert_eq!(
            err.to_string(),
            "An unexpected error occurred. Please try again."
        );
        assert!(!h.orchestrator.is_busy());
        assert_eq!(h.fetcher_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn reports_transitions_in_order() {
        let progress = Arc::new(RecordingProgress::default());
        let h = harness(
            ResolveWith::County("06037"),
            FetchWith::Record(earthquake_record(42.3)),
            None,
        );
        let orchestrator = h
            .orchestrator
            .with_progress(Arc::clone(&progress) as Arc<dyn LookupProgress>);

        orchestrator.submit("90210").await.unwrap();

        assert_eq!(
            *progress.labels.lock().unwrap(),
            vec![
                "Validating ZIP code...",
                "Resolving location...",
                "Fetching hazard data...",
                "Complete",
            ]
        );
    }

    #[tokio::test]
    async fn concurrent_submission_is_rejected() {
        let gate = Arc::new(Notify::new());
        let h = harness(
            ResolveWith::County("06037"),
            FetchWith::Record(earthquake_record(42.3)),
            Some(Arc::clone(&gate)),
        );
        let orchestrator = Arc::new(h.orchestrator);

        let first = {
            let orchestrator = Arc::clone(&orchestrator);
            tokio::spawn(async move { orchestrator.submit("90210").await })
        };

        while h.resolver_calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert!(orchestrator.is_busy());

        let second = orchestrator.submit("10001").await;
        assert!(matches!(second, Err(LookupError::Busy)));
        assert!(matches!(orchestrator.state(), LookupState::ResolvingLocation));

        gate.notify_one();
        let state = first.await.unwrap().unwrap();
        assert_eq!(state.result().unwrap().zip, "90210");
        assert_eq!(h.resolver_calls.load(Ordering::SeqCst), 1);
        assert!(!orchestrator.is_busy());
    }

    #[tokio::test]
    async fn reset_returns_to_idle() {
        let h = harness(
            ResolveWith::County("06037"),
            FetchWith::Record(earthquake_record(42.3)),
            None,
        );
        h.orchestrator.submit("90210").await.unwrap();
        h.orchestrator.reset();
        assert!(matches!(h.orchestrator.state(), LookupState::Idle));
        assert!(h.orchestrator.result().is_none());
    }
}
