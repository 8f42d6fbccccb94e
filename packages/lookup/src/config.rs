//! Runtime configuration shared by both HTTP clients.

use std::time::Duration;

/// Environment variable holding the per-request timeout in seconds.
pub const TIMEOUT_ENV: &str = "HAZARD_RISK_HTTP_TIMEOUT_SECS";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads the per-request timeout from [`TIMEOUT_ENV`], falling back to
/// [`DEFAULT_TIMEOUT`] when unset or invalid.
#[must_use]
pub fn timeout_from_env() -> Duration {
    parse_timeout(std::env::var(TIMEOUT_ENV).ok().as_deref())
}

fn parse_timeout(value: Option<&str>) -> Duration {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => DEFAULT_TIMEOUT,
        Some(raw) => match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                log::warn!(
                    "Ignoring invalid {TIMEOUT_ENV}={raw:?}; using {}s",
                    DEFAULT_TIMEOUT.as_secs()
                );
                DEFAULT_TIMEOUT
            }
        },
    }
}

/// Builds the HTTP client both services share.
///
/// # Errors
///
/// Returns [`reqwest::Error`] if the TLS backend cannot be initialised.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("hazard-risk/", env!("CARGO_PKG_VERSION")))
        .build()
}
