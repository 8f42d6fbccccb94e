//! Hazard index service configuration.
//!
//! The default endpoint is defined in `services/nri.toml` and embedded at
//! compile time. `HAZARD_RISK_NRI_URL` overrides the query URL.

use serde::Deserialize;

/// Environment variable that overrides [`NriConfig::query_url`].
pub const QUERY_URL_ENV: &str = "HAZARD_RISK_NRI_URL";

const NRI_TOML: &str = include_str!("../services/nri.toml");

/// `FeatureServer` layer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NriConfig {
    /// Service identifier.
    pub id: String,
    /// Human-readable service name.
    pub name: String,
    /// Layer query URL (up to `.../query`).
    pub query_url: String,
    /// Attribute holding the two-digit state FIPS code.
    pub state_field: String,
    /// Attribute holding the three-digit county FIPS code.
    pub county_field: String,
}

impl NriConfig {
    /// The embedded default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed (a compile-time guarantee
    /// since the file is embedded).
    #[must_use]
    pub fn embedded() -> Self {
        toml::de::from_str(NRI_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse hazard index service 'nri': {e}"))
    }

    /// The embedded configuration with environment overrides applied.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::embedded();
        if let Some(url) = std::env::var(QUERY_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
        {
            log::info!("Using hazard index URL from {QUERY_URL_ENV}: {url}");
            config.query_url = url;
        }
        config
    }
}
