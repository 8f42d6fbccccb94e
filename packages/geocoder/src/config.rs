//! Geocoder service configuration.
//!
//! The default endpoint is defined in `services/census.toml` and embedded at
//! compile time. `HAZARD_RISK_GEOCODER_URL` overrides the base URL.

use serde::Deserialize;

/// Environment variable that overrides [`CensusConfig::base_url`].
pub const BASE_URL_ENV: &str = "HAZARD_RISK_GEOCODER_URL";

const CENSUS_TOML: &str = include_str!("../services/census.toml");

/// Census geocoder endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CensusConfig {
    /// Service identifier.
    pub id: String,
    /// Human-readable service name.
    pub name: String,
    /// API base URL (e.g. `"https://geocoding.geo.census.gov/geocoder"`).
    pub base_url: String,
    /// Address range benchmark (e.g. `"Public_AR_Current"`).
    pub benchmark: String,
    /// Geography vintage (e.g. `"Current_Current"`).
    pub vintage: String,
}

impl CensusConfig {
    /// The embedded default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed (a compile-time guarantee
    /// since the file is embedded).
    #[must_use]
    pub fn embedded() -> Self {
        toml::de::from_str(CENSUS_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse geocoder service 'census': {e}"))
    }

    /// The embedded configuration with environment overrides applied.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::embedded();
        if let Some(url) = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
        {
            log::info!("Using geocoder base URL from {BASE_URL_ENV}: {url}");
            config.base_url = url;
        }
        config
    }

    /// URL of the one-line address geographies endpoint.
    #[must_use]
    pub fn geographies_url(&self) -> String {
        format!(
            "{}/geographies/onelineaddress",
            self.base_url.trim_end_matches('/')
        )
    }
}
