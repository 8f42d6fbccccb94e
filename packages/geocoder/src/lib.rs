#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! ZIP code to county resolution.
//!
//! Sends the ZIP code as a one-line address to the US Census Bureau
//! geocoder's `geographies` endpoint and reads the county of the first
//! address match. One request per lookup, no retries, no caching.

pub mod census;
pub mod config;

use hazard_risk_geography_models::CountyLocation;
use thiserror::Error;

pub use config::CensusConfig;

/// Errors from resolving a ZIP code to a county.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The geocoder answered with a non-success HTTP status.
    #[error("Geocoding service unavailable (HTTP {status})")]
    ServiceUnavailable {
        /// HTTP status code returned by the service.
        status: u16,
    },

    /// The request could not be sent or the response could not be read.
    /// Timeouts land here.
    #[error("Geocoding service unavailable: {0}")]
    Http(#[from] reqwest::Error),

    /// The geocoder returned no address match for the ZIP code.
    #[error("No location found for ZIP code {zip}")]
    NoMatch {
        /// The ZIP code that was looked up.
        zip: String,
    },

    /// An address matched but carried no county geography.
    #[error("Could not determine county for ZIP code {zip}")]
    NoCounty {
        /// The ZIP code that was looked up.
        zip: String,
    },

    /// The response did not have the expected shape.
    #[error("Geocoding service returned an unexpected response: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },
}

impl GeocodeError {
    /// Whether this is a transport or service failure rather than a
    /// definitive "not found" answer.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable { .. } | Self::Http(_))
    }
}

/// Census Bureau geocoder client.
#[derive(Debug, Clone)]
pub struct CensusGeocoder {
    client: reqwest::Client,
    config: CensusConfig,
}

impl CensusGeocoder {
    /// Creates a geocoder that sends requests through `client`.
    ///
    /// Timeouts are taken from the client.
    #[must_use]
    pub const fn new(client: reqwest::Client, config: CensusConfig) -> Self {
        Self { client, config }
    }

    /// Resolves a five-digit ZIP code to its county.
    ///
    /// The caller validates `zip` before calling.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if the service is unreachable or answers
    /// with an error status, if nothing matches the ZIP code, or if the
    /// match has no county.
    pub async fn resolve(&self, zip: &str) -> Result<CountyLocation, GeocodeError> {
        census::resolve_county(&self.client, &self.config, zip).await
    }
}
