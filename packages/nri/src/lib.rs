#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! County hazard risk records from the FEMA National Risk Index.
//!
//! Queries the index's `ArcGIS` `FeatureServer` for exactly one county,
//! filtered server-side by state and county FIPS, requesting only the
//! per-hazard and composite fields listed in [`fields`].

pub mod arcgis;
pub mod config;
pub mod fields;

use hazard_risk_geography_models::CountyFips;
use hazard_risk_hazard_models::CountyRiskRecord;
use thiserror::Error;

pub use config::NriConfig;

/// Errors from fetching a county's hazard record.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Error)]
pub enum NriError {
    /// The service answered with a non-success HTTP status.
    #[error("Hazard data service error: HTTP {status}")]
    Service {
        /// HTTP status code returned by the service.
        status: u16,
    },

    /// The request could not be sent or the response could not be read.
    /// Timeouts land here.
    #[error("Hazard data service error: {0}")]
    Http(#[from] reqwest::Error),

    /// `ArcGIS` answered HTTP 200 with an `error` envelope.
    #[error("Hazard data service error: {message}")]
    Api {
        /// Error message from the service.
        message: String,
    },

    /// The query matched no county record.
    #[error("No risk data found for this county")]
    NoRecord {
        /// The county that was queried.
        fips: CountyFips,
    },

    /// The response did not have the expected shape.
    #[error("Hazard data service returned an unexpected response: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },
}

/// National Risk Index client.
#[derive(Debug, Clone)]
pub struct NriClient {
    client: reqwest::Client,
    config: NriConfig,
}

impl NriClient {
    /// Creates a client that sends requests through `client`.
    ///
    /// Timeouts are taken from the client.
    #[must_use]
    pub const fn new(client: reqwest::Client, config: NriConfig) -> Self {
        Self { client, config }
    }

    /// Fetches the hazard record for one county.
    ///
    /// # Errors
    ///
    /// Returns [`NriError`] if the service is unreachable or answers with an
    /// error, or if no record exists for the county.
    pub async fn fetch(&self, fips: &CountyFips) -> Result<CountyRiskRecord, NriError> {
        arcgis::fetch_county(&self.client, &self.config, fips).await
    }
}
