//! The two external services a lookup depends on.
//!
//! The orchestrator only sees these traits, so tests can substitute stubs
//! for the Census geocoder and the hazard index.

use async_trait::async_trait;
use hazard_risk_geocoder::{CensusGeocoder, GeocodeError};
use hazard_risk_geography_models::{CountyFips, CountyLocation};
use hazard_risk_hazard_models::CountyRiskRecord;
use hazard_risk_nri::{NriClient, NriError};

/// Resolves a validated ZIP code to a county.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Resolves `zip` with a single request.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if the service fails, nothing matches, or
    /// the match has no county.
    async fn resolve(&self, zip: &str) -> Result<CountyLocation, GeocodeError>;
}

/// Fetches the hazard record for a county.
#[async_trait]
pub trait RiskDataFetcher: Send + Sync {
    /// Fetches the record for `fips` with a single request.
    ///
    /// # Errors
    ///
    /// Returns [`NriError`] if the service fails or has no record for the
    /// county.
    async fn fetch(&self, fips: &CountyFips) -> Result<CountyRiskRecord, NriError>;
}

#[async_trait]
impl LocationResolver for CensusGeocoder {
    async fn resolve(&self, zip: &str) -> Result<CountyLocation, GeocodeError> {
        Self::resolve(self, zip).await
    }
}

#[async_trait]
impl RiskDataFetcher for NriClient {
    async fn fetch(&self, fips: &CountyFips) -> Result<CountyRiskRecord, NriError> {
        Self::fetch(self, fips).await
    }
}
