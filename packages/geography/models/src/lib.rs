#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! County location and FIPS code types.
//!
//! A ZIP code lookup resolves to exactly one [`CountyLocation`], which is
//! addressed downstream by its five-digit [`CountyFips`] code.

pub mod fips;

use serde::{Deserialize, Serialize};

pub use fips::{CountyFips, InvalidFipsError};

/// A county resolved from a ZIP code by the geocoder.
///
/// Created once per successful lookup and never mutated afterwards; a new
/// lookup produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyLocation {
    /// Five-digit state + county FIPS code.
    pub fips: CountyFips,
    /// County name as reported by the geocoder (e.g. "Los Angeles County").
    pub county_name: String,
    /// State name or postal abbreviation as reported by the geocoder.
    pub state_name: String,
    /// Longitude of the matched address (WGS84).
    pub longitude: f64,
    /// Latitude of the matched address (WGS84).
    pub latitude: f64,
    /// The canonical address string the geocoder matched.
    pub matched_address: String,
}

impl CountyLocation {
    /// Returns the five-digit FIPS code for this county.
    #[must_use]
    pub const fn fips(&self) -> &CountyFips {
        &self.fips
    }

    /// Human-readable "County, State" label.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.county_name, self.state_name)
    }
}
