//! US Census Bureau geocoder client.
//!
//! Uses the single-address geographies endpoint, which returns the
//! Census geographies (including counties) containing each match:
//!
//! - `GET /geographies/onelineaddress?address=..&benchmark=..&vintage=..&format=json`
//!
//! See <https://geocoding.geo.census.gov/geocoder/Geocoding_Services_API.html>

use hazard_risk_geography_models::{CountyFips, CountyLocation, fips};

use crate::{CensusConfig, GeocodeError};

/// Resolves `zip` to the county of its first address match.
///
/// # Errors
///
/// Returns [`GeocodeError`] if the HTTP request fails, the service returns
/// a non-success status, or the response has no usable match.
pub async fn resolve_county(
    client: &reqwest::Client,
    config: &CensusConfig,
    zip: &str,
) -> Result<CountyLocation, GeocodeError> {
    let url = config.geographies_url();
    log::debug!("Geocoding ZIP {zip} via {url}");

    let resp = client
        .get(&url)
        .query(&[
            ("address", zip),
            ("benchmark", config.benchmark.as_str()),
            ("vintage", config.vintage.as_str()),
            ("format", "json"),
        ])
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        log::warn!("Geocoder returned HTTP {status} for ZIP {zip}");
        return Err(GeocodeError::ServiceUnavailable {
            status: status.as_u16(),
        });
    }

    let body: serde_json::Value = resp.json().await?;
    parse_county_response(zip, &body)
}

/// Extracts the first county of the first address match.
fn parse_county_response(
    zip: &str,
    body: &serde_json::Value,
) -> Result<CountyLocation, GeocodeError> {
    let matches =
        body["result"]["addressMatches"]
            .as_array()
            .ok_or_else(|| GeocodeError::Parse {
                message: "Missing addressMatches array".to_string(),
            })?;

    let Some(first) = matches.first() else {
        return Err(GeocodeError::NoMatch {
            zip: zip.to_string(),
        });
    };

    let Some(county) = first["geographies"]["Counties"]
        .as_array()
        .and_then(|counties| counties.first())
    else {
        return Err(GeocodeError::NoCounty {
            zip: zip.to_string(),
        });
    };

    let county_fips_code = county_fips(county)?;

    let county_name = county["NAME"]
        .as_str()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| GeocodeError::Parse {
            message: "County entry has no NAME".to_string(),
        })?
        .to_string();

    // The address components carry the postal abbreviation; fall back to
    // the FIPS table when the geocoder leaves it blank.
    let state_name = first["addressComponents"]["state"]
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| fips::state_name(county_fips_code.state()))
        .unwrap_or("Unknown")
        .to_string();

    let longitude = first["coordinates"]["x"]
        .as_f64()
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing x coordinate".to_string(),
        })?;
    let latitude = first["coordinates"]["y"]
        .as_f64()
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing y coordinate".to_string(),
        })?;

    let matched_address = first["matchedAddress"]
        .as_str()
        .map_or_else(|| zip.to_string(), String::from);

    log::debug!("ZIP {zip} resolved to {county_name} ({county_fips_code})");

    Ok(CountyLocation {
        fips: county_fips_code,
        county_name,
        state_name,
        longitude,
        latitude,
        matched_address,
    })
}

/// Reads the county FIPS from the `STATE` + `COUNTY` fields, falling back
/// to `GEOID`.
fn county_fips(county: &serde_json::Value) -> Result<CountyFips, GeocodeError> {
    let from_parts = match (county["STATE"].as_str(), county["COUNTY"].as_str()) {
        (Some(state), Some(code)) => CountyFips::from_parts(state, code).ok(),
        _ => None,
    };

    from_parts
        .or_else(|| {
            county["GEOID"]
                .as_str()
                .and_then(|geoid| CountyFips::parse(geoid).ok())
        })
        .ok_or_else(|| GeocodeError::Parse {
            message: format!("County entry has no usable STATE/COUNTY codes: {county}"),
        })
}
