//! `ArcGIS` `FeatureServer` query for a single county.
//!
//! Sends `where=STATEFIPS='SS' AND COUNTYFIPS='CCC'` with an explicit
//! `outFields` list and `f=json`, then reads the attributes of the first
//! returned feature. The service holds one record per county; if it ever
//! returns more, the first is taken.

use hazard_risk_geography_models::CountyFips;
use hazard_risk_hazard_models::{
    CompositeScores, CountyRiskRecord, HazardScores, HazardType, RiskScore,
};
use serde_json::{Map, Value};

use crate::{NriConfig, NriError, fields};

/// Fetches the hazard record for one county.
///
/// # Errors
///
/// Returns [`NriError`] if the request fails, the service reports an error,
/// or no record matches the county.
pub async fn fetch_county(
    client: &reqwest::Client,
    config: &NriConfig,
    fips: &CountyFips,
) -> Result<CountyRiskRecord, NriError> {
    let where_clause = county_filter(config, fips);
    let out_fields = fields::out_fields().join(",");
    log::debug!(
        "Querying hazard index {} where {where_clause}",
        config.query_url
    );

    let resp = client
        .get(&config.query_url)
        .query(&[
            ("where", where_clause.as_str()),
            ("outFields", out_fields.as_str()),
            ("returnGeometry", "false"),
            ("f", "json"),
        ])
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        log::warn!("Hazard index returned HTTP {status} for county {fips}");
        return Err(NriError::Service {
            status: status.as_u16(),
        });
    }

    let body: Value = resp.json().await?;
    parse_county_response(fips, &body)
}

/// Server-side filter selecting exactly one state + county pair.
fn county_filter(config: &NriConfig, fips: &CountyFips) -> String {
    format!(
        "{} = '{}' AND {} = '{}'",
        config.state_field,
        fips.state(),
        config.county_field,
        fips.county()
    )
}

/// Extracts the first record from a query response.
///
/// Accepts the standard `{ "features": [{ "attributes": {..} }] }` shape
/// as well as a bare array of attribute objects.
fn parse_county_response(fips: &CountyFips, body: &Value) -> Result<CountyRiskRecord, NriError> {
    if let Some(error) = body.get("error") {
        return Err(NriError::Api {
            message: error["message"]
                .as_str()
                .unwrap_or("unknown error")
                .to_string(),
        });
    }

    let records = body
        .as_array()
        .or_else(|| body["features"].as_array())
        .ok_or_else(|| NriError::Parse {
            message: "No features array in hazard index response".to_string(),
        })?;

    if records.len() > 1 {
        log::warn!(
            "Hazard index returned {} records for county {fips}; using the first",
            records.len()
        );
    }

    let Some(first) = records.first() else {
        return Err(NriError::NoRecord { fips: fips.clone() });
    };

    let attributes = first
        .get("attributes")
        .unwrap_or(first)
        .as_object()
        .ok_or_else(|| NriError::Parse {
            message: "Record is not an attribute object".to_string(),
        })?;

    Ok(parse_record(attributes))
}

fn parse_record(attributes: &Map<String, Value>) -> CountyRiskRecord {
    let hazards = HazardType::ALL
        .iter()
        .map(|&hazard| {
            let field = |suffix| attribute(attributes, &fields::hazard_field(hazard, suffix));
            let scores = HazardScores {
                risk_score: score(field(fields::RISK_SCORE_SUFFIX)),
                risk_rating: rating(field(fields::RISK_RATING_SUFFIX)),
                eal_score: score(field(fields::EAL_SCORE_SUFFIX)),
                eal_rating: rating(field(fields::EAL_RATING_SUFFIX)),
            };
            (hazard, scores)
        })
        .collect();

    let field = |name| attribute(attributes, name);
    let composite = CompositeScores {
        risk_score: score(field(fields::RISK_SCORE)),
        risk_rating: rating(field(fields::RISK_RATING)),
        eal_score: score(field(fields::EAL_SCORE)),
        eal_rating: rating(field(fields::EAL_RATING)),
        sovi_score: score(field(fields::SOVI_SCORE)),
        sovi_rating: rating(field(fields::SOVI_RATING)),
        resl_score: score(field(fields::RESL_SCORE)),
        resl_rating: rating(field(fields::RESL_RATING)),
    };

    CountyRiskRecord {
        county: rating(field(fields::COUNTY)),
        state: rating(field(fields::STATE)),
        hazards,
        composite,
    }
}

/// Looks up an attribute by name. `ArcGIS` field names are case-insensitive,
/// so an exact match is tried first, then a case-insensitive one.
fn attribute<'a>(attributes: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    attributes.get(name).or_else(|| {
        attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}

/// Reads a score. `null`, negative, and non-numeric values mean no data.
fn score(value: Option<&Value>) -> Option<RiskScore> {
    let value = value?;
    let raw = value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))?;
    RiskScore::new(raw)
}

/// Reads a non-blank string attribute.
fn rating(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
