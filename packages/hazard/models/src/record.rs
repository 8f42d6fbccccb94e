//! County risk record as returned by the hazard index.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{HazardType, RiskScore};

/// The four sub-scores the index publishes for one hazard in one county.
///
/// Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardScores {
    /// Relative risk score (`{CODE}_RISKS`).
    pub risk_score: Option<RiskScore>,
    /// Risk rating label as published (`{CODE}_RISKR`).
    pub risk_rating: Option<String>,
    /// Expected annual loss score (`{CODE}_EALS`).
    pub eal_score: Option<RiskScore>,
    /// Expected annual loss rating label (`{CODE}_EALR`).
    pub eal_rating: Option<String>,
}

static EMPTY_SCORES: HazardScores = HazardScores {
    risk_score: None,
    risk_rating: None,
    eal_score: None,
    eal_rating: None,
};

/// County-wide composite scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeScores {
    /// Overall risk score (`RISK_SCORE`).
    pub risk_score: Option<RiskScore>,
    /// Overall risk rating (`RISK_RATNG`).
    pub risk_rating: Option<String>,
    /// Expected annual loss score (`EAL_SCORE`).
    pub eal_score: Option<RiskScore>,
    /// Expected annual loss rating (`EAL_RATNG`).
    pub eal_rating: Option<String>,
    /// Social vulnerability score (`SOVI_SCORE`).
    pub sovi_score: Option<RiskScore>,
    /// Social vulnerability rating (`SOVI_RATNG`).
    pub sovi_rating: Option<String>,
    /// Community resilience score (`RESL_SCORE`).
    pub resl_score: Option<RiskScore>,
    /// Community resilience rating (`RESL_RATNG`).
    pub resl_rating: Option<String>,
}

/// Hazard index record for a single county.
///
/// Fetched fresh for every search and replaced wholesale by the next one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyRiskRecord {
    /// County name as published by the index.
    pub county: Option<String>,
    /// State name as published by the index.
    pub state: Option<String>,
    /// Per-hazard scores keyed by hazard.
    pub hazards: BTreeMap<HazardType, HazardScores>,
    /// County-wide composite scores.
    pub composite: CompositeScores,
}

impl CountyRiskRecord {
    /// Scores for one hazard. Hazards absent from the record read as all
    /// fields missing.
    #[must_use]
    pub fn hazard(&self, hazard: HazardType) -> &HazardScores {
        self.hazards.get(&hazard).unwrap_or(&EMPTY_SCORES)
    }
}
