//! Display model for a completed lookup.
//!
//! Applies [`classify`] and [`estimate`] to every hazard and to the overall
//! score of a [`CountyRiskRecord`].

use hazard_risk_geography_models::CountyLocation;
use hazard_risk_hazard_models::{
    CountyRiskRecord, HazardType, ProbabilityDescriptor, RatingBand, RiskScore,
};
use serde::Serialize;

use crate::{classify, estimate};

/// A score alongside its computed band and the rating the index published.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedScore {
    /// The raw score, if present.
    pub score: Option<RiskScore>,
    /// Band computed from `score`.
    pub band: RatingBand,
    /// Rating label as published by the index, if present.
    pub published_rating: Option<String>,
}

impl RatedScore {
    fn new(score: Option<RiskScore>, published_rating: Option<&str>) -> Self {
        Self {
            score,
            band: classify(score),
            published_rating: published_rating
                .map(str::trim)
                .filter(|rating| !rating.is_empty())
                .map(str::to_string),
        }
    }

    /// The label to show, always that of the computed band so it matches
    /// the band's colors.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.band.label()
    }

    /// The index's published rating when it differs from [`Self::label`].
    #[must_use]
    pub fn differing_published_rating(&self) -> Option<&str> {
        self.published_rating
            .as_deref()
            .filter(|rating| !rating.eq_ignore_ascii_case(self.label()))
    }
}

/// One hazard's section of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardReport {
    /// Which hazard.
    pub hazard: HazardType,
    /// Relative risk.
    pub risk: RatedScore,
    /// Expected annual loss.
    pub expected_annual_loss: RatedScore,
    /// Approximate annual probability derived from the risk score.
    pub probability: ProbabilityDescriptor,
}

/// Everything the results view shows for one county.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    /// The county the ZIP code resolved to.
    pub location: CountyLocation,
    /// Overall composite risk.
    pub overall: RatedScore,
    /// Approximate annual probability derived from the overall score.
    pub overall_probability: ProbabilityDescriptor,
    /// Composite expected annual loss.
    pub expected_annual_loss: RatedScore,
    /// Social vulnerability.
    pub social_vulnerability: RatedScore,
    /// Community resilience.
    pub community_resilience: RatedScore,
    /// Per-hazard sections in [`HazardType::ALL`] order.
    pub hazards: Vec<HazardReport>,
}

impl RiskReport {
    /// Builds the display model from a resolved location and its record.
    #[must_use]
    pub fn build(location: CountyLocation, record: &CountyRiskRecord) -> Self {
        let composite = &record.composite;

        let hazards = HazardType::ALL
            .iter()
            .map(|&hazard| {
                let scores = record.hazard(hazard);
                HazardReport {
                    hazard,
                    risk: RatedScore::new(scores.risk_score, scores.risk_rating.as_deref()),
                    expected_annual_loss: RatedScore::new(
                        scores.eal_score,
                        scores.eal_rating.as_deref(),
                    ),
                    probability: estimate(scores.risk_score),
                }
            })
            .collect();

        Self {
            location,
            overall: RatedScore::new(composite.risk_score, composite.risk_rating.as_deref()),
            overall_probability: estimate(composite.risk_score),
            expected_annual_loss: RatedScore::new(
                composite.eal_score,
                composite.eal_rating.as_deref(),
            ),
            social_vulnerability: RatedScore::new(
                composite.sovi_score,
                composite.sovi_rating.as_deref(),
            ),
            community_resilience: RatedScore::new(
                composite.resl_score,
                composite.resl_rating.as_deref(),
            ),
            hazards,
        }
    }

    /// The section for one hazard.
    #[must_use]
    pub fn hazard(&self, hazard: HazardType) -> Option<&HazardReport> {
        self.hazards.iter().find(|h| h.hazard == hazard)
    }

    /// The hazard with the highest present risk score. Ties go to the hazard
    /// listed first in [`HazardType::ALL`].
    #[must_use]
    pub fn highest_hazard(&self) -> Option<&HazardReport> {
        self.hazards
            .iter()
            .filter_map(|h| h.risk.score.map(|score| (h, score)))
            .fold(None, |best: Option<(&HazardReport, RiskScore)>, (h, score)| {
                match best {
                    Some((_, best_score)) if best_score >= score => best,
                    _ => Some((h, score)),
                }
            })
            .map(|(h, _)| h)
    }
}
