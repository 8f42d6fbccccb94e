//! Score to rating band classification.

use hazard_risk_hazard_models::{RatingBand, RiskScore};

/// Classifies a score into its rating band.
///
/// Scans the five tiers in ascending order and returns the first whose
/// inclusive upper bound is at least `score`, so boundary values (15, 30,
/// 50, 70) belong to the lower tier. A missing score yields
/// [`RatingBand::NoData`].
#[must_use]
pub fn classify(score: Option<RiskScore>) -> RatingBand {
    let Some(score) = score else {
        return RatingBand::NoData;
    };
    let value = score.value();

    RatingBand::TIERS
        .iter()
        .copied()
        .find(|band| band.upper_bound().is_some_and(|bound| value <= bound))
        .unwrap_or(RatingBand::VeryHigh)
}

/// Classifies a raw dataset value. Negative values mean "no data".
#[must_use]
pub fn classify_value(value: f64) -> RatingBand {
    classify(RiskScore::new(value))
}
