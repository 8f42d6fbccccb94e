//! Score to approximate annual probability.
//!
//! The mapping is a fixed lookup table chosen for display. It is not
//! derived from the score statistically and must not be treated as one.

use hazard_risk_hazard_models::{ProbabilityBand, ProbabilityDescriptor, RiskScore};

/// Looks up the approximate annual-probability bucket for a score.
///
/// Scans thresholds 5, 15, 30, 50, 70, 85 (inclusive) and falls through to
/// the open top bucket. A missing score yields
/// [`ProbabilityDescriptor::insufficient_data`].
#[must_use]
pub fn estimate(score: Option<RiskScore>) -> ProbabilityDescriptor {
    let Some(score) = score else {
        return ProbabilityDescriptor::insufficient_data();
    };
    let value = score.value();

    let band = ProbabilityBand::ALL
        .iter()
        .copied()
        .find(|band| band.upper_bound().is_none_or(|bound| value <= bound))
        .unwrap_or(ProbabilityBand::Frequent);

    ProbabilityDescriptor::for_band(band)
}

/// Estimates from a raw dataset value. Negative values mean "no data".
#[must_use]
pub fn estimate_value(value: f64) -> ProbabilityDescriptor {
    estimate(RiskScore::new(value))
}
