#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Hazard types, risk scores, and rating band definitions.
//!
//! These types mirror the county-level National Risk Index dataset: five
//! natural hazards, each scored 0-100 relative to every other US county,
//! plus county-wide composite scores. The band tables used to turn a score
//! into a rating or an approximate annual probability are compiled in and
//! never change at runtime.

pub mod band;
pub mod record;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

pub use band::{ColorPair, ProbabilityBand, ProbabilityDescriptor, RatingBand};
pub use record::{CompositeScores, CountyRiskRecord, HazardScores};

/// A natural hazard tracked by the index.
///
/// `Display` and `FromStr` use the index's four-letter field prefix
/// (`ERQK`, `HRCN`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum HazardType {
    /// Ground shaking from sudden fault movement.
    #[serde(rename = "ERQK")]
    #[strum(serialize = "ERQK")]
    Earthquake,
    /// Tropical cyclones with sustained winds of 74 mph or more.
    #[serde(rename = "HRCN")]
    #[strum(serialize = "HRCN")]
    Hurricane,
    /// Rotating columns of air in contact with the ground.
    #[serde(rename = "TRND")]
    #[strum(serialize = "TRND")]
    Tornado,
    /// Riverine flooding.
    #[serde(rename = "RFLD")]
    #[strum(serialize = "RFLD")]
    Flood,
    /// Unplanned fire in wildland vegetation.
    #[serde(rename = "WFIR")]
    #[strum(serialize = "WFIR")]
    Wildfire,
}

impl HazardType {
    /// Every hazard, in display order.
    pub const ALL: &[Self] = &[
        Self::Earthquake,
        Self::Hurricane,
        Self::Tornado,
        Self::Flood,
        Self::Wildfire,
    ];

    /// The four-letter field prefix used by the hazard index.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Earthquake => "ERQK",
            Self::Hurricane => "HRCN",
            Self::Tornado => "TRND",
            Self::Flood => "RFLD",
            Self::Wildfire => "WFIR",
        }
    }

    /// Human-readable hazard name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Earthquake => "Earthquake",
            Self::Hurricane => "Hurricane",
            Self::Tornado => "Tornado",
            Self::Flood => "Riverine Flooding",
            Self::Wildfire => "Wildfire",
        }
    }

    /// One-sentence description of the hazard.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Earthquake => {
                "Shaking and ground failure caused by the sudden release of energy along a fault."
            }
            Self::Hurricane => {
                "Tropical cyclones bringing damaging wind, storm surge, and heavy rainfall."
            }
            Self::Tornado => {
                "Violently rotating columns of air extending from a thunderstorm to the ground."
            }
            Self::Flood => {
                "Rivers and streams overflowing their banks after heavy rain or snowmelt."
            }
            Self::Wildfire => {
                "Unplanned fires spreading through wildland vegetation and the wildland-urban interface."
            }
        }
    }

    /// The main inputs the index weighs when scoring this hazard.
    #[must_use]
    pub const fn drivers(self) -> &'static [&'static str] {
        match self {
            Self::Earthquake => &["Fault proximity", "Soil type", "Building stock"],
            Self::Hurricane => &["Historic storm tracks", "Coastal exposure", "Wind speed"],
            Self::Tornado => &["Historic tornado frequency", "Path width", "Structure density"],
            Self::Flood => &["Floodplain extent", "Historic flood events", "Building values"],
            Self::Wildfire => &["Burn probability", "Vegetation", "Wildland-urban interface"],
        }
    }
}

/// Error returned when a value cannot be represented as a [`RiskScore`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid risk score {value}: expected a finite, non-negative number")]
pub struct InvalidScoreError {
    /// The rejected value.
    pub value: f64,
}

/// A score on the index's 0-100 percentile scale.
///
/// Missing data is represented as `Option<RiskScore>::None` rather than a
/// sentinel value, so every constructed score satisfies
/// `0.0 <= value <= 100.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RiskScore(f64);

impl RiskScore {
    /// Lowest possible score.
    pub const MIN: Self = Self(0.0);
    /// Highest possible score.
    pub const MAX: Self = Self(100.0);

    /// Interprets a raw value from the dataset.
    ///
    /// Negative and non-finite values mean "no data" and yield `None`.
    /// Values above 100 are clamped to 100.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value >= 0.0 {
            Some(Self(value.min(100.0)))
        } else {
            None
        }
    }

    /// The underlying score.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for RiskScore {
    type Error = InvalidScoreError;

    /// Same policy as [`RiskScore::new`]: values above 100 are clamped,
    /// negative and non-finite values are rejected.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidScoreError { value })
    }
}

impl From<RiskScore> for f64 {
    fn from(score: RiskScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn codes_round_trip_through_strum() {
        for hazard in HazardType::ALL {
            assert_eq!(hazard.to_string(), hazard.code());
            assert_eq!(HazardType::from_str(hazard.code()).unwrap(), *hazard);
        }
        assert!(HazardType::from_str("DRGT").is_err());
    }

    #[test]
    fn every_hazard_has_metadata() {
        for hazard in HazardType::ALL {
            assert!(!hazard.label().is_empty());
            assert!(!hazard.description().is_empty());
            assert!(!hazard.drivers().is_empty(), "{hazard:?} has no drivers");
        }
    }

    #[test]
    fn hazard_serializes_as_code() {
        assert_eq!(
            serde_json::to_string(&HazardType::Flood).unwrap(),
            "\"RFLD\""
        );
    }

    #[test]
    fn negative_and_nan_scores_are_absent() {
        assert_eq!(RiskScore::new(-1.0), None);
        assert_eq!(RiskScore::new(f64::NAN), None);
        assert_eq!(RiskScore::new(0.0), Some(RiskScore::MIN));
    }

    #[test]
    fn scores_above_range_are_clamped() {
        assert_eq!(RiskScore::new(100.5), Some(RiskScore::MAX));
        assert!((RiskScore::new(42.3).unwrap().value() - 42.3).abs() < f64::EPSILON);
    }

    #[test]
    fn deserialize_follows_constructor_policy() {
        assert!(serde_json::from_str::<RiskScore>("-3").is_err());
        let score: RiskScore = serde_json::from_str("15").unwrap();
        assert!((score.value() - 15.0).abs() < f64::EPSILON);

        let above: RiskScore = serde_json::from_str("101.0").unwrap();
        assert_eq!(Some(above), RiskScore::new(101.0));
        assert_eq!(above, RiskScore::MAX);
    }

    #[test]
    fn try_from_matches_new() {
        for value in [-1.0, 0.0, 42.3, 100.0, 100.5, 250.0, f64::NAN, f64::INFINITY] {
            assert_eq!(RiskScore::try_from(value).ok(), RiskScore::new(value), "{value}");
        }
        let err = RiskScore::try_from(-2.5).unwrap_err();
        assert!((err.value - -2.5).abs() < f64::EPSILON);
    }
}
