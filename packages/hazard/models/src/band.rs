//! Rating and probability band tables.
//!
//! Both tables are ordered by ascending inclusive upper bound. Lookups
//! live in `hazard_risk_hazard`; this module only owns the fixed data.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

/// Background and foreground colors used to display a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPair {
    /// Hex background color (e.g. `"#C7445D"`).
    pub background: &'static str,
    /// Hex text color drawn on top of `background`.
    pub text: &'static str,
}

/// Severity tier assigned to a 0-100 score.
///
/// The five tiers are ordered from least to most severe. [`Self::NoData`]
/// sits outside that ordering and is only produced for missing scores.
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
    AsRefStr,
)]
pub enum RatingBand {
    /// No score available.
    #[strum(serialize = "No Data")]
    NoData,
    /// Score in `[0, 15]`.
    #[strum(serialize = "Very Low")]
    VeryLow,
    /// Score in `(15, 30]`.
    #[strum(serialize = "Relatively Low")]
    RelativelyLow,
    /// Score in `(30, 50]`.
    #[strum(serialize = "Relatively Moderate")]
    RelativelyModerate,
    /// Score in `(50, 70]`.
    #[strum(serialize = "Relatively High")]
    RelativelyHigh,
    /// Score in `(70, 100]`.
    #[strum(serialize = "Very High")]
    VeryHigh,
}

impl RatingBand {
    /// The five scored tiers in ascending bound order.
    pub const TIERS: &[Self] = &[
        Self::VeryLow,
        Self::RelativelyLow,
        Self::RelativelyModerate,
        Self::RelativelyHigh,
        Self::VeryHigh,
    ];

    /// Display label (same as `Display`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoData => "No Data",
            Self::VeryLow => "Very Low",
            Self::RelativelyLow => "Relatively Low",
            Self::RelativelyModerate => "Relatively Moderate",
            Self::RelativelyHigh => "Relatively High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Inclusive upper score bound, or `None` for [`Self::NoData`].
    #[must_use]
    pub const fn upper_bound(self) -> Option<f64> {
        match self {
            Self::NoData => None,
            Self::VeryLow => Some(15.0),
            Self::RelativelyLow => Some(30.0),
            Self::RelativelyModerate => Some(50.0),
            Self::RelativelyHigh => Some(70.0),
            Self::VeryHigh => Some(100.0),
        }
    }

    /// Exclusive lower score bound (the previous tier's upper bound).
    ///
    /// `None` for [`Self::NoData`] and for [`Self::VeryLow`], which starts
    /// at 0 inclusive.
    #[must_use]
    pub const fn lower_bound(self) -> Option<f64> {
        match self {
            Self::NoData | Self::VeryLow => None,
            Self::RelativelyLow => Some(15.0),
            Self::RelativelyModerate => Some(30.0),
            Self::RelativelyHigh => Some(50.0),
            Self::VeryHigh => Some(70.0),
        }
    }

    /// Display colors, following the index's published palette.
    #[must_use]
    pub const fn colors(self) -> ColorPair {
        match self {
            Self::NoData => ColorPair {
                background: "#D9D9D9",
                text: "#4D4D4D",
            },
            Self::VeryLow => ColorPair {
                background: "#4D6DBD",
                text: "#FFFFFF",
            },
            Self::RelativelyLow => ColorPair {
                background: "#509BC7",
                text: "#FFFFFF",
            },
            Self::RelativelyModerate => ColorPair {
                background: "#F0D55D",
                text: "#333333",
            },
            Self::RelativelyHigh => ColorPair {
                background: "#E07069",
                text: "#FFFFFF",
            },
            Self::VeryHigh => ColorPair {
                background: "#C7445D",
                text: "#FFFFFF",
            },
        }
    }

    /// Whether this is one of the five scored tiers.
    #[must_use]
    pub const fn has_data(self) -> bool {
        !matches!(self, Self::NoData)
    }
}

/// Approximate annual-probability bucket for a 0-100 score.
///
/// This is a fixed display heuristic, not a statistical transform of the
/// score. Bucket boundaries and texts are part of the public contract.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
pub enum ProbabilityBand {
    /// Score in `[0, 5]`.
    #[strum(serialize = "< 0.1%")]
    Negligible,
    /// Score in `(5, 15]`.
    #[strum(serialize = "~0.1–0.5%")]
    Rare,
    /// Score in `(15, 30]`.
    #[strum(serialize = "~0.5–2%")]
    Unlikely,
    /// Score in `(30, 50]`.
    #[strum(serialize = "~2–5%")]
    Possible,
    /// Score in `(50, 70]`.
    #[strum(serialize = "~5–15%")]
    Likely,
    /// Score in `(70, 85]`.
    #[strum(serialize = "~15–30%")]
    VeryLikely,
    /// Score above 85.
    #[strum(serialize = "> 30%")]
    Frequent,
}

impl ProbabilityBand {
    /// All buckets in ascending threshold order.
    pub const ALL: &[Self] = &[
        Self::Negligible,
        Self::Rare,
        Self::Unlikely,
        Self::Possible,
        Self::Likely,
        Self::VeryLikely,
        Self::Frequent,
    ];

    /// Inclusive upper score threshold. The last bucket is unbounded.
    #[must_use]
    pub const fn upper_bound(self) -> Option<f64> {
        match self {
            Self::Negligible => Some(5.0),
            Self::Rare => Some(15.0),
            Self::Unlikely => Some(30.0),
            Self::Possible => Some(50.0),
            Self::Likely => Some(70.0),
            Self::VeryLikely => Some(85.0),
            Self::Frequent => None,
        }
    }

    /// Short range text, e.g. `"~2–5%"`.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Negligible => "< 0.1%",
            Self::Rare => "~0.1–0.5%",
            Self::Unlikely => "~0.5–2%",
            Self::Possible => "~2–5%",
            Self::Likely => "~5–15%",
            Self::VeryLikely => "~15–30%",
            Self::Frequent => "> 30%",
        }
    }

    /// Longer plain-language phrasing of the range.
    #[must_use]
    pub const fn detail(self) -> &'static str {
        match self {
            Self::Negligible => "Less than a 1 in 1,000 chance of a damaging event in a given year",
            Self::Rare => "Roughly a 1 in 500 chance of a damaging event in a given year",
            Self::Unlikely => "Roughly a 1 in 100 chance of a damaging event in a given year",
            Self::Possible => "Roughly a 1 in 30 chance of a damaging event in a given year",
            Self::Likely => "Roughly a 1 in 10 chance of a damaging event in a given year",
            Self::VeryLikely => "Roughly a 1 in 5 chance of a damaging event in a given year",
            Self::Frequent => "Better than a 1 in 3 chance of a damaging event in a given year",
        }
    }

    /// Approximate "1 in N" odds for display.
    #[must_use]
    pub const fn odds_one_in(self) -> u32 {
        match self {
            Self::Negligible => 1000,
            Self::Rare => 500,
            Self::Unlikely => 100,
            Self::Possible => 30,
            Self::Likely => 10,
            Self::VeryLikely => 5,
            Self::Frequent => 3,
        }
    }
}

/// What to show for a score's approximate annual probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityDescriptor {
    /// The matched bucket, or `None` when the score is missing.
    pub band: Option<ProbabilityBand>,
    /// Short range text.
    pub text: &'static str,
    /// Plain-language detail; empty when the score is missing.
    pub detail: &'static str,
    /// Approximate "1 in N" odds; `None` when the score is missing.
    pub odds_one_in: Option<u32>,
}

impl ProbabilityDescriptor {
    /// Text shown when there is no score to estimate from.
    pub const INSUFFICIENT_DATA_TEXT: &'static str = "Insufficient data";

    /// Descriptor for a missing score.
    #[must_use]
    pub const fn insufficient_data() -> Self {
        Self {
            band: None,
            text: Self::INSUFFICIENT_DATA_TEXT,
            detail: "",
            odds_one_in: None,
        }
    }

    /// Descriptor for a matched bucket.
    #[must_use]
    pub const fn for_band(band: ProbabilityBand) -> Self {
        Self {
            band: Some(band),
            text: band.text(),
            detail: band.detail(),
            odds_one_in: Some(band.odds_one_in()),
        }
    }
}
