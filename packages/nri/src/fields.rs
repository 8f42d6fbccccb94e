//! Attribute names requested from the hazard index.

use hazard_risk_hazard_models::HazardType;

/// County name attribute.
pub const COUNTY: &str = "county";
/// State name attribute.
pub const STATE: &str = "state";

/// Per-hazard relative risk score suffix.
pub const RISK_SCORE_SUFFIX: &str = "RISKS";
/// Per-hazard risk rating suffix.
pub const RISK_RATING_SUFFIX: &str = "RISKR";
/// Per-hazard expected annual loss score suffix.
pub const EAL_SCORE_SUFFIX: &str = "EALS";
/// Per-hazard expected annual loss rating suffix.
pub const EAL_RATING_SUFFIX: &str = "EALR";

const HAZARD_SUFFIXES: &[&str] = &[
    RISK_SCORE_SUFFIX,
    RISK_RATING_SUFFIX,
    EAL_SCORE_SUFFIX,
    EAL_RATING_SUFFIX,
];

// Composite county-wide attributes.

/// Overall risk score.
pub const RISK_SCORE: &str = "RISK_SCORE";
/// Overall risk rating.
pub const RISK_RATING: &str = "RISK_RATNG";
/// Expected annual loss score.
pub const EAL_SCORE: &str = "EAL_SCORE";
/// Expected annual loss rating.
pub const EAL_RATING: &str = "EAL_RATNG";
/// Social vulnerability score.
pub const SOVI_SCORE: &str = "SOVI_SCORE";
/// Social vulnerability rating.
pub const SOVI_RATING: &str = "SOVI_RATNG";
/// Community resilience score.
pub const RESL_SCORE: &str = "RESL_SCORE";
/// Community resilience rating.
pub const RESL_RATING: &str = "RESL_RATNG";

const COMPOSITE: &[&str] = &[
    RISK_SCORE,
    RISK_RATING,
    EAL_SCORE,
    EAL_RATING,
    SOVI_SCORE,
    SOVI_RATING,
    RESL_SCORE,
    RESL_RATING,
];

/// Attribute name for one hazard field, e.g. `ERQK_RISKS`.
#[must_use]
pub fn hazard_field(hazard: HazardType, suffix: &str) -> String {
    format!("{}_{suffix}", hazard.code())
}

/// Every attribute the query selects: four per hazard, the composite
/// scores, and the county and state names.
#[must_use]
pub fn out_fields() -> Vec<String> {
    let mut fields: Vec<String> = HazardType::ALL
        .iter()
        .flat_map(|&hazard| {
            HAZARD_SUFFIXES
                .iter()
                .map(move |suffix| hazard_field(hazard, suffix))
        })
        .collect();
    fields.extend(COMPOSITE.iter().map(|f| (*f).to_string()));
    fields.push(COUNTY.to_string());
    fields.push(STATE.to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_every_hazard_and_composite_field() {
        let fields = out_fields();
        assert_eq!(fields.len(), HazardType::ALL.len() * 4 + COMPOSITE.len() + 2);
        for expected in [
            "ERQK_RISKS",
            "HRCN_RISKR",
            "TRND_EALS",
            "RFLD_EALR",
            "WFIR_RISKS",
            "RISK_SCORE",
            "RESL_RATNG",
            "county",
            "state",
        ] {
            assert!(fields.iter().any(|f| f == expected), "missing {expected}");
        }
    }

    #[test]
    fn fields_are_unique() {
        let fields = out_fields();
        let unique: std::collections::BTreeSet<_> = fields.iter().collect();
        assert_eq!(unique.len(), fields.len());
    }
}
