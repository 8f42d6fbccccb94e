//! Plain-text rendering of the results and methodology views.

use console::style;
use hazard_risk_cli_utils::styled_band;
use hazard_risk_hazard::{HazardReport, RatedScore, RiskReport};
use hazard_risk_hazard_models::{HazardType, ProbabilityBand, ProbabilityDescriptor, RatingBand};
use hazard_risk_lookup::LookupError;

const LABEL_WIDTH: usize = 22;

/// Renders the results view for one county.
pub fn render_report(report: &RiskReport) -> String {
    let location = &report.location;
    let mut lines = vec![
        style(location.display_name()).bold().to_string(),
        format!(
            "  FIPS {}{}  ({:.4}, {:.4})",
            location.fips,
            location
                .fips
                .state_abbr()
                .map_or_else(String::new, |abbr| format!(" [{abbr}]")),
            location.latitude,
            location.longitude
        ),
        format!("  Matched: {}", location.matched_address),
        String::new(),
        rated_line("Overall risk", &report.overall),
        format!(
            "  {:<LABEL_WIDTH$}{}",
            "Annual probability",
            probability_text(&report.overall_probability)
        ),
        rated_line("Expected annual loss", &report.expected_annual_loss),
        rated_line("Social vulnerability", &report.social_vulnerability),
        rated_line("Community resilience", &report.community_resilience),
    ];

    if let Some(highest) = report.highest_hazard() {
        lines.push(String::new());
        lines.push(format!(
            "Highest hazard: {}",
            style(highest.hazard.label()).bold()
        ));
    }

    for hazard in &report.hazards {
        lines.push(String::new());
        lines.extend(hazard_lines(hazard));
    }

    lines.join("\n")
}

fn hazard_lines(hazard: &HazardReport) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} {}",
            style(hazard.hazard.label()).bold().underlined(),
            style(format!("({})", hazard.hazard.code())).dim()
        ),
        rated_line("Risk", &hazard.risk),
        rated_line("Expected annual loss", &hazard.expected_annual_loss),
        format!(
            "  {:<LABEL_WIDTH$}{}",
            "Annual probability",
            probability_text(&hazard.probability)
        ),
    ];
    if !hazard.probability.detail.is_empty() {
        lines.push(format!(
            "  {:<LABEL_WIDTH$}{}",
            "",
            style(hazard.probability.detail).dim()
        ));
    }
    lines
}

fn rated_line(label: &str, rated: &RatedScore) -> String {
    let score = rated
        .score
        .map_or_else(|| "n/a".to_string(), |score| score.to_string());
    let line = format!(
        "  {label:<LABEL_WIDTH$}{}  {score}",
        styled_band(rated.band, rated.label())
    );
    match rated.differing_published_rating() {
        Some(published) => {
            let published = style(format!("(index: {published})")).dim();
            format!("{line}  {published}")
        }
        None => line,
    }
}

fn probability_text(probability: &ProbabilityDescriptor) -> String {
    probability.odds_one_in.map_or_else(
        || probability.text.to_string(),
        |odds| format!("{}  (about 1 in {odds})", probability.text),
    )
}

/// Renders the methodology view.
pub fn render_methodology() -> String {
    let mut lines = vec![
        style("How ratings are assigned").bold().to_string(),
        "Scores come from the FEMA National Risk Index and are percentiles from 0 to 100"
            .to_string(),
        "relative to every other county in the nation.".to_string(),
        String::new(),
    ];

    for &band in RatingBand::TIERS {
        lines.push(format!(
            "  {:<LABEL_WIDTH$}{}",
            band_range(band),
            styled_band(band, band.label())
        ));
    }
    lines.push(format!(
        "  {:<LABEL_WIDTH$}{}",
        "missing",
        styled_band(RatingBand::NoData, RatingBand::NoData.label())
    ));

    lines.push(String::new());
    lines.push(style("Approximate annual probability").bold().to_string());
    lines.push(
        "These ranges are a fixed display heuristic keyed on the risk score. They are not"
            .to_string(),
    );
    lines.push("statistically derived and should not be read as forecasts.".to_string());
    lines.push(String::new());

    let mut lower = 0.0;
    for &band in ProbabilityBand::ALL {
        let range = band.upper_bound().map_or_else(
            || format!("above {lower:.0}"),
            |upper| format!("{lower:.0}-{upper:.0}"),
        );
        lines.push(format!("  {range:<LABEL_WIDTH$}{}", band.text()));
        lower = band.upper_bound().unwrap_or(lower);
    }

    lines.push(String::new());
    lines.push(style("Hazards").bold().to_string());
    for &hazard in HazardType::ALL {
        lines.extend(hazard_methodology(hazard));
    }

    lines.join("\n")
}

fn band_range(band: RatingBand) -> String {
    match (band.lower_bound(), band.upper_bound()) {
        (None, Some(upper)) => format!("0-{upper:.0}"),
        (Some(lower), Some(upper)) => format!("{lower:.0}-{upper:.0}"),
        _ => String::new(),
    }
}

fn hazard_methodology(hazard: HazardType) -> Vec<String> {
    vec![
        String::new(),
        format!("  {}", style(hazard.label()).bold()),
        format!("  {}", hazard.description()),
        format!("  Drivers: {}", hazard.drivers().join(", ")),
    ]
}

/// Renders a failed lookup. The message is shown exactly as reported.
pub fn render_error(err: &LookupError) -> String {
    style(err.to_string()).red().to_string()
}

#[cfg(test)]
mod tests {
    use hazard_risk_geography_models::{CountyFips, CountyLocation};
    use hazard_risk_hazard_models::{CountyRiskRecord, HazardScores, RiskScore};

    use super::*;

    fn report() -> RiskReport {
        let mut record = CountyRiskRecord::default();
        record.hazards.insert(
            HazardType::Earthquake,
            HazardScores {
                risk_score: RiskScore::new(42.3),
                risk_rating: Some("Relatively Moderate".to_string()),
                ..HazardScores::default()
            },
        );
        let location = CountyLocation {
            fips: CountyFips::parse("06037").unwrap(),
            county_name: "Los Angeles County".to_string(),
            state_name: "CA".to_string(),
            longitude: -118.406_26,
            latitude: 34.090_01,
            matched_address: "BEVERLY HILLS, CA, 90210".to_string(),
        };
        RiskReport::build(location, &record)
    }

    #[test]
    fn report_shows_location_and_hazards() {
        let text = render_report(&report());
        assert!(text.contains("Los Angeles County, CA"));
        assert!(text.contains("FIPS 06037 [CA]"));
        assert!(text.contains("(34.0900, -118.4063)"));
        assert!(text.contains("BEVERLY HILLS, CA, 90210"));
        for hazard in HazardType::ALL {
            assert!(text.contains(hazard.label()), "missing {hazard:?}");
        }
    }

    #[test]
    fn report_shows_band_score_and_probability() {
        let text = render_report(&report());
        assert!(text.contains(" Relatively Moderate "));
        assert!(text.contains("42.30"));
        assert!(text.contains("~2–5%  (about 1 in 30)"));
        assert!(text.contains("Highest hazard:"));
    }

    #[test]
    fn missing_scores_render_as_no_data() {
        let text = render_report(&report());
        assert!(text.contains(" No Data "));
        assert!(text.contains("n/a"));
        assert!(text.contains("Insufficient data"));
    }

    #[test]
    fn band_label_matches_color_and_published_rating_is_separate() {
        let mut record = CountyRiskRecord::default();
        record.hazards.insert(
            HazardType::Tornado,
            HazardScores {
                risk_score: RiskScore::new(42.3),
                risk_rating: Some("Very High".to_string()),
                ..HazardScores::default()
            },
        );
        let report = RiskReport::build(report().location, &record);
        let tornado = report.hazard(HazardType::Tornado).unwrap();

        let line = rated_line("Risk", &tornado.risk);
        assert!(line.contains(" Relatively Moderate "));
        assert!(!line.contains(" Very High "));
        assert!(line.contains("(index: Very High)"));
    }

    #[test]
    fn methodology_lists_bands_and_disclaimer() {
        let text = render_methodology();
        assert!(text.contains("70-100"));
        assert!(text.contains(" Very High "));
        assert!(text.contains("not\nstatistically derived"));
        assert!(text.contains("above 85"));
        assert!(text.contains("> 30%"));
        for hazard in HazardType::ALL {
            assert!(text.contains(hazard.description()));
        }
    }

    #[test]
    fn error_message_is_verbatim() {
        let err = LookupError::InputValidation {
            message: "Please enter a valid 5-digit ZIP code".to_string(),
        };
        assert!(render_error(&err).contains("Please enter a valid 5-digit ZIP code"));
    }
}
