//! FIPS code utilities.
//!
//! A county FIPS code is five ASCII digits: a two-digit state code followed
//! by a three-digit county code. Also maps state codes to postal
//! abbreviations and names for the 50 states, DC, and the inhabited
//! territories covered by the hazard index.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `(state FIPS, postal abbreviation, state name)` for every known state
/// or territory.
const STATES: &[(&str, &str, &str)] = &[
    ("01", "AL", "Alabama"),
    ("02", "AK", "Alaska"),
    ("04", "AZ", "Arizona"),
    ("05", "AR", "Arkansas"),
    ("06", "CA", "California"),
    ("08", "CO", "Colorado"),
    ("09", "CT", "Connecticut"),
    ("10", "DE", "Delaware"),
    ("11", "DC", "District of Columbia"),
    ("12", "FL", "Florida"),
    ("13", "GA", "Georgia"),
    ("15", "HI", "Hawaii"),
    ("16", "ID", "Idaho"),
    ("17", "IL", "Illinois"),
    ("18", "IN", "Indiana"),
    ("19", "IA", "Iowa"),
    ("20", "KS", "Kansas"),
    ("21", "KY", "Kentucky"),
    ("22", "LA", "Louisiana"),
    ("23", "ME", "Maine"),
    ("24", "MD", "Maryland"),
    ("25", "MA", "Massachusetts"),
    ("26", "MI", "Michigan"),
    ("27", "MN", "Minnesota"),
    ("28", "MS", "Mississippi"),
    ("29", "MO", "Missouri"),
    ("30", "MT", "Montana"),
    ("31", "NE", "Nebraska"),
    ("32", "NV", "Nevada"),
    ("33", "NH", "New Hampshire"),
    ("34", "NJ", "New Jersey"),
    ("35", "NM", "New Mexico"),
    ("36", "NY", "New York"),
    ("37", "NC", "North Carolina"),
    ("38", "ND", "North Dakota"),
    ("39", "OH", "Ohio"),
    ("40", "OK", "Oklahoma"),
    ("41", "OR", "Oregon"),
    ("42", "PA", "Pennsylvania"),
    ("44", "RI", "Rhode Island"),
    ("45", "SC", "South Carolina"),
    ("46", "SD", "South Dakota"),
    ("47", "TN", "Tennessee"),
    ("48", "TX", "Texas"),
    ("49", "UT", "Utah"),
    ("50", "VT", "Vermont"),
    ("51", "VA", "Virginia"),
    ("53", "WA", "Washington"),
    ("54", "WV", "West Virginia"),
    ("55", "WI", "Wisconsin"),
    ("56", "WY", "Wyoming"),
    ("60", "AS", "American Samoa"),
    ("66", "GU", "Guam"),
    ("69", "MP", "Northern Mariana Islands"),
    ("72", "PR", "Puerto Rico"),
    ("78", "VI", "U.S. Virgin Islands"),
];

fn find_state(state_fips: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    STATES.iter().find(|(fips, _, _)| *fips == state_fips)
}

/// Maps a two-digit state FIPS code to its postal abbreviation.
#[must_use]
pub fn state_abbr(state_fips: &str) -> Option<&'static str> {
    find_state(state_fips).map(|(_, abbr, _)| *abbr)
}

/// Maps a two-digit state FIPS code to the full state or territory name.
#[must_use]
pub fn state_name(state_fips: &str) -> Option<&'static str> {
    find_state(state_fips).map(|(_, _, name)| *name)
}

/// Error returned when a string is not a well-formed county FIPS code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid county FIPS code '{value}': expected 5 digits")]
pub struct InvalidFipsError {
    /// The rejected input.
    pub value: String,
}

/// A validated five-digit county FIPS code (e.g. `"06037"` for Los Angeles
/// County, California).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountyFips(String);

impl CountyFips {
    /// Parses a five-digit county FIPS code.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFipsError`] unless `value` is exactly five ASCII
    /// digits.
    pub fn parse(value: &str) -> Result<Self, InvalidFipsError> {
        if value.len() == 5 && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(value.to_string()))
        } else {
            Err(InvalidFipsError {
                value: value.to_string(),
            })
        }
    }

    /// Builds a county FIPS code from its state and county parts, left
    /// padding each with zeros (`"6"` + `"37"` becomes `"06037"`).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFipsError`] if either part is non-numeric or too
    /// long.
    pub fn from_parts(state: &str, county: &str) -> Result<Self, InvalidFipsError> {
        let state = state.trim();
        let county = county.trim();
        if state.is_empty() || state.len() > 2 || county.is_empty() || county.len() > 3 {
            return Err(InvalidFipsError {
                value: format!("{state}{county}"),
            });
        }
        Self::parse(&format!("{state:0>2}{county:0>3}"))
    }

    /// Two-digit state portion.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.0[..2]
    }

    /// Three-digit county portion.
    #[must_use]
    pub fn county(&self) -> &str {
        &self.0[2..]
    }

    /// Postal abbreviation of the state portion, if it is a known state or
    /// territory.
    #[must_use]
    pub fn state_abbr(&self) -> Option<&'static str> {
        state_abbr(self.state())
    }

    /// The full five-digit code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountyFips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CountyFips {
    type Error = InvalidFipsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountyFips> for String {
    fn from(value: CountyFips) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_state_and_county() {
        let fips = CountyFips::parse("06037").unwrap();
        assert_eq!(fips.state(), "06");
        assert_eq!(fips.county(), "037");
        assert_eq!(fips.to_string(), "06037");
    }

    #[test]
    fn rejects_malformed_codes() {
        for bad in ["", "6037", "060370", "06O37", "abcde", "０6037"] {
            assert!(CountyFips::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn from_parts_pads_with_zeros() {
        assert_eq!(CountyFips::from_parts("6", "37").unwrap().as_str(), "06037");
        assert_eq!(CountyFips::from_parts("11", "001").unwrap().as_str(), "11001");
        assert!(CountyFips::from_parts("", "001").is_err());
        assert!(CountyFips::from_parts("123", "001").is_err());
        assert!(CountyFips::from_parts("06", "x1").is_err());
    }

    #[test]
    fn deserialize_validates() {
        let ok: CountyFips = serde_json::from_str("\"48201\"").unwrap();
        assert_eq!(ok.county(), "201");
        assert!(serde_json::from_str::<CountyFips>("\"4820\"").is_err());
    }

    #[test]
    fn state_codes_are_unique_and_named() {
        let mut seen = std::collections::BTreeSet::new();
        for (fips, abbr, name) in STATES {
            assert!(seen.insert(*fips), "duplicate state FIPS {fips}");
            assert_eq!(fips.len(), 2);
            assert_eq!(abbr.len(), 2);
            assert!(!name.is_empty());
        }
        assert_eq!(state_abbr("06"), Some("CA"));
        assert_eq!(state_name("72"), Some("Puerto Rico"));
    }

    #[test]
    fn county_code_knows_its_state() {
        assert_eq!(CountyFips::parse("06037").unwrap().state_abbr(), Some("CA"));
        assert_eq!(CountyFips::parse("72127").unwrap().state_abbr(), Some("PR"));
        assert_eq!(CountyFips::parse("99001").unwrap().state_abbr(), None);
    }

    #[test]
    fn unknown_state_fips() {
        assert_eq!(state_abbr("99"), None);
        assert_eq!(state_name("03"), None);
    }
}
