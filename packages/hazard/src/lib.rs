#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Risk rating classification and annual probability estimates.
//!
//! Both lookups are pure table scans over the bands defined in
//! [`hazard_risk_hazard_models::band`]. [`report`] applies them to a fetched
//! county record to build the display model.

pub mod probability;
pub mod rating;
pub mod report;

pub use probability::estimate;
pub use rating::classify;
pub use report::{HazardReport, RatedScore, RiskReport};
