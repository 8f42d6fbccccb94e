#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive ZIP code hazard risk lookup.
//!
//! Prompts for a ZIP code, resolves it to a county, and shows the county's
//! National Risk Index ratings. After each search the user can switch
//! between the results and methodology views, search again, or quit.
//!
//! Uses `indicatif-log-bridge` (via [`hazard_risk_cli_utils::init_logger`])
//! to route `log` output through `indicatif::MultiProgress` so that log
//! lines and the lookup spinner never fight for the terminal.

mod prompt;
mod render;
mod view;

use dialoguer::Select;
use hazard_risk_cli_utils::LookupSpinner;
use hazard_risk_lookup::{LookupResult, LookupState, RiskLookupOrchestrator};

use crate::view::View;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = hazard_risk_cli_utils::init_logger();

    let orchestrator =
        RiskLookupOrchestrator::from_env()?.with_progress(LookupSpinner::new(&multi));

    println!("Hazard Risk Lookup");
    println!();

    loop {
        let zip = prompt::read_zip()?;

        let state = orchestrator.submit(&zip).await?;
        println!();

        if !browse(&state)? {
            break;
        }
        println!();
    }

    Ok(())
}

/// Shows the outcome of a finished session and runs the view menu.
///
/// Returns `false` when the user chose to quit.
fn browse(state: &LookupState) -> Result<bool, dialoguer::Error> {
    let report = state.result().map(LookupResult::report);

    if !state.is_terminal() {
        log::warn!("Lookup ended in non-terminal state: {state}");
    }
    if let Some(report) = &report {
        println!("{}", render::render_report(report));
    } else if let Some(err) = state.error() {
        println!("{}", render::render_error(err));
    }

    let views = View::available(report.is_some());
    let labels: Vec<&str> = views.iter().map(|view| view.label()).collect();

    loop {
        println!();
        let idx = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match views[idx] {
            View::Results => {
                if let Some(report) = &report {
                    println!("{}", render::render_report(report));
                }
            }
            View::Methodology => println!("{}", render::render_methodology()),
            View::NewSearch => return Ok(true),
            View::Quit => return Ok(false),
        }
    }
}
