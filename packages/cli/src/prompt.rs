//! ZIP code prompt.

use dialoguer::Input;
use hazard_risk_lookup::zip::{INVALID_ZIP_MESSAGE, ZIP_LEN, sanitize_zip_input};

/// Prompts until the user enters something the input field would accept
/// unchanged, then returns the cleaned ZIP code.
///
/// Short or empty input is passed through so the lookup reports it.
pub fn read_zip() -> Result<String, dialoguer::Error> {
    let raw: String = Input::new()
        .with_prompt(format!("ZIP code ({ZIP_LEN} digits)"))
        .allow_empty(true)
        .validate_with(|input: &String| check_zip_input(input))
        .interact_text()?;

    Ok(sanitize_zip_input(&raw))
}

/// Rejects input that would be silently altered: non-digits or more than
/// [`ZIP_LEN`] digits.
fn check_zip_input(input: &str) -> Result<(), &'static str> {
    if sanitize_zip_input(input) == input.trim() {
        Ok(())
    } else {
        Err(INVALID_ZIP_MESSAGE)
    }
}
