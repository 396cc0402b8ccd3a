//! `wayfare signin`: prompt for credentials and validate them.
//!
//! Only the validation result is shown; the password is never echoed,
//! logged, or written anywhere.

use crate::{error::CliResult, output::OutputManager};

#[cfg(feature = "interactive")]
pub fn execute(output: OutputManager) -> CliResult<()> {
    use dialoguer::{Input, Password};
    use tracing::info;
    use wayfare_core::domain::validate_signin;

    use crate::error::CliError;

    let prompt_failed = |e: dialoguer::Error| CliError::InvalidInput {
        message: "could not read credentials from the terminal".into(),
        source: Some(Box::new(e)),
    };

    let username: String = Input::new()
        .with_prompt("Username")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_failed)?;
    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()
        .map_err(prompt_failed)?;

    let credentials = validate_signin(&serde_json::json!({
        "username": username,
        "password": password,
    }))?;

    info!(username = credentials.username(), "Credentials accepted");
    output.success(&format!(
        "Credentials for '{}' are well-formed",
        credentials.username()
    ))?;
    Ok(())
}

#[cfg(not(feature = "interactive"))]
pub fn execute(_output: OutputManager) -> CliResult<()> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
