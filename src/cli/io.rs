use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::errors::CliError;

/// Prompt the user for free-form text input.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CliError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()
        .map_err(CliError::from)
}

/// Prompt for text with a pre-filled default.
pub fn prompt_text_with_default(
    theme: &ColorfulTheme,
    prompt: &str,
    default: &str,
) -> Result<String, CliError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()
        .map_err(CliError::from)
}

/// Prompt for a number; blank or non-numeric input falls back to `default`.
pub fn prompt_amount(theme: &ColorfulTheme, prompt: &str, default: f64) -> Result<f64, CliError> {
    let raw = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(raw.trim().parse::<f64>().unwrap_or(default))
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm(theme: &ColorfulTheme, prompt: &str, default: bool) -> Result<bool, CliError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CliError::from)
}

/// Arrow-key selection over `items`; returns the chosen index.
pub fn select<T: ToString>(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[T],
) -> Result<usize, CliError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(CliError::from)
}
