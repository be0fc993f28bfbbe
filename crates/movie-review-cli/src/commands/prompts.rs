use crate::output::Output;
use color_eyre::Result;
use dialoguer::{Confirm, Input, Select};

/// Prompt for a string value with optional default; empty input is allowed
pub fn prompt_string(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_builder = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true);

    if let Some(default_value) = default {
        input_builder = input_builder.default(default_value.to_string());
    }

    input_builder.interact().map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Prompt for an optional field; blank input means "leave unchanged"
pub fn prompt_optional_string(prompt: &str) -> Result<Option<String>> {
    let value = prompt_string(prompt, None)?;
    Ok(crate::forms::non_empty(Some(value)))
}

/// Prompt for yes/no with optional default
pub fn prompt_yes_no(prompt: &str, default: Option<bool>) -> Result<bool> {
    let mut confirm_builder = Confirm::new().with_prompt(prompt);

    if let Some(default_value) = default {
        confirm_builder = confirm_builder.default(default_value);
    }

    confirm_builder
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read confirmation: {}", e))
}

/// Pick one entry from a list, returning its index
pub fn prompt_select<T: ToString>(prompt: &str, items: &[T], default: usize) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))
}

/// Prompt until `parse` accepts the input; blank input takes the default when there is one
pub fn prompt_parsed<T>(
    prompt: &str,
    default: Option<&str>,
    parse: impl Fn(&str) -> std::result::Result<T, String>,
    output: &Output,
) -> Result<T> {
    loop {
        let input_str = prompt_string(prompt, default)?;
        let trimmed = input_str.trim();

        let candidate = match (trimmed.is_empty(), default) {
            (true, Some(default_value)) => default_value,
            (true, None) => {
                output.error("A value is required.");
                continue;
            }
            (false, _) => trimmed,
        };

        match parse(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => output.error(e),
        }
    }
}

/// Like [`prompt_parsed`] but blank input yields `None`
pub fn prompt_optional_parsed<T>(
    prompt: &str,
    parse: impl Fn(&str) -> std::result::Result<T, String>,
    output: &Output,
) -> Result<Option<T>> {
    loop {
        let input_str = prompt_string(prompt, None)?;
        let trimmed = input_str.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        match parse(trimmed) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => output.error(e),
        }
    }
}
