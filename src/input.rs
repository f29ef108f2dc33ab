//! Reading an action's inputs.
//!
//! The runner host passes each input `with:` an action as an environment
//! variable named `INPUT_<NAME>`, where `<NAME>` is upper-cased and
//! spaces are replaced with underscores.
use std::env;

use crate::ToolkitError;

/// The prefix of every input's environment variable.
pub const INPUT_PREFIX: &str = "INPUT_";

/// Derive the environment variable that holds the input `name`.
///
/// ```
/// assert_eq!(workflow_commands::input_env_key("Test Input"), "INPUT_TEST_INPUT");
/// ```
pub fn input_env_key(name: &str) -> String {
    format!("{INPUT_PREFIX}{}", name.to_uppercase().replace(' ', "_"))
}

/// Get the trimmed value of an input, or [`None`] if it is empty or not supplied.
pub fn get_input_opt(name: &str) -> Option<String> {
    let key = input_env_key(name);
    let value = env::var(&key).unwrap_or_default();
    let value = value.trim();
    if value.is_empty() {
        log::debug!("Input {name} ({key}) is empty or not supplied");
        None
    } else {
        Some(value.to_string())
    }
}

/// Get the value of an input. The value is also trimmed.
///
/// Returns [`ToolkitError::MissingInput`] if the input was not supplied,
/// or if its value is empty after trimming whitespace.
pub fn get_input(name: &str) -> Result<String, ToolkitError> {
    get_input_opt(name).ok_or_else(|| ToolkitError::missing_input(name))
}

/// Get the value of an input as a boolean.
///
/// Only the values of the YAML 1.2 "core schema" are accepted:
/// `true | True | TRUE | false | False | FALSE`.
pub fn get_bool_input(name: &str) -> Result<bool, ToolkitError> {
    let value = get_input(name)?;
    match value.as_str() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        _ => Err(ToolkitError::InvalidBoolInput {
            name: name.to_string(),
            value,
        }),
    }
}

/// Get the value of an input as a list of its lines.
///
/// Each line is trimmed and blank lines are skipped.
pub fn get_multiline_input(name: &str) -> Result<Vec<String>, ToolkitError> {
    let value = get_input(name)?;
    Ok(value
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}
