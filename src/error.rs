//! Error types used across the workflow-commands crate.
use thiserror::Error;

/// The possible errors emitted by the workflow-commands API.
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// A required input was not supplied (or was only whitespace).
    ///
    /// The `name` is the input's name as requested by the caller,
    /// not the derived `INPUT_*` environment variable.
    #[error("Input {name} not supplied or empty string")]
    MissingInput { name: String },

    /// An input was supplied, but its value is not a YAML 1.2 "core schema" boolean.
    #[error("Input {name} does not meet YAML 1.2 \"Core Schema\" specification: {value}")]
    InvalidBoolInput { name: String, value: String },

    /// The process environment refused to set a variable.
    #[error("Failed to set env var '{name}': {reason}")]
    EnvVar { name: String, reason: String },

    /// Errors related to standard I/O.
    #[error("Failed to {task}: {source}")]
    Io {
        task: String,
        #[source]
        source: std::io::Error,
    },

    /// Error emitted when deserializing the event payload's JSON data.
    #[cfg(feature = "event-payload")]
    #[cfg_attr(docsrs, doc(cfg(feature = "event-payload")))]
    #[error("Failed to {task}: {source}")]
    Json {
        task: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ToolkitError {
    /// Helper function to create a [`Self::MissingInput`] error from the requested input name.
    pub fn missing_input(name: &str) -> Self {
        Self::MissingInput {
            name: name.to_string(),
        }
    }

    /// Helper function to create an [`Self::EnvVar`] error with variable name and reason.
    pub fn env_var(name: &str, reason: &str) -> Self {
        Self::EnvVar {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Helper function to create an [`Self::Io`] error with task context.
    pub fn io(task: &str, source: std::io::Error) -> Self {
        Self::Io {
            task: task.to_string(),
            source,
        }
    }

    /// Helper function to create a [`Self::Json`] error with task context.
    #[cfg(feature = "event-payload")]
    #[cfg_attr(docsrs, doc(cfg(feature = "event-payload")))]
    pub fn json(task: &str, source: serde_json::Error) -> Self {
        Self::Json {
            task: task.to_string(),
            source,
        }
    }
}
