//! The serialization of workflow commands.
//!
//! A workflow command is a single line of stdout that the runner host
//! interprets instead of printing:
//!
//! ```text
//! ::command-name key=value,key2=value2::message
//! ```
use std::fmt::Display;

/// The delimiter used both as command prefix and as message separator.
pub const COMMAND_KEY: &str = "::";

struct EscapeMapping {
    token: &'static str,
    replacement: &'static str,
}

/// Line breaks in a message would otherwise be seen as the end of the command.
const ESCAPE_MESSAGE_MAPPINGS: &[EscapeMapping] = &[
    EscapeMapping {
        token: "\r",
        replacement: "%0D",
    },
    EscapeMapping {
        token: "\n",
        replacement: "%0A",
    },
];

/// Escape carriage returns and line feeds in an annotation's message.
///
/// Only annotation messages are escaped.
/// Other commands' payloads are written verbatim.
pub fn escape_message(message: &str) -> String {
    let mut escaped = message.to_string();
    for mapping in ESCAPE_MESSAGE_MAPPINGS {
        escaped = escaped.replace(mapping.token, mapping.replacement);
    }
    escaped
}

/// A single workflow command, ready to be written as one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowCommand {
    /// The command's name (eg. `set-output`).
    pub name: String,

    /// Ordered `key=value` parameters.
    pub params: Vec<(String, String)>,

    /// The message that follows the second `::`.
    ///
    /// [`None`] omits the message section entirely (eg. `::endgroup`),
    /// whereas an empty string still renders the trailing `::`.
    pub message: Option<String>,
}

impl WorkflowCommand {
    /// Create a command with no parameters and no message section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: vec![],
            message: None,
        }
    }

    /// Append a `key=value` parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Set the message section.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Display for WorkflowCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{COMMAND_KEY}{}", self.name)?;
        if !self.params.is_empty() {
            let params = self
                .params
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(",");
            write!(f, " {params}")?;
        }
        if let Some(message) = &self.message {
            write!(f, "{COMMAND_KEY}{message}")?;
        }
        Ok(())
    }
}
