use std::fmt::Display;

use crate::command::WorkflowCommand;

/// A type to represent a step's output variable.
///
/// Output variables are declared in an action's metadata file.
/// The runner host rejects values for undeclared outputs; this crate does not check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputVariable {
    /// The output variable's name.
    pub name: String,

    /// The output variable's value.
    ///
    /// This is written verbatim (not escaped).
    pub value: String,
}

impl OutputVariable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Convert this variable into the `set-output` workflow command.
    pub fn to_command(&self) -> WorkflowCommand {
        WorkflowCommand::new("set-output")
            .param("name", &self.name)
            .message(self.value.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for OutputVariable {
    fn from((name, value): (K, V)) -> Self {
        Self::new(name, value)
    }
}

impl Display for OutputVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_command().fmt(f)
    }
}
