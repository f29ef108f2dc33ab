use std::{fmt::Display, num::NonZeroU32};

use serde::Serialize;

use crate::command::{WorkflowCommand, escape_message};

/// The severity of an [`Annotation`].
///
/// The variant also names the workflow command used to emit the annotation.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationLevel {
    /// Only shown in the log when step debugging is enabled.
    #[default]
    Debug,
    /// Shown in the log and in the workflow run's summary.
    Warning,
    /// Shown in the log and in the workflow run's summary; does not fail the step.
    Error,
}

impl AnnotationLevel {
    /// The workflow command name for this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationLevel::Debug => "debug",
            AnnotationLevel::Warning => "warning",
            AnnotationLevel::Error => "error",
        }
    }
}

impl Display for AnnotationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structure to describe a log entry, optionally pinned to a location in a file.
///
/// ```
/// use workflow_commands::Annotation;
///
/// let annotation = Annotation::debug("hi").file("/a/b").line(5).col(4);
/// assert_eq!(annotation.to_string(), "::debug file=/a/b,line=5,col=4::hi");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// The severity level of the annotation.
    pub level: AnnotationLevel,

    /// The message of the annotation.
    ///
    /// Line breaks are allowed; they get escaped when the annotation is rendered.
    pub message: String,

    /// The path to the file being annotated.
    ///
    /// An empty path means the annotation is not specific to a file.
    pub file: String,

    /// The line number being annotated (1-based).
    pub line: Option<NonZeroU32>,

    /// The column number being annotated (1-based).
    pub col: Option<NonZeroU32>,
}

impl Annotation {
    fn with_level(level: AnnotationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            ..Default::default()
        }
    }

    /// Creates a new debug-level annotation.
    pub fn debug(message: impl Into<String>) -> Self {
        Self::with_level(AnnotationLevel::Debug, message)
    }

    /// Creates a new warning-level annotation.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(AnnotationLevel::Warning, message)
    }

    /// Creates a new error-level annotation.
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(AnnotationLevel::Error, message)
    }

    /// Set the annotated file's path.
    pub fn file(mut self, path: impl Into<String>) -> Self {
        self.file = path.into();
        self
    }

    /// Set the annotated line number.
    ///
    /// Lines are 1-indexed, so a `line` of 0 leaves the line unset.
    pub fn line(mut self, line: u32) -> Self {
        self.line = NonZeroU32::new(line);
        self
    }

    /// Set the annotated column number.
    ///
    /// Columns are 1-indexed, so a `col` of 0 leaves the column unset.
    pub fn col(mut self, col: u32) -> Self {
        self.col = NonZeroU32::new(col);
        self
    }

    /// Convert this annotation into the workflow command that emits it.
    pub fn to_command(&self) -> WorkflowCommand {
        let mut cmd = WorkflowCommand::new(self.level.as_str());
        if !self.file.is_empty() {
            cmd = cmd.param("file", &self.file);
        }
        if let Some(line) = self.line {
            cmd = cmd.param("line", line);
        }
        if let Some(col) = self.col {
            cmd = cmd.param("col", col);
        }
        cmd.message(escape_message(&self.message))
    }
}

impl Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_command().fmt(f)
    }
}
