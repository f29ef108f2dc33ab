#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod client;
pub mod command;
pub mod error;

pub use client::{DEFAULT_STOP_TOKEN, Toolkit};
pub use command::WorkflowCommand;
pub use error::ToolkitError;
mod file_annotations;
pub use file_annotations::{Annotation, AnnotationLevel};
mod input;
pub use input::{
    INPUT_PREFIX, get_bool_input, get_input, get_input_opt, get_multiline_input, input_env_key,
};
mod logger;
pub use logger::{LOG_GROUPING_TARGET, WorkflowLogger, end_log_group, start_log_group};
mod metadata;
#[cfg(feature = "event-payload")]
pub use metadata::EventPayload;
pub use metadata::{Metadata, get_metadata, is_debug};
mod output_variable;
pub use output_variable::OutputVariable;

// Everything below writes to stdout through a short-lived Toolkit.

/// Write an [`Annotation`] to stdout. See [`Toolkit::annotate()`].
pub fn annotate(annotation: &Annotation) -> Result<usize, ToolkitError> {
    Toolkit::stdout().annotate(annotation)
}

/// Write a debug-level message to stdout. See [`Toolkit::debug()`].
pub fn debug(message: &str) -> Result<usize, ToolkitError> {
    Toolkit::stdout().debug(message)
}

/// Write a warning-level message to stdout. See [`Toolkit::warning()`].
pub fn warning(message: &str) -> Result<usize, ToolkitError> {
    Toolkit::stdout().warning(message)
}

/// Write an error-level message to stdout. See [`Toolkit::error()`].
pub fn error(message: &str) -> Result<usize, ToolkitError> {
    Toolkit::stdout().error(message)
}

/// See [`Toolkit::set_env()`].
pub fn set_env(key: &str, value: &str) -> Result<usize, ToolkitError> {
    Toolkit::stdout().set_env(key, value)
}

/// See [`Toolkit::set_output()`].
pub fn set_output(name: &str, value: &str) -> Result<usize, ToolkitError> {
    Toolkit::stdout().set_output(name, value)
}

/// See [`Toolkit::prepend_path()`].
pub fn prepend_path(path: &str) -> Result<usize, ToolkitError> {
    Toolkit::stdout().prepend_path(path)
}

/// See [`Toolkit::set_secret()`].
pub fn set_secret(secret: &str) -> Result<usize, ToolkitError> {
    Toolkit::stdout().set_secret(secret)
}

/// See [`Toolkit::start_group()`].
pub fn start_group(name: &str) -> Result<usize, ToolkitError> {
    Toolkit::stdout().start_group(name)
}

/// See [`Toolkit::end_group()`].
pub fn end_group() -> Result<usize, ToolkitError> {
    Toolkit::stdout().end_group()
}

/// See [`Toolkit::stop_commands()`].
pub fn stop_commands(token: &str) -> Result<usize, ToolkitError> {
    Toolkit::stdout().stop_commands(token)
}

/// See [`Toolkit::resume_commands()`].
pub fn resume_commands(token: &str) -> Result<usize, ToolkitError> {
    Toolkit::stdout().resume_commands(token)
}
