//! A [`log`] implementation that speaks workflow commands.
use std::io::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::{Annotation, command::WorkflowCommand};

/// The log target whose records are printed verbatim.
///
/// Records with this target are not wrapped in a workflow command,
/// so they can carry group markers (see [`start_log_group()`]).
pub const LOG_GROUPING_TARGET: &str = "CI_LOG_GROUPING";

/// A logger that prints [`log`] records to stdout as workflow commands.
///
/// | [`Level`] | output |
/// |---|---|
/// | `Error` | `::error::<message>` |
/// | `Warn` | `::warning::<message>` |
/// | `Info` | `<message>` |
/// | `Debug`, `Trace` | `::debug::<message>` |
///
/// Messages of annotations get their line breaks escaped.
///
/// ```no_run
/// use workflow_commands::WorkflowLogger;
///
/// WorkflowLogger::init(log::LevelFilter::Debug).unwrap();
/// log::warn!("this shows up as a warning annotation");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkflowLogger;

static LOGGER: WorkflowLogger = WorkflowLogger;

impl WorkflowLogger {
    /// Install the [`WorkflowLogger`] as the global logger.
    ///
    /// Fails if a logger was already installed.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(level);
        Ok(())
    }

    /// Render a record as the line that [`Log::log()`] prints.
    pub fn render(record: &Record) -> String {
        let message = record.args().to_string();
        if record.target() == LOG_GROUPING_TARGET {
            return message;
        }
        match record.level() {
            Level::Error => Annotation::error(message).to_string(),
            Level::Warn => Annotation::warning(message).to_string(),
            Level::Info => message,
            Level::Debug | Level::Trace => Annotation::debug(message).to_string(),
        }
    }
}

impl Log for WorkflowLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut handle = io::stdout().lock();
        // `Log::log()` has no way to report a failed write
        let _ = writeln!(handle, "{}", Self::render(record));
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

/// Log the beginning of a related group of log statements.
///
/// This goes through [`log`] (at info level) rather than straight to stdout,
/// so the marker stays in order with the app's other log output.
pub fn start_log_group(name: &str) {
    log::info!(
        target: LOG_GROUPING_TARGET,
        "{}",
        WorkflowCommand::new("group").param("name", name)
    );
}

/// Log the ending of a related group of log statements.
///
/// See also [`start_log_group()`].
pub fn end_log_group() {
    log::info!(target: LOG_GROUPING_TARGET, "{}", WorkflowCommand::new("endgroup"));
}
