//! The [`Toolkit`] client that writes workflow commands to an output sink.
use std::{
    env,
    ffi::{OsStr, OsString},
    io::{self, Stdout, Write},
};

use crate::{Annotation, OutputVariable, ToolkitError, command::WorkflowCommand};

/// A string that can be used as the token of [`Toolkit::stop_commands()`].
///
/// This is generated from the crate's name and version along with the compile-time's datetime.
/// For example:
///
/// ```text
/// workflow_commands/0.1.0/Jul-14-2025_17-00
/// ```
pub static DEFAULT_STOP_TOKEN: &str = concat!(
    env!("CARGO_CRATE_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    "/",
    env!("COMPILE_DATETIME")
);

/// The separator between entries of the `PATH` variable.
const PATH_LIST_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// A client that emits workflow commands.
///
/// Every command is written as one line to the held sink (stdout by default)
/// and flushed immediately.
/// Each emitting method returns the number of bytes written, including the trailing newline.
///
/// ```
/// use workflow_commands::Toolkit;
///
/// let mut toolkit = Toolkit::new(Vec::new());
/// toolkit.set_output("k", "v").unwrap();
/// assert_eq!(toolkit.into_inner(), b"::set-output name=k::v\n");
/// ```
#[derive(Debug)]
pub struct Toolkit<W: Write = Stdout> {
    out: W,
}

impl Toolkit<Stdout> {
    /// Instantiate a [`Toolkit`] that writes to the process' stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for Toolkit<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> Toolkit<W> {
    /// Instantiate a [`Toolkit`] that writes to the given sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Get a reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the [`Toolkit`] and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write a single workflow command.
    ///
    /// Nothing is retried; a failed write is returned as [`ToolkitError::Io`].
    pub fn issue(&mut self, command: &WorkflowCommand) -> Result<usize, ToolkitError> {
        let line = format!("{command}\n");
        self.out
            .write_all(line.as_bytes())
            .map_err(|e| ToolkitError::io("write workflow command", e))?;
        self.out
            .flush()
            .map_err(|e| ToolkitError::io("flush workflow command", e))?;
        Ok(line.len())
    }

    /// Write an [`Annotation`] to the log.
    ///
    /// If the annotation has a file (and line/col) set,
    /// the runner host also shows it on that location in the workflow's summary.
    pub fn annotate(&mut self, annotation: &Annotation) -> Result<usize, ToolkitError> {
        self.issue(&annotation.to_command())
    }

    /// Write a debug-level message. Only visible if step debugging is enabled.
    pub fn debug(&mut self, message: &str) -> Result<usize, ToolkitError> {
        self.annotate(&Annotation::debug(message))
    }

    /// Write a warning-level message.
    pub fn warning(&mut self, message: &str) -> Result<usize, ToolkitError> {
        self.annotate(&Annotation::warning(message))
    }

    /// Write an error-level message.
    pub fn error(&mut self, message: &str) -> Result<usize, ToolkitError> {
        self.annotate(&Annotation::error(message))
    }

    /// Create or update an environment variable for any actions running next in a job.
    ///
    /// The variable is also set in the current process (and so inherited by
    /// child processes spawned afterward). Per the runner host's contract,
    /// the action that sets the variable does not see the new value;
    /// all subsequent actions in the job will.
    /// Environment variables are case-sensitive and may include punctuation.
    ///
    /// # Thread safety
    ///
    /// This mutates the process-wide environment.
    /// Callers must ensure no other thread reads or writes the environment concurrently.
    pub fn set_env(&mut self, key: &str, value: &str) -> Result<usize, ToolkitError> {
        set_process_env(key, value)?;
        self.issue(
            &WorkflowCommand::new("set-env")
                .param("name", key)
                .message(value),
        )
    }

    /// Set an action's output parameter.
    ///
    /// Output parameters are defined in an action's metadata file.
    /// The runner host reports an error for outputs that were not declared there.
    pub fn set_output(&mut self, name: &str, value: &str) -> Result<usize, ToolkitError> {
        self.issue(&OutputVariable::new(name, value).to_command())
    }

    /// Set the given `vars` as output parameters, in order.
    ///
    /// Returns the total number of bytes written.
    /// Stops at (and returns) the first failure.
    pub fn set_outputs(&mut self, vars: &[OutputVariable]) -> Result<usize, ToolkitError> {
        let mut written = 0;
        for var in vars {
            written += self.issue(&var.to_command())?;
        }
        Ok(written)
    }

    /// Prepend a directory to the `PATH` variable for all subsequent actions in the current job.
    ///
    /// The current process' `PATH` is updated immediately by prefixing `path` and the
    /// platform's list separator to the old value (an unset `PATH` counts as empty).
    /// `path` is not checked; it may itself contain separators.
    /// If setting `PATH` fails, no workflow command is written.
    ///
    /// # Thread safety
    ///
    /// See [`Toolkit::set_env()`].
    pub fn prepend_path(&mut self, path: &str) -> Result<usize, ToolkitError> {
        let mut joined = OsString::from(path);
        joined.push(PATH_LIST_SEPARATOR);
        joined.push(env::var_os("PATH").unwrap_or_default());
        log::debug!("Prepending {path} to PATH");
        set_process_env("PATH", &joined)?;
        self.issue(&WorkflowCommand::new("add-path").message(path))
    }

    /// Register a secret which will get masked from logs.
    pub fn set_secret(&mut self, secret: &str) -> Result<usize, ToolkitError> {
        self.issue(&WorkflowCommand::new("add-mask").message(secret))
    }

    /// Start an output group.
    ///
    /// Output will be foldable in this group until the next [`Toolkit::end_group()`].
    pub fn start_group(&mut self, name: &str) -> Result<usize, ToolkitError> {
        self.issue(&WorkflowCommand::new("group").param("name", name))
    }

    /// End an output group.
    pub fn end_group(&mut self) -> Result<usize, ToolkitError> {
        self.issue(&WorkflowCommand::new("endgroup"))
    }

    /// Run `f` inside an output group named `name`.
    ///
    /// The group is not ended (and `f` is not run) if starting it failed.
    /// If ending the group fails, that error is returned and the value
    /// produced by `f` is dropped; use [`Toolkit::start_group()`] and
    /// [`Toolkit::end_group()`] directly to keep it.
    pub fn group<T>(
        &mut self,
        name: &str,
        f: impl FnOnce(&mut Self) -> T,
    ) -> Result<T, ToolkitError> {
        self.start_group(name)?;
        let result = f(self);
        self.end_group()?;
        Ok(result)
    }

    /// Stop processing any workflow commands.
    ///
    /// This allows logging anything without accidentally triggering a command.
    /// The runner host resumes processing after [`Toolkit::resume_commands()`] is
    /// called with the same `token`.
    pub fn stop_commands(&mut self, token: &str) -> Result<usize, ToolkitError> {
        self.issue(&WorkflowCommand::new("stop-commands").message(token))
    }

    /// Resume processing workflow commands.
    ///
    /// The `token` itself is written in place of the command's name (`::<token>::`).
    pub fn resume_commands(&mut self, token: &str) -> Result<usize, ToolkitError> {
        self.issue(&WorkflowCommand::new(token).message(""))
    }
}

fn set_process_env(key: &str, value: impl AsRef<OsStr>) -> Result<(), ToolkitError> {
    let value = value.as_ref();
    if key.is_empty() {
        return Err(ToolkitError::env_var(key, "name is empty"));
    }
    if key.contains(['=', '\0']) {
        return Err(ToolkitError::env_var(key, "name contains '=' or NUL"));
    }
    if value.as_encoded_bytes().contains(&0) {
        return Err(ToolkitError::env_var(key, "value contains NUL"));
    }
    log::debug!("Setting env var {key} in the current process");
    // SAFETY: the caller upholds the single-threaded environment access documented
    // on the public methods; the name/value were checked for what `set_var` rejects.
    unsafe {
        env::set_var(key, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::{DEFAULT_STOP_TOKEN, Toolkit};
    use crate::{OutputVariable, ToolkitError};

    /// A sink that refuses every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured(toolkit: Toolkit<Vec<u8>>) -> String {
        String::from_utf8(toolkit.into_inner()).unwrap()
    }

    #[test]
    fn byte_count() {
        let mut toolkit = Toolkit::new(Vec::new());
        assert_eq!(toolkit.end_group().unwrap(), "::endgroup\n".len());
        assert_eq!(toolkit.get_ref().len(), "::endgroup\n".len());
    }

    #[test]
    fn write_failure() {
        let mut toolkit = Toolkit::new(BrokenPipe);
        let err = toolkit.set_secret("supersecret").unwrap_err();
        assert!(matches!(
            err,
            ToolkitError::Io { source, .. } if source.kind() == io::ErrorKind::BrokenPipe
        ));
    }

    #[test]
    fn group_wraps_closure() {
        let mut toolkit = Toolkit::new(Vec::new());
        let answer = toolkit
            .group("hello world", |tk| {
                tk.warning("inside").unwrap();
                42
            })
            .unwrap();
        assert_eq!(answer, 42);
        assert_eq!(
            captured(toolkit),
            "::group name=hello world\n::warning::inside\n::endgroup\n"
        );
    }

    /// A sink that accepts a limited number of writes, then refuses the rest.
    struct FailAfter(usize);

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.0 == 0 {
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            self.0 -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_group_end_is_returned() {
        let mut toolkit = Toolkit::new(FailAfter(2));
        let mut ran = false;
        let result = toolkit.group("x", |tk| {
            ran = true;
            tk.debug("inside")
        });
        assert!(ran);
        assert!(matches!(
            result,
            Err(ToolkitError::Io { source, .. }) if source.kind() == io::ErrorKind::BrokenPipe
        ));
    }

    #[test]
    fn failed_group_start_skips_closure() {
        let mut toolkit = Toolkit::new(BrokenPipe);
        let mut ran = false;
        assert!(toolkit.group("x", |_| ran = true).is_err());
        assert!(!ran);
    }

    #[test]
    fn multiple_outputs() {
        let mut toolkit = Toolkit::new(Vec::new());
        let written = toolkit
            .set_outputs(&[
                OutputVariable::new("a", "1"),
                OutputVariable::from(("b", "two words")),
            ])
            .unwrap();
        let out = captured(toolkit);
        assert_eq!(written, out.len());
        assert_eq!(
            out,
            "::set-output name=a::1\n::set-output name=b::two words\n"
        );
    }

    #[test]
    fn invalid_env_names_are_not_emitted() {
        let mut toolkit = Toolkit::new(Vec::new());
        for key in ["", "A=B", "NUL\0"] {
            assert!(matches!(
                toolkit.set_env(key, "value"),
                Err(ToolkitError::EnvVar { .. })
            ));
        }
        assert!(matches!(
            toolkit.set_env("WORKFLOW_COMMANDS_NUL_VALUE", "a\0b"),
            Err(ToolkitError::EnvVar { .. })
        ));
        assert!(toolkit.get_ref().is_empty());
    }

    #[test]
    fn default_stop_token() {
        assert!(DEFAULT_STOP_TOKEN.starts_with(concat!(
            "workflow_commands/",
            env!("CARGO_PKG_VERSION")
        )));
        let mut toolkit = Toolkit::new(Vec::new());
        toolkit.stop_commands(DEFAULT_STOP_TOKEN).unwrap();
        toolkit.resume_commands(DEFAULT_STOP_TOKEN).unwrap();
        assert_eq!(
            captured(toolkit),
            format!("::stop-commands::{DEFAULT_STOP_TOKEN}\n::{DEFAULT_STOP_TOKEN}::\n")
        );
    }
}
