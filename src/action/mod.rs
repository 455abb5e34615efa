mod command;
mod file_command;

use command::issue_command;
use std::{
    cell::{Cell, RefCell},
    env,
    io::{self, Stdout, Write},
    path::PathBuf,
    process::ExitCode,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Unexpected input: name should not contain the delimiter \"{delimiter}\"")]
    DelimiterInName { delimiter: String },
    #[error("Unexpected input: value should not contain the delimiter \"{delimiter}\"")]
    DelimiterInValue { delimiter: String },
    #[error("Failed to write output")]
    Io(#[from] io::Error),
}

/// What the resolvers and the emitter may ask of the host runner.
pub trait ActionRuntime {
    /// Diagnostic message, only shown when step debug logging is enabled.
    fn debug(&self, message: &str);

    fn set_output(&self, name: &str, value: &str) -> Result<(), OutputError>;

    /// Marks the run as failed. Does not stop execution.
    fn set_failed(&self, message: &str);
}

/// The GitHub Actions runner: workflow commands on `out`, outputs appended to
/// the `GITHUB_OUTPUT` file.
pub struct GithubActions<W: Write> {
    out: RefCell<W>,
    output_path: Option<PathBuf>,
    failed: Cell<bool>,
}

impl GithubActions<Stdout> {
    pub fn from_env() -> Self {
        let output_path = env::var("GITHUB_OUTPUT")
            .ok()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        GithubActions::new(io::stdout(), output_path)
    }
}

impl<W: Write> GithubActions<W> {
    pub fn new(out: W, output_path: Option<PathBuf>) -> Self {
        GithubActions {
            out: RefCell::new(out),
            output_path,
            failed: Cell::new(false),
        }
    }

    pub fn has_failed(&self) -> bool {
        self.failed.get()
    }

    /// `1` once any failure was reported, `0` otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.has_failed() {
            1
        } else {
            0
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "{}", line)?;
        out.flush()
    }

    fn issue(&self, line: &str) {
        if let Err(err) = self.write_line(line) {
            log::error!("Cannot write workflow command: {}", err);
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> ActionRuntime for GithubActions<W> {
    fn debug(&self, message: &str) {
        self.issue(&issue_command("debug", &[], message));
    }

    fn set_output(&self, name: &str, value: &str) -> Result<(), OutputError> {
        match &self.output_path {
            Some(path) => {
                let message = file_command::prepare_key_value_message(name, value)?;
                file_command::append(path, &message)
            }
            None => {
                // Blank line first so the command starts at column 0.
                self.write_line("")?;
                self.write_line(&issue_command("set-output", &[("name", name)], value))?;
                Ok(())
            }
        }
    }

    fn set_failed(&self, message: &str) {
        self.failed.set(true);
        self.issue(&issue_command("error", &[], message));
    }
}
