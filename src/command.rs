use crate::env::Environment;
use crate::error::ShellError;
use std::io::Write;
use std::process::Stdio;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line tools.
pub type ExitCode = i32;

/// Tells the interactive loop whether to read another line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Prompt for the next line.
    Continue,
    /// Leave the loop. Only `ext` produces this.
    Terminate,
}

/// Result of running one command: where the loop goes next and the status the
/// command finished with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub flow: Flow,
    pub status: ExitCode,
}

impl Outcome {
    /// Successful command, keep looping.
    pub fn success() -> Self {
        Self::exited(0)
    }

    /// Command finished with `status`, keep looping.
    pub fn exited(status: ExitCode) -> Self {
        Self {
            flow: Flow::Continue,
            status,
        }
    }

    /// Stop the loop.
    pub fn terminate() -> Self {
        Self {
            flow: Flow::Terminate,
            status: 0,
        }
    }
}

/// Abstraction over a writable output stream that can also hand itself to a
/// child process.
pub trait Stdout: Write {
    /// Handle for a spawned child's standard output.
    ///
    /// `None` means the stream cannot be inherited (e.g. it lives in memory); the
    /// launcher then captures the child's output and copies it into `self`.
    fn stdio(&self) -> Option<Stdio>;
}

/// Object-safe trait for any command that can be executed by the shell.
///
/// This is implemented by built-ins via a blanket impl and by external commands.
pub trait ExecutableCommand {
    /// Executes the command, writing its regular output to `stdout`.
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Stdout,
        env: &mut Environment,
    ) -> Result<Outcome, ShellError>;
}

/// Factory that creates a command from its argument vector.
///
/// Every factory answers to exactly one name; the registry maps that name to it.
pub trait CommandFactory {
    /// Name the command is invoked by.
    fn name(&self) -> &'static str;

    /// Build a command instance. `args` excludes the command name.
    fn create(&self, args: &[&str]) -> Box<dyn ExecutableCommand>;
}
