use crate::command::ExitCode;
use std::env as stdenv;
use std::io;
use std::path::{Path, PathBuf};

/// Per-session state shared by every command the interpreter runs.
///
/// The working directory itself is process-wide; the environment only wraps the
/// calls that read and change it so that built-ins have a single place to go
/// through.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Status of the most recently executed command.
    pub last_status: ExitCode,
    /// Names of the builtins available in this session, as `help` lists them.
    pub commands: Vec<&'static str>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute path of the process working directory.
    pub fn current_dir(&self) -> io::Result<PathBuf> {
        stdenv::current_dir()
    }

    /// Change the process working directory. On error it is left as it was.
    pub fn change_dir(&mut self, target: &Path) -> io::Result<()> {
        stdenv::set_current_dir(target)
    }
}
