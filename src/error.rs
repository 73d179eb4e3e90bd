//! Failures of individual commands.
//!
//! None of these end the session: the interpreter reports them (or only logs
//! them, see [`ShellError::is_reported`]) and prompts again.

use crate::command::ExitCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    /// A built-in was called without a required operand.
    #[error("expecting argument for \"{0}\"")]
    MissingArgument(&'static str),

    /// A built-in could not make sense of its arguments.
    #[error("{command}: {message}")]
    InvalidArguments {
        command: &'static str,
        message: String,
    },

    #[error("{}: {source}", path.display())]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot determine working directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("cannot list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The external program could not be started at all.
    #[error("{program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program}: failed to wait for child: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Writing command output failed.
    #[error("write error: {0}")]
    Output(#[from] io::Error),
}

impl ShellError {
    /// Status recorded for the failed command.
    pub fn status(&self) -> ExitCode {
        match self {
            ShellError::Launch { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => 127,
                io::ErrorKind::PermissionDenied => 126,
                _ => 1,
            },
            _ => 1,
        }
    }

    /// Whether the user sees this error. `cwd` and `list` fail quietly.
    pub fn is_reported(&self) -> bool {
        !matches!(
            self,
            ShellError::CurrentDir(_) | ShellError::ReadDir { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn launch(kind: io::ErrorKind) -> ShellError {
        ShellError::Launch {
            program: "prog".to_string(),
            source: io::Error::from(kind),
        }
    }

    #[rstest]
    #[case(io::ErrorKind::NotFound, 127)]
    #[case(io::ErrorKind::PermissionDenied, 126)]
    #[case(io::ErrorKind::OutOfMemory, 1)]
    fn launch_status_follows_error_kind(#[case] kind: io::ErrorKind, #[case] expected: ExitCode) {
        assert_eq!(launch(kind).status(), expected);
    }

    #[test]
    fn missing_argument_message() {
        let err = ShellError::MissingArgument("cdir");
        assert_eq!(err.to_string(), "expecting argument for \"cdir\"");
        assert!(err.is_reported());
        assert_eq!(err.status(), 1);
    }

    #[test]
    fn directory_listing_failures_are_quiet() {
        let err = ShellError::ReadDir {
            path: PathBuf::from("/nope"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(!err.is_reported());
        assert!(!ShellError::CurrentDir(io::Error::from(io::ErrorKind::NotFound)).is_reported());
    }
}
