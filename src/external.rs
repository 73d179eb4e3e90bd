use crate::command::{ExecutableCommand, ExitCode, Outcome, Stdout};
use crate::env::Environment;
use crate::error::ShellError;
use std::process::{Command, ExitStatus, Stdio};

/// Command that is not a builtin.
///
/// `argv[0]` names the program; a bare name is searched for on `PATH`.
pub struct ExternalCommand {
    argv: Vec<String>,
}

impl ExternalCommand {
    /// `argv` must not be empty.
    pub fn new(argv: Vec<String>) -> Self {
        debug_assert!(!argv.is_empty());
        Self { argv }
    }
}

impl ExecutableCommand for ExternalCommand {
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Stdout,
        _env: &mut Environment,
    ) -> Result<Outcome, ShellError> {
        let Some((program, args)) = self.argv.split_first() else {
            return Ok(Outcome::success());
        };
        let inherited = stdout.stdio();
        let capture = inherited.is_none();

        stdout.flush()?;
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(inherited.unwrap_or_else(Stdio::piped))
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ShellError::Launch {
                program: program.clone(),
                source,
            })?;
        log::debug!("spawned {program} as pid {}", child.id());

        let wait_err = |source| ShellError::Wait {
            program: program.clone(),
            source,
        };
        // Only termination ends the wait; a stopped child keeps the shell blocked.
        let exit_status = if capture {
            let output = child.wait_with_output().map_err(wait_err)?;
            stdout.write_all(&output.stdout)?;
            output.status
        } else {
            child.wait().map_err(wait_err)?
        };

        let status = match exit_status.code() {
            Some(x) => x,
            None => terminated_by_signal(exit_status),
        };
        log::debug!("{program} finished with status {status}");
        Ok(Outcome::exited(status))
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> ExitCode {
    -1
}
