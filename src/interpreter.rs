use crate::command::{ExecutableCommand, Flow, Outcome, Stdout};
use crate::config::{DEFAULT_PROMPT, ShellConfig};
use crate::env::Environment;
use crate::error::ShellError;
use crate::external::ExternalCommand;
use crate::lexer;
use crate::reader::LineSource;
use crate::registry::CommandRegistry;
use std::io::Write;

/// The interactive shell: reads lines, runs builtins in-process and everything
/// else as a child process, one command at a time.
///
/// Example
/// ```
/// use imgroot::io_adapters::MemWriter;
/// use imgroot::{Flow, Interpreter};
/// let mut sh = Interpreter::default();
/// let mut out = MemWriter::new();
/// let mut err = Vec::new();
/// let flow = sh.run_line("ext now", &mut out, &mut err).unwrap();
/// assert_eq!(flow, Flow::Terminate);
/// ```
pub struct Interpreter {
    env: Environment,
    registry: CommandRegistry,
    prompt: String,
}

impl Interpreter {
    /// Create a new interpreter with a custom command table.
    pub fn new(registry: CommandRegistry, prompt: impl Into<String>) -> Self {
        let env = Environment {
            commands: registry.names().collect(),
            ..Environment::new()
        };
        Self {
            env,
            registry,
            prompt: prompt.into(),
        }
    }

    /// Interpreter with the standard builtins and the configured prompt.
    pub fn from_config(config: &ShellConfig) -> Self {
        Self::new(CommandRegistry::default(), config.prompt.clone())
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Run one already tokenized command line.
    ///
    /// Command failures are written to `stderr` (or only logged, for the quiet
    /// ones) and never stop the loop; the returned error is reserved for
    /// failing to write that report.
    pub fn execute(
        &mut self,
        argv: &[String],
        stdout: &mut dyn Stdout,
        stderr: &mut dyn Write,
    ) -> anyhow::Result<Flow> {
        let Some(name) = argv.first() else {
            return Ok(Flow::Continue);
        };

        let cmd: Box<dyn ExecutableCommand> = match self.registry.lookup(name) {
            Some(factory) => {
                log::debug!("builtin {name}");
                let args: Vec<&str> = argv[1..].iter().map(String::as_str).collect();
                factory.create(&args)
            }
            None => {
                log::debug!("external {name}");
                Box::new(ExternalCommand::new(argv.to_vec()))
            }
        };

        let outcome = match cmd.execute(stdout, &mut self.env) {
            Ok(outcome) => outcome,
            Err(err) => {
                report(&err, stderr)?;
                Outcome::exited(err.status())
            }
        };
        self.env.last_status = outcome.status;
        Ok(outcome.flow)
    }

    /// Tokenize `line` and run it.
    pub fn run_line(
        &mut self,
        line: &str,
        stdout: &mut dyn Stdout,
        stderr: &mut dyn Write,
    ) -> anyhow::Result<Flow> {
        let argv = lexer::split_into_tokens(line);
        self.execute(&argv, stdout, stderr)
    }

    /// Read-Eval-Print Loop.
    ///
    /// Returns once a command asks to terminate or `source` runs out of lines.
    pub fn repl(
        &mut self,
        source: &mut dyn LineSource,
        stdout: &mut dyn Stdout,
        stderr: &mut dyn Write,
    ) -> anyhow::Result<()> {
        log::info!("session started");
        loop {
            let Some(line) = source.read_line(&self.prompt)? else {
                log::info!("end of input");
                break;
            };
            let flow = self.run_line(&line, stdout, stderr)?;
            stdout.flush()?;
            if flow == Flow::Terminate {
                break;
            }
        }
        log::info!("session finished, last status {}", self.env.last_status);
        Ok(())
    }
}

impl Default for Interpreter {
    /// The standard builtins with the `imGroot:> ` prompt.
    fn default() -> Self {
        Self::new(CommandRegistry::default(), DEFAULT_PROMPT)
    }
}

fn report(err: &ShellError, stderr: &mut dyn Write) -> std::io::Result<()> {
    if err.is_reported() {
        log::debug!("command failed: {err}");
        writeln!(stderr, "imgroot: {err}")?;
        stderr.flush()
    } else {
        log::debug!("quiet failure: {err}");
        Ok(())
    }
}
