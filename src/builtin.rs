use crate::command::{CommandFactory, ExecutableCommand, Outcome, Stdout};
use crate::env::Environment;
use crate::error::ShellError;
use crate::registry::Factory;
use argh::{EarlyExit, FromArgs};
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Built-in commands known to the shell at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed directly
/// in-process without spawning a child process.
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "cdir" or "list".
    fn name() -> &'static str;

    /// Parses the arguments following the command name.
    ///
    /// Every argument is an operand: `cdir help` and `list -x` name directories,
    /// so argh sees them after `--`.
    fn parse(args: &[&str]) -> Result<Self, EarlyExit> {
        let operands: Vec<&str> = std::iter::once("--").chain(args.iter().copied()).collect();
        Self::from_args(&[Self::name()], &operands)
    }

    /// Executes the command, writing its output to `stdout`.
    fn execute(self, stdout: &mut dyn Write, env: &mut Environment)
    -> Result<Outcome, ShellError>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(
        self: Box<Self>,
        mut stdout: &mut dyn Stdout,
        env: &mut Environment,
    ) -> Result<Outcome, ShellError> {
        <T as BuiltinCommand>::execute(*self, &mut stdout, env)
    }
}

/// Stand-in for a builtin whose arguments argh refused.
struct Rejected {
    command: &'static str,
    message: String,
}

impl ExecutableCommand for Rejected {
    fn execute(
        self: Box<Self>,
        _stdout: &mut dyn Stdout,
        _env: &mut Environment,
    ) -> Result<Outcome, ShellError> {
        Err(ShellError::InvalidArguments {
            command: self.command,
            message: self.message.trim_end().to_string(),
        })
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn name(&self) -> &'static str {
        T::name()
    }

    fn create(&self, args: &[&str]) -> Box<dyn ExecutableCommand> {
        match T::parse(args) {
            Ok(cmd) => Box::new(cmd),
            Err(EarlyExit { output, .. }) => Box::new(Rejected {
                command: T::name(),
                message: output,
            }),
        }
    }
}

#[derive(FromArgs)]
/// Change the current working directory.
pub struct Cdir {
    #[argh(positional, greedy)]
    /// directory to switch to; absolute or relative to the current directory. Only the first is used.
    pub target: Vec<String>,
}

impl BuiltinCommand for Cdir {
    fn name() -> &'static str {
        "cdir"
    }

    fn execute(
        self,
        _stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Outcome, ShellError> {
        let Some(target) = self.target.first() else {
            return Err(ShellError::MissingArgument("cdir"));
        };
        let path = PathBuf::from(target);
        env.change_dir(&path)
            .map_err(|source| ShellError::ChangeDir { path, source })?;
        Ok(Outcome::success())
    }
}

#[derive(FromArgs)]
/// List the commands built into the shell, in registration order.
pub struct Help {
    #[argh(positional, greedy)]
    /// ignored
    pub _args: Vec<String>,
}

impl BuiltinCommand for Help {
    fn name() -> &'static str {
        "help"
    }

    fn execute(
        self,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Outcome, ShellError> {
        for name in &env.commands {
            writeln!(stdout, "\t\t\t\t {name}")?;
        }
        Ok(Outcome::success())
    }
}

#[derive(FromArgs)]
/// Exit the shell.
pub struct Ext {}

impl BuiltinCommand for Ext {
    fn name() -> &'static str {
        "ext"
    }

    // Whatever follows `ext` is ignored, flags included.
    fn parse(_args: &[&str]) -> Result<Self, EarlyExit> {
        Ok(Ext {})
    }

    fn execute(
        self,
        _stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<Outcome, ShellError> {
        Ok(Outcome::terminate())
    }
}

#[derive(FromArgs)]
/// Print the current working directory to standard output.
pub struct Cwd {
    #[argh(positional, greedy)]
    /// ignored
    pub _args: Vec<String>,
}

impl BuiltinCommand for Cwd {
    fn name() -> &'static str {
        "cwd"
    }

    fn execute(
        self,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Outcome, ShellError> {
        let dir = env.current_dir().map_err(ShellError::CurrentDir)?;
        writeln!(stdout, "{}", dir.display())?;
        Ok(Outcome::success())
    }
}

#[derive(FromArgs)]
/// Print the names of all entries of a directory, one per line, unsorted.
pub struct List {
    #[argh(positional, greedy)]
    /// directory to list. Defaults to the current directory; only the first is used.
    pub dirs: Vec<String>,
}

impl BuiltinCommand for List {
    fn name() -> &'static str {
        "list"
    }

    fn execute(
        self,
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<Outcome, ShellError> {
        let path = PathBuf::from(self.dirs.first().map_or(".", String::as_str));
        let names = entry_names(&path).map_err(|source| ShellError::ReadDir { path, source })?;
        for name in names {
            stdout.write_all(name.as_encoded_bytes())?;
            stdout.write_all(b"\n")?;
        }
        Ok(Outcome::success())
    }
}

/// All entry names of `dir` in enumeration order, `.` and `..` first.
///
/// Nothing is returned unless the whole directory could be read.
fn entry_names(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names = vec![OsString::from("."), OsString::from("..")];
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name());
    }
    Ok(names)
}
