use argh::FromArgs;

/// Prompt printed before every line.
pub const DEFAULT_PROMPT: &str = "imGroot:> ";

#[derive(FromArgs, Debug)]
/// A tiny interactive shell.
pub struct Args {
    #[argh(option)]
    /// text shown before each command line
    pub prompt: Option<String>,

    #[argh(switch)]
    /// read plain lines from standard input instead of using the line editor
    pub plain: bool,

    #[argh(switch)]
    /// do not keep a history of entered lines
    pub no_history: bool,
}

/// How lines are read from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// rustyline when stdin is a terminal, plain reads otherwise.
    Auto,
    /// Always plain reads.
    Plain,
}

/// Resolved shell settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    pub input: InputMode,
    pub history: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            input: InputMode::Auto,
            history: true,
        }
    }
}

impl From<Args> for ShellConfig {
    fn from(args: Args) -> Self {
        let defaults = Self::default();
        Self {
            prompt: args.prompt.unwrap_or(defaults.prompt),
            input: if args.plain {
                InputMode::Plain
            } else {
                defaults.input
            },
            history: !args.no_history,
        }
    }
}
