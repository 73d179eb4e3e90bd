use imgroot::config::{Args, InputMode};
use imgroot::io_adapters::InheritedStdout;
use imgroot::{EditorSource, Interpreter, LineSource, PlainSource, ShellConfig};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ShellConfig::from(argh::from_env::<Args>());
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("imgroot: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ShellConfig) -> anyhow::Result<()> {
    let mut source: Box<dyn LineSource> =
        if config.input == InputMode::Auto && io::stdin().is_terminal() {
            Box::new(EditorSource::new(config.history)?)
        } else {
            log::debug!("reading plain lines from stdin");
            Box::new(PlainSource::new(io::stdin().lock(), io::stdout()))
        };

    let mut sh = Interpreter::from_config(config);
    sh.repl(source.as_mut(), &mut InheritedStdout::new(), &mut io::stderr())
}
