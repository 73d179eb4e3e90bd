//! A tiny interactive shell.
//!
//! Each line read from the user is split on whitespace, and the first word is
//! looked up in a fixed table of built-in commands (`cdir`, `help`, `ext`,
//! `cwd`, `list`). Anything else is started as an external program and waited
//! for before the next prompt.
//!
//! The main entry point is [`Interpreter`], which owns the [`CommandRegistry`]
//! and the session [`Environment`]. Lines come from a [`LineSource`] and command
//! output goes to any [`Stdout`](command::Stdout) sink, so the whole loop can be
//! driven from memory as well as from a terminal.

mod builtin;
pub mod command;
pub mod config;
pub mod env;
pub mod error;
mod external;
mod interpreter;
pub mod io_adapters;
pub mod lexer;
pub mod reader;
mod registry;
#[cfg(test)]
mod test_support;

pub use command::{Flow, Outcome};
pub use config::ShellConfig;
pub use env::Environment;
pub use error::ShellError;
pub use interpreter::Interpreter;
pub use reader::{EditorSource, LineSource, PlainSource};
pub use registry::CommandRegistry;
