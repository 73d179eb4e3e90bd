//! Where command lines come from.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

/// A source of input lines for the interactive loop.
pub trait LineSource {
    /// Show `prompt` and read one line.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Terminal input through rustyline, with line editing and in-memory history.
pub struct EditorSource {
    editor: DefaultEditor,
    history: bool,
}

impl EditorSource {
    pub fn new(history: bool) -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            history,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if self.history && !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            // Ctrl-C drops the current line and prompts again.
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Plain line-by-line input, used when stdin is not a terminal.
///
/// The prompt is written to `prompt_out` and flushed before every read. Input
/// that is not valid UTF-8 is decoded lossily.
pub struct PlainSource<R, W> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> PlainSource<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineSource for PlainSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.prompt_out.write_all(prompt.as_bytes())?;
        self.prompt_out.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn plain_source_prompts_before_each_line() {
        let mut prompts = Vec::new();
        let mut source = PlainSource::new(Cursor::new("cwd\nlist /tmp"), &mut prompts);

        assert_eq!(source.read_line("> ").unwrap().as_deref(), Some("cwd\n"));
        assert_eq!(source.read_line("> ").unwrap().as_deref(), Some("list /tmp"));
        assert_eq!(source.read_line("> ").unwrap(), None);
        drop(source);

        assert_eq!(prompts, b"> > > ");
    }

    #[test]
    fn plain_source_keeps_empty_lines_apart_from_eof() {
        let mut source = PlainSource::new(Cursor::new("\n"), Vec::new());
        assert_eq!(source.read_line("").unwrap().as_deref(), Some("\n"));
        assert_eq!(source.read_line("").unwrap(), None);
    }

    #[test]
    fn plain_source_replaces_invalid_utf8() {
        let mut source = PlainSource::new(Cursor::new(b"list \xff\n".to_vec()), Vec::new());
        assert_eq!(
            source.read_line("").unwrap().as_deref(),
            Some("list \u{fffd}\n")
        );
    }
}
