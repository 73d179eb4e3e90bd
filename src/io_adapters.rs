use std::io::{self, Result as IoResult, Write};
use std::process::Stdio;

/// The shell's own standard output. Children inherit it directly.
pub struct InheritedStdout(io::Stdout);

impl InheritedStdout {
    pub fn new() -> Self {
        Self(io::stdout())
    }
}

impl Default for InheritedStdout {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for InheritedStdout {
    fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> IoResult<()> {
        self.0.flush()
    }
}

impl crate::command::Stdout for InheritedStdout {
    fn stdio(&self) -> Option<Stdio> {
        Some(Stdio::inherit())
    }
}

/// Memory-backed writer for capturing command output.
///
/// External programs writing here get a pipe, and whatever they print is copied
/// into the buffer once they exit.
#[derive(Default)]
pub struct MemWriter {
    buf: Vec<u8>,
}

impl MemWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured bytes decoded as UTF-8, lossily.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }
}

impl Write for MemWriter {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}

impl crate::command::Stdout for MemWriter {
    fn stdio(&self) -> Option<Stdio> {
        None
    }
}
