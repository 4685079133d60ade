//! Console capability
//!
//! Line-oriented prompt/read/write abstraction used by the session flows.
//! `StdConsole` runs it over any `BufRead`/`Write` pair, which is how the
//! tests drive sessions from scripted input.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub trait Console {
    /// Reads one line without its terminator. `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than reported as an error.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes `text` verbatim and flushes.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }

    /// Shows `text` and reads the reply.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.write(text)?;
        self.read_line()
    }
}

/// Console over a reader/writer pair
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
}

impl StdConsole<StdinLock<'static>, Stdout> {
    /// Binds the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // Terminals in legacy encodings may send bytes that are not UTF-8.
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}
