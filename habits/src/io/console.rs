//! Line-oriented interaction over any reader/writer pair.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Prompts and messages for the interactive session.
///
/// Generic over the streams so tests can script input and capture output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}").context("write to console")
    }

    /// Print `prompt` and read one answer.
    ///
    /// Returns `None` at end of input. Only the line terminator is removed;
    /// surrounding whitespace is part of the answer.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("write prompt")?;
        self.output.flush().context("flush console")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("read input")?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
