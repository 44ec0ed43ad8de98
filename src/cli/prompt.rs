//! Line prompts

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors raised while talking to the user.
#[derive(Debug, Error)]
pub(crate) enum PromptError {
    /// Input reached end of file.
    #[error("input closed")]
    Closed,

    /// Reading or writing the terminal failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Reads answers from `input`, writing labels to `output`.
#[derive(Debug)]
pub(crate) struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    pub(crate) fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Show `label` and read one trimmed line.
    ///
    /// # Errors
    ///
    /// Returns `PromptError::Closed` at end of input.
    pub(crate) fn ask(&mut self, label: &str) -> Result<String, PromptError> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }

        Ok(line.trim().to_string())
    }

    /// Write one line of output.
    pub(crate) fn say(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{message}")?;

        Ok(())
    }
}
