//! Line input sources for the interactive shell.
//!
//! # Responsibility
//! - Read one line of user input per prompt.
//! - Map end-of-input (Ctrl-D, Ctrl-C, exhausted script) to `None`.

use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
#[cfg(test)]
use std::collections::VecDeque;
use std::io;

/// Source of prompted input lines.
pub trait LineSource {
    /// Shows `prompt` and returns the next line without its newline, or
    /// `None` once input has ended.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Terminal line editor with in-memory history.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> Result<Self, ReadlineError> {
        let config = Config::builder().auto_add_history(true).build();
        Ok(Self {
            editor: DefaultEditor::with_config(config)?,
        })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(ReadlineError::Io(err)) => Err(err),
            Err(err) => Err(io::Error::other(err.to_string())),
        }
    }
}

/// Pre-recorded input, used to drive the shell without a terminal.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
impl LineSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
