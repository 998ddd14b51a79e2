//! Terminal front end: blocking line reads and printed narration.

use std::io::{self, BufRead, Write};

use combat::{Action, ActionSource, Narrator};
use error::GameError;

/// Reads menu choices line by line, printing the combat menu first
pub struct StdinInput<R, W> {
    reader: R,
    writer: W,
}

impl StdinInput<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdinInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `prompt` and read one line, `None` on end of input
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>, GameError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> ActionSource for StdinInput<R, W> {
    fn next_choice(&mut self) -> Result<Option<String>, GameError> {
        writeln!(self.writer, "What do you want to do?")?;
        for line in Action::menu() {
            writeln!(self.writer, "{line}")?;
        }
        self.ask("Choose an option: ")
    }
}

/// Prints narration lines
pub struct ConsoleNarrator<W> {
    writer: W,
}

impl ConsoleNarrator<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> Narrator for ConsoleNarrator<W> {
    fn narrate(&mut self, line: &str) {
        if let Err(err) = writeln!(self.writer, "{line}") {
            tracing::warn!(%err, "failed to print narration");
        }
    }
}
