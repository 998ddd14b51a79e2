//! Input and narration capabilities used by the encounter loop.
//!
//! The encounter never touches stdin/stdout directly: choices come from an
//! [`ActionSource`] and narration goes to a [`Narrator`], so tests can drive
//! combat with scripted choices and inspect the produced lines.

use std::collections::VecDeque;

use error::GameError;

/// Source of raw menu choices
pub trait ActionSource {
    /// Next raw choice, or `None` once input is exhausted
    fn next_choice(&mut self) -> Result<Option<String>, GameError>;
}

/// Sink for narration lines
pub trait Narrator {
    fn narrate(&mut self, line: &str);
}

impl Narrator for Vec<String> {
    fn narrate(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Pre-recorded choices, consumed front to back
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    choices: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma separated script such as `"1,1,2,3"`
    pub fn from_script(script: &str) -> Self {
        Self::new(
            script
                .split(',')
                .map(str::trim)
                .filter(|choice| !choice.is_empty()),
        )
    }

    /// Choices not consumed yet
    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl ActionSource for ScriptedInput {
    fn next_choice(&mut self) -> Result<Option<String>, GameError> {
        Ok(self.choices.pop_front())
    }
}
