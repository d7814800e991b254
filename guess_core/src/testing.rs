//! Test doubles for driving games without a terminal.

use std::collections::VecDeque;

use crate::session::Prompter;
use crate::{Error, Result};

/// A [`Prompter`] that replays a fixed list of input lines.
///
/// Every prompt and message is recorded. Once the script runs out, `ask`
/// fails with [`Error::InputClosed`], just like a closed stdin.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    messages: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<S: Into<String>>(inputs: impl IntoIterator<Item = S>) -> Self {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Messages shown so far, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Input lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    /// Check whether any message contains `needle`.
    pub fn said(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    /// Check whether exactly this prompt was shown.
    pub fn asked(&self, prompt: &str) -> bool {
        self.prompts.iter().any(|p| p == prompt)
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().ok_or(Error::InputClosed)
    }

    fn say(&mut self, message: &str) -> Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }
}
