use std::collections::VecDeque;

use crate::error::{ReleaseError, Result};
use crate::release::ReleaseMode;
use crate::ui::Prompt;

/// Scripted prompt for driving the workflow in tests.
///
/// Answers are consumed in order, one queue per question kind. An exhausted
/// queue behaves exactly like EOF on stdin and yields
/// [ReleaseError::UserCancelled].
pub struct ScriptedPrompt {
    modes: VecDeque<ReleaseMode>,
    confirmations: VecDeque<bool>,
    lines: VecDeque<String>,
}

impl ScriptedPrompt {
    /// Create a prompt with nothing queued; every question cancels
    pub fn new() -> Self {
        ScriptedPrompt {
            modes: VecDeque::new(),
            confirmations: VecDeque::new(),
            lines: VecDeque::new(),
        }
    }

    /// Queue a menu answer
    pub fn push_mode(&mut self, mode: ReleaseMode) {
        self.modes.push_back(mode);
    }

    /// Queue a yes/no answer
    pub fn push_confirmation(&mut self, answer: bool) {
        self.confirmations.push_back(answer);
    }

    /// Queue a free-text answer
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }
}

impl Default for ScriptedPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for ScriptedPrompt {
    fn select_mode(&mut self) -> Result<ReleaseMode> {
        self.modes.pop_front().ok_or(ReleaseError::UserCancelled)
    }

    fn confirm(&mut self, _question: &str) -> Result<bool> {
        self.confirmations
            .pop_front()
            .ok_or(ReleaseError::UserCancelled)
    }

    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        self.lines.pop_front().ok_or(ReleaseError::UserCancelled)
    }
}
