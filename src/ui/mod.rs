//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Output rendering
//! - This module - Interactive prompts and user input handling
//!
//! Decision mapping stays pure in [crate::release::ReleaseMode]; prompting
//! is only the I/O around it, behind the [Prompt] trait so the workflow can
//! be driven without a terminal.

use std::io::{self, Write};

use crate::error::{ReleaseError, Result};
use crate::release::ReleaseMode;

pub mod formatter;
pub mod mock;

// Re-export the display functions and the scripted prompt for convenience
pub use formatter::{
    display_banner, display_changed_paths, display_command_output, display_error, display_report,
    display_status, display_success, display_warning,
};
pub use mock::ScriptedPrompt;

/// Interactive decisions the release workflow needs from the user.
///
/// EOF on the underlying input means the user walked away; every method
/// reports that as [ReleaseError::UserCancelled] so callers can abandon the
/// run cleanly at any prompt.
pub trait Prompt {
    /// Pick a release mode from the menu, re-asking until the answer maps
    fn select_mode(&mut self) -> Result<ReleaseMode>;

    /// Ask a yes/no question, re-asking until the answer is y(es) or n(o)
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Read one free-text line; trimmed, may be empty
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// [Prompt] over stdin/stdout
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        TerminalPrompt
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn select_mode(&mut self) -> Result<ReleaseMode> {
        loop {
            let answer = self.read_line("Choose a release type (1/2/3/4): ")?;
            match ReleaseMode::from_choice(&answer) {
                Some(mode) => return Ok(mode),
                None => println!("Please enter 1, 2, 3 or 4."),
            }
        }
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            let answer = self.read_line(&format!("{} (y/n): ", question))?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => println!("Please answer y or n."),
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().read_line(&mut input)?;
        if read == 0 {
            return Err(ReleaseError::UserCancelled);
        }
        Ok(input.trim().to_string())
    }
}
