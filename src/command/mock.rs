use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

use crate::command::{CommandOutcome, CommandRunner};

/// Mock runner for testing without spawning real processes
///
/// Outcomes are queued per exact command line ("git status --porcelain") and
/// consumed in order; unscripted commands succeed with empty output. Every
/// invocation is recorded so tests can assert what ran and what never did.
pub struct MockRunner {
    responses: Mutex<HashMap<String, VecDeque<CommandOutcome>>>,
    calls: Mutex<Vec<String>>,
}

impl MockRunner {
    /// Create a mock runner with no scripted outcomes
    pub fn new() -> Self {
        MockRunner {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue an outcome for an exact command line
    pub fn respond(&mut self, command_line: impl Into<String>, outcome: CommandOutcome) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(command_line.into())
            .or_default()
            .push_back(outcome);
    }

    /// Every command line run so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether any recorded command line starts with `prefix`
    pub fn invoked(&self, prefix: &str) -> bool {
        self.calls().iter().any(|line| line.starts_with(prefix))
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> CommandOutcome {
        let line = command_line(program, args);
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.clone());

        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(&line)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| CommandOutcome::ok(""))
    }
}

fn command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
