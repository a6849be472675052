//! External command execution abstraction
//!
//! Everything this tool does to the outside world goes through `git` and
//! `npm` child processes. The [CommandRunner] trait is the single seam for
//! that: [system::SystemRunner] spawns real processes, while
//! [mock::MockRunner] replays scripted outcomes for tests.
//!
//! # Usage
//!
//! ```rust
//! use npm_release::command::{CommandOutcome, CommandRunner, MockRunner};
//!
//! let mut runner = MockRunner::new();
//! runner.respond("git status --porcelain", CommandOutcome::ok(" M src/index.js\n"));
//!
//! let outcome = runner.run("git", &["status", "--porcelain"]);
//! assert!(outcome.success);
//! ```

pub mod mock;
pub mod system;

pub use mock::MockRunner;
pub use system::SystemRunner;

use crate::error::ReleaseError;

const NOT_FOUND_PREFIX: &str = "command not found: ";

/// Captured result of one external command invocation.
///
/// Failures are ordinary values here, not errors: callers decide what a
/// non-zero exit means for the step they are driving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    /// Successful outcome with the given stdout
    pub fn ok(stdout: impl Into<String>) -> Self {
        CommandOutcome {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed outcome with the given stderr
    pub fn fail(stderr: impl Into<String>) -> Self {
        CommandOutcome {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Sentinel outcome for a program that exists under none of its name
    /// variants. Stays an outcome rather than an error so that callers which
    /// tolerate missing tools can keep going.
    pub fn not_found(program: &str, tried: &[String]) -> Self {
        CommandOutcome::fail(format!(
            "{}{} (tried {})",
            NOT_FOUND_PREFIX,
            program,
            tried.join(", ")
        ))
    }

    /// Whether this outcome is the not-found sentinel
    pub fn is_not_found(&self) -> bool {
        self.stderr.starts_with(NOT_FOUND_PREFIX)
    }

    /// Best human-readable failure text: stderr, then stdout, then a stub
    pub fn detail(&self) -> String {
        let err = self.stderr.trim();
        if !err.is_empty() {
            return err.to_string();
        }
        let out = self.stdout.trim();
        if !out.is_empty() {
            return out.to_string();
        }
        "command produced no output".to_string()
    }

    /// Convert a failed outcome into the matching error for `action`
    pub fn into_error(self, action: &str) -> ReleaseError {
        if self.is_not_found() {
            let target = self
                .stderr
                .strip_prefix(NOT_FOUND_PREFIX)
                .unwrap_or(&self.stderr)
                .trim()
                .to_string();
            ReleaseError::CommandNotFound(target)
        } else {
            ReleaseError::command_failed(action, self.detail())
        }
    }
}

/// Common command execution trait for abstraction
///
/// All implementors must be `Send + Sync` so components holding a runner can
/// be shared freely. Implementations never return an error from [run]: spawn
/// problems are folded into the returned [CommandOutcome] so that control
/// flow stays in the caller's hands.
///
/// [run]: CommandRunner::run
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Output is captured as text (lossy UTF-8). Implementations try the
    /// platform's executable name variants in order; when none can be
    /// spawned the outcome is the not-found sentinel, and any other spawn
    /// failure becomes a failed outcome carrying the OS error text.
    fn run(&self, program: &str, args: &[&str]) -> CommandOutcome;
}
