use std::io;
use std::process::Command;

use crate::command::{CommandOutcome, CommandRunner};

/// Runs commands as real child processes, capturing their output
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }

    /// Executable name variants to probe, in order.
    ///
    /// Windows npm installs ship `npm.cmd`, and `Command::new("npm")` does
    /// not resolve it; elsewhere the bare name is the only spelling.
    fn candidates(program: &str) -> Vec<String> {
        if cfg!(windows) {
            vec![
                program.to_string(),
                format!("{}.cmd", program),
                format!("{}.exe", program),
            ]
        } else {
            vec![program.to_string()]
        }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> CommandOutcome {
        let tried = Self::candidates(program);

        for candidate in &tried {
            match Command::new(candidate).args(args).output() {
                Ok(output) => {
                    return CommandOutcome {
                        success: output.status.success(),
                        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                    };
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return CommandOutcome::fail(format!("failed to start {}: {}", candidate, e));
                }
            }
        }

        CommandOutcome::not_found(program, &tried)
    }
}
