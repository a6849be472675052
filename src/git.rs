//! Git operations issued through the command runner.
//!
//! git is driven strictly as a black-box binary so the user's own hooks,
//! credentials, and config apply. Methods type the outcomes just enough for
//! the workflow; whether a failure aborts the release is decided there.

use crate::command::CommandRunner;
use crate::error::Result;

/// Commit message used when the user leaves the prompt empty
pub const DEFAULT_COMMIT_MESSAGE: &str = "automatic pre-release commit";

/// Cleanliness of the working tree, from one porcelain status query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingTreeStatus {
    pub clean: bool,
    pub changed_paths: Vec<String>,
}

impl WorkingTreeStatus {
    /// Build from `git status --porcelain` output.
    ///
    /// Every non-empty line is one changed entry, kept verbatim (status
    /// columns included) for display. `changed_paths` is non-empty exactly
    /// when the tree is dirty.
    pub fn from_porcelain(output: &str) -> Self {
        let changed_paths: Vec<String> = output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect();

        WorkingTreeStatus {
            clean: changed_paths.is_empty(),
            changed_paths,
        }
    }
}

/// Wrapper around the `git` binary for status, commit, tag, and push.
pub struct GitCli<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> GitCli<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        GitCli { runner }
    }

    /// Query working-tree cleanliness.
    pub fn status(&self) -> Result<WorkingTreeStatus> {
        let outcome = self.runner.run("git", &["status", "--porcelain"]);
        if !outcome.success {
            return Err(outcome.into_error("git status"));
        }
        Ok(WorkingTreeStatus::from_porcelain(&outcome.stdout))
    }

    /// Stage everything, then commit with `message` (or the fixed default).
    ///
    /// The commit is not attempted when staging fails.
    pub fn commit_all(&self, message: Option<&str>) -> Result<()> {
        let outcome = self.runner.run("git", &["add", "."]);
        if !outcome.success {
            return Err(outcome.into_error("git add"));
        }

        let message = message.unwrap_or(DEFAULT_COMMIT_MESSAGE);
        let outcome = self.runner.run("git", &["commit", "-m", message]);
        if !outcome.success {
            return Err(outcome.into_error("git commit"));
        }
        Ok(())
    }

    /// Whether a tag with exactly this name exists.
    ///
    /// `git tag -l <name>` exits 0 either way; existence is signalled by the
    /// name being echoed on stdout.
    pub fn tag_exists(&self, tag: &str) -> Result<bool> {
        let outcome = self.runner.run("git", &["tag", "-l", tag]);
        if !outcome.success {
            return Err(outcome.into_error("git tag -l"));
        }
        Ok(!outcome.stdout.trim().is_empty())
    }

    /// Create a tag at HEAD.
    pub fn create_tag(&self, tag: &str) -> Result<()> {
        let outcome = self.runner.run("git", &["tag", tag]);
        if !outcome.success {
            return Err(outcome.into_error("git tag"));
        }
        Ok(())
    }

    /// Push the current branch together with its tags.
    pub fn push_with_tags(&self) -> Result<()> {
        let outcome = self.runner.run("git", &["push", "--follow-tags"]);
        if !outcome.success {
            return Err(outcome.into_error("git push --follow-tags"));
        }
        Ok(())
    }
}
