//! The release workflow: the ordered steps between picking a mode and the
//! final summary.
//!
//! The sequence is linear with no retries: status gate, optional commit,
//! version resolution, publish, push. Each step decides only its own
//! severity; publish and push failures are recorded in the report instead of
//! aborting, everything earlier aborts the run.

use crate::command::CommandRunner;
use crate::error::{ReleaseError, Result};
use crate::git::GitCli;
use crate::npm::NpmCli;
use crate::ui::{self, Prompt};
use crate::version;

/// How the version number changes before publishing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseMode {
    Patch,
    Minor,
    Major,
    Direct,
}

impl ReleaseMode {
    /// Map a menu answer to a mode
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(ReleaseMode::Patch),
            "2" => Some(ReleaseMode::Minor),
            "3" => Some(ReleaseMode::Major),
            "4" => Some(ReleaseMode::Direct),
            _ => None,
        }
    }

    /// Argument for `npm version`; `None` for direct releases
    pub fn bump_kind(self) -> Option<&'static str> {
        match self {
            ReleaseMode::Patch => Some("patch"),
            ReleaseMode::Minor => Some("minor"),
            ReleaseMode::Major => Some("major"),
            ReleaseMode::Direct => None,
        }
    }

    /// Human label for the summary
    pub fn label(self) -> &'static str {
        match self {
            ReleaseMode::Patch => "bug fix (patch)",
            ReleaseMode::Minor => "feature update (minor)",
            ReleaseMode::Major => "breaking release (major)",
            ReleaseMode::Direct => "direct release (no version change)",
        }
    }
}

/// What happened, for the final summary and the exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReport {
    pub mode: ReleaseMode,
    pub final_version: String,
    pub publish_succeeded: bool,
    pub push_succeeded: bool,
}

/// Sequences the release steps over injected command and prompt seams.
pub struct ReleaseWorkflow<'a> {
    git: GitCli<'a>,
    npm: NpmCli<'a>,
    prompt: &'a mut dyn Prompt,
}

impl<'a> ReleaseWorkflow<'a> {
    pub fn new(runner: &'a dyn CommandRunner, prompt: &'a mut dyn Prompt) -> Self {
        ReleaseWorkflow {
            git: GitCli::new(runner),
            npm: NpmCli::new(runner),
            prompt,
        }
    }

    /// Drive one release from the status gate to the summary.
    ///
    /// Returns a report whenever the steps ran to the end, publish failure
    /// included. Errors are the aborting paths: a declined or failed commit
    /// gate, failed version resolution, or a cancelled prompt.
    pub fn run(&mut self, mode: ReleaseMode, current_version: &str) -> Result<ReleaseReport> {
        self.check_working_tree()?;

        let final_version = self.resolve_version(mode, current_version)?;

        let publish_succeeded = self.publish();
        let push_succeeded = publish_succeeded && self.push_tags();

        Ok(ReleaseReport {
            mode,
            final_version,
            publish_succeeded,
            push_succeeded,
        })
    }

    /// Status gate: a dirty tree needs the user's go-ahead and a commit.
    ///
    /// A failing status query is reported and waved through; if git is
    /// actually unusable the later steps surface their own errors.
    fn check_working_tree(&mut self) -> Result<()> {
        ui::display_status("Checking the working tree...");
        let status = match self.git.status() {
            Ok(status) => status,
            Err(e) => {
                ui::display_warning(&format!("could not check the working tree: {}", e));
                return Ok(());
            }
        };

        if status.clean {
            ui::display_success("working tree is clean");
            return Ok(());
        }

        ui::display_warning("uncommitted changes:");
        ui::display_changed_paths(&status.changed_paths);

        if !self.prompt.confirm("Commit them and continue?")? {
            return Err(ReleaseError::UserDeclined);
        }

        let message = self.prompt.read_line("Commit message (empty for default): ")?;
        let message = match message.trim() {
            "" => None,
            text => Some(text),
        };
        self.git.commit_all(message)?;
        ui::display_success("changes committed");
        Ok(())
    }

    /// Mode dispatch: bump through npm, or make sure the direct tag exists.
    fn resolve_version(&self, mode: ReleaseMode, current_version: &str) -> Result<String> {
        match mode.bump_kind() {
            Some(kind) => {
                ui::display_status(&format!("Bumping {} version...", kind));
                let new_version = self.npm.bump(kind)?;
                ui::display_success(&format!(
                    "version updated: {} -> {}",
                    current_version, new_version
                ));
                Ok(new_version)
            }
            None => {
                let tag = version::tag_for_version(current_version);
                if self.git.tag_exists(&tag)? {
                    ui::display_success(&format!("tag {} already exists, reusing it", tag));
                } else {
                    self.git.create_tag(&tag)?;
                    ui::display_success(&format!("created tag {}", tag));
                }
                Ok(current_version.to_string())
            }
        }
    }

    /// Publish is attempted exactly once; failure is reported, not fatal.
    fn publish(&self) -> bool {
        ui::display_status("Publishing to npm...");
        match self.npm.publish() {
            Ok(output) => {
                ui::display_success("published to npm");
                ui::display_command_output(&output);
                true
            }
            Err(e) => {
                ui::display_error(&e.to_string());
                false
            }
        }
    }

    /// Push the version commit and tags; only reached after a good publish.
    fn push_tags(&self) -> bool {
        ui::display_status("Pushing commits and tags...");
        match self.git.push_with_tags() {
            Ok(()) => {
                ui::display_success("pushed to remote");
                true
            }
            Err(e) => {
                ui::display_warning(&e.to_string());
                false
            }
        }
    }
}
