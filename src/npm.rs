//! npm operations issued through the command runner.

use crate::command::CommandRunner;
use crate::error::{ReleaseError, Result};
use crate::version;

/// Registry every publish goes to
pub const REGISTRY_URL: &str = "https://registry.npmjs.org/";

/// Wrapper around the `npm` binary for version bumps and publishing.
pub struct NpmCli<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> NpmCli<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        NpmCli { runner }
    }

    /// Bump the manifest version with `npm version <kind>`.
    ///
    /// npm rewrites package.json and creates the version commit and tag
    /// itself. The version it reports on stdout is parsed and returned;
    /// output that does not contain one is treated as a failed bump.
    pub fn bump(&self, kind: &str) -> Result<String> {
        let outcome = self
            .runner
            .run("npm", &["version", kind, "--git-tag-version=true"]);
        if !outcome.success {
            return Err(outcome.into_error("npm version"));
        }

        version::parse_reported_version(&outcome.stdout).ok_or_else(|| {
            ReleaseError::command_failed(
                "npm version",
                format!("unexpected output: {:?}", outcome.stdout.trim()),
            )
        })
    }

    /// Publish the package to the public registry.
    ///
    /// Returns npm's stdout so it can be echoed to the user.
    pub fn publish(&self) -> Result<String> {
        let registry = format!("--registry={}", REGISTRY_URL);
        let outcome = self
            .runner
            .run("npm", &["publish", "--access", "public", &registry]);
        if !outcome.success {
            return Err(outcome.into_error("npm publish"));
        }
        Ok(outcome.stdout)
    }
}
