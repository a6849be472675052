//! Version text handling: tag prefixes and the output of `npm version`.

use semver::Version;

/// Conventional tag prefix distinguishing "v1.2.3" from "1.2.3"
pub const TAG_PREFIX: char = 'v';

/// Strip one leading tag-prefix character, if present.
///
/// Exactly one character is removed; "vv1.2.3" keeps its second prefix and
/// fails semver validation downstream.
pub fn strip_tag_prefix(text: &str) -> &str {
    text.strip_prefix(['v', 'V']).unwrap_or(text)
}

/// Extract the version `npm version` reports on stdout.
///
/// npm prints the new version as the last line ("v2.3.2"); lifecycle scripts
/// configured in the package may write lines above it. The prefix is dropped
/// and the remainder must be a well-formed semantic version, otherwise `None`.
pub fn parse_reported_version(output: &str) -> Option<String> {
    let line = output.lines().rev().find(|line| !line.trim().is_empty())?;
    let bare = strip_tag_prefix(line.trim());
    Version::parse(bare).ok()?;
    Some(bare.to_string())
}

/// Tag name for releasing `version` as-is
pub fn tag_for_version(version: &str) -> String {
    format!("{}{}", TAG_PREFIX, strip_tag_prefix(version.trim()))
}
