use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ReleaseError, Result};

/// Name of the manifest file npm reads and writes
pub const MANIFEST_FILE: &str = "package.json";

/// Version shown (and tagged, in direct mode) when the manifest has none
pub const DEFAULT_VERSION: &str = "1.0.0";

/// The slice of package.json this tool cares about.
///
/// npm owns the file: only `version` is read here, and it is never written
/// directly - `npm version` is delegated the authoritative update.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Manifest {
    #[serde(default)]
    pub version: Option<String>,
}

impl Manifest {
    /// Manifest version, or the display default when the field is absent
    pub fn version_or_default(&self) -> String {
        self.version
            .clone()
            .unwrap_or_else(|| DEFAULT_VERSION.to_string())
    }
}

/// Loads the manifest from `dir`.
///
/// # Returns
/// * `Ok(Manifest)` - Parsed manifest (the version field may be absent)
/// * `Err(ReleaseError::ManifestMissing)` - No package.json in `dir`
/// * `Err(ReleaseError::ManifestMalformed)` - File exists but is not a JSON
///   document of the expected shape
pub fn load(dir: &Path) -> Result<Manifest> {
    let path = dir.join(MANIFEST_FILE);
    if !path.exists() {
        return Err(ReleaseError::ManifestMissing);
    }

    let raw = fs::read_to_string(&path)?;
    serde_json::from_str(&raw).map_err(|e| ReleaseError::manifest_malformed(e.to_string()))
}
