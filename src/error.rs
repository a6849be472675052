use thiserror::Error;

/// Unified error type for release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("package.json not found in the current directory")]
    ManifestMissing,

    #[error("package.json is not valid JSON: {0}")]
    ManifestMalformed(String),

    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("{action} failed: {detail}")]
    CommandFailed { action: String, detail: String },

    #[error("release aborted: working tree is not clean")]
    UserDeclined,

    #[error("operation cancelled")]
    UserCancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in npm-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a malformed-manifest error with context
    pub fn manifest_malformed(msg: impl Into<String>) -> Self {
        ReleaseError::ManifestMalformed(msg.into())
    }

    /// Create a command-not-found error with context
    pub fn command_not_found(msg: impl Into<String>) -> Self {
        ReleaseError::CommandNotFound(msg.into())
    }

    /// Create a command-failed error for a named action
    pub fn command_failed(action: impl Into<String>, detail: impl Into<String>) -> Self {
        ReleaseError::CommandFailed {
            action: action.into(),
            detail: detail.into(),
        }
    }
}
