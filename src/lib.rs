pub mod command;
pub mod error;
pub mod git;
pub mod manifest;
pub mod npm;
pub mod release;
pub mod ui;
pub mod version;

pub use error::{ReleaseError, Result};
