//! Error types for scaffolding operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Project root does not exist: {}", path.display())]
    RootNotFound { path: PathBuf },

    /// Root metadata could not be read for a reason other than absence
    #[error("Failed to inspect project root {}: {source}", path.display())]
    InspectRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Project root is not a directory: {}", path.display())]
    RootNotADirectory { path: PathBuf },

    /// A bundle path is taken by something other than a directory
    #[error("Path exists but is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not determine home directory")]
    HomeDirUnavailable,
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
