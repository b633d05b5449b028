//! Path-related error types.
//!
//! Provides semantic errors for path resolution without exposing
//! adapter-specific concerns such as exit codes.

use std::path::PathBuf;
use thiserror::Error;

use crate::ports::ResourceError;

/// Errors that can occur during path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// `PLL_INSTALL_DIR` is set but does not name a directory.
    #[error("PLL_INSTALL_DIR found in env as \"{value}\", but it is not a valid directory")]
    InvalidInstallDir { value: String },

    /// The package resource holding the data files could not be located.
    #[error("Cannot resolve data directory: {0}")]
    Resource(#[from] ResourceError),

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// A directory does not exist and creation was not allowed.
    #[error("Directory {0} does not exist")]
    DirectoryNotFound(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// A directory is not writable.
    #[error("Directory {path} is not writable: {reason}")]
    NotWritable { path: PathBuf, reason: String },

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}

impl PathError {
    /// Whether this error stems from user-supplied configuration
    /// (environment or flags) rather than the filesystem.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidInstallDir { .. } | Self::Resource(_) | Self::EmptyPath
        )
    }
}
