//! Error types for toolchain and build operations.
//!
//! A single error type for everything that shells out, so the CLI can map
//! failures to exit codes without inspecting strings.

use std::path::PathBuf;
use thiserror::Error;

use pllpy_core::{PathError, ResourceError};

/// Errors that can occur while building or installing the extension.
#[derive(Debug, Error)]
pub enum BuildError {
    // === Configuration ===
    /// Directory resolution failed
    #[error(transparent)]
    Path(#[from] PathError),

    /// Package resource lookup failed
    #[error(transparent)]
    Resource(#[from] ResourceError),

    // === Toolchain ===
    /// Required build tools are missing
    #[error("Missing build dependencies: {missing}")]
    MissingDependencies { missing: String },

    /// Querying the Python interpreter failed
    #[error("Python introspection failed: {0}")]
    Python(String),

    /// A tool could not be started
    #[error("Failed to run {program}: {reason}")]
    SpawnFailed { program: String, reason: String },

    /// A tool ran and exited unsuccessfully
    #[error("{step} failed (exit code: {code})")]
    StepFailed { step: String, code: i32 },

    // === Artifacts ===
    /// The extension has not been built yet
    #[error("Built extension not found at {0}. Run 'pllpy-build build' first.")]
    ArtifactMissing(PathBuf),

    /// A declared script is missing from the project
    #[error("Script not found: {0}")]
    ScriptMissing(PathBuf),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl BuildError {
    /// Create an Other error from any displayable error
    pub fn other(err: impl std::fmt::Display) -> Self {
        Self::Other(err.to_string())
    }

    /// Whether the failure comes from user configuration rather than the toolchain.
    pub const fn is_configuration(&self) -> bool {
        match self {
            Self::Path(err) => err.is_configuration(),
            Self::Resource(_) => true,
            _ => false,
        }
    }
}

/// Result type alias for build operations
pub type BuildResult<T> = Result<T, BuildError>;
