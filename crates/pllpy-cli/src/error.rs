//! CLI-specific error types and exit-code mapping.

use pllpy_core::PathError;
use pllpy_runtime::BuildError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Environment or flag configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 2: Invalid arguments
    /// - 78: Configuration error (`EX_CONFIG`)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Arguments(_) => 2,
            Self::Config(_) => 78,
        }
    }
}

const fn path_exit_code(err: &PathError) -> u8 {
    if err.is_configuration() { 78 } else { 74 }
}

const fn build_exit_code(err: &BuildError) -> u8 {
    if err.is_configuration() {
        return 78;
    }
    match err {
        // EX_OSERR: the toolchain is missing or a step failed
        BuildError::MissingDependencies { .. }
        | BuildError::Python(_)
        | BuildError::SpawnFailed { .. }
        | BuildError::StepFailed { .. } => 71,
        BuildError::Path(_)
        | BuildError::ArtifactMissing(_)
        | BuildError::ScriptMissing(_)
        | BuildError::Io(_) => 74,
        BuildError::Resource(_) | BuildError::Other(_) => 1,
    }
}

/// Exit code for an error bubbled up to `main`.
///
/// Walks the context chain and uses the first error with a known mapping.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli) = cause.downcast_ref::<CliError>() {
            return cli.exit_code();
        }
        if let Some(path) = cause.downcast_ref::<PathError>() {
            return path_exit_code(path);
        }
        if let Some(build) = cause.downcast_ref::<BuildError>() {
            return build_exit_code(build);
        }
    }
    1
}
