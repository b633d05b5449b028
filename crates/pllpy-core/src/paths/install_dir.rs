//! External PLL installation root resolution.
//!
//! The root comes only from the `PLL_INSTALL_DIR` environment variable.
//! When it is absent the build falls back to the default library path and
//! whatever the compiler finds on its own.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::error::PathError;

/// Environment variable naming the PLL installation root.
pub const PLL_INSTALL_DIR_ENV: &str = "PLL_INSTALL_DIR";

/// How the installation root was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InstallDirSource {
    /// Taken from `PLL_INSTALL_DIR`.
    EnvVar,
    /// `PLL_INSTALL_DIR` was unset or empty.
    Unset,
}

/// Resolution result for the installation root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallDirResolution {
    /// The validated root, if any.
    pub path: Option<PathBuf>,
    /// How the root was determined.
    pub source: InstallDirSource,
}

impl InstallDirResolution {
    /// A resolution with no installation root.
    pub const fn unset() -> Self {
        Self {
            path: None,
            source: InstallDirSource::Unset,
        }
    }

    /// `<root>/include`, when a root is set.
    pub fn include_dir(&self) -> Option<PathBuf> {
        self.path.as_deref().map(|root| root.join("include"))
    }

    /// `<root>/lib`, when a root is set.
    pub fn lib_dir(&self) -> Option<PathBuf> {
        self.path.as_deref().map(|root| root.join("lib"))
    }
}

/// Resolve the installation root from the current environment.
pub fn resolve_install_dir() -> Result<InstallDirResolution, PathError> {
    resolve_install_dir_from(env::var_os(PLL_INSTALL_DIR_ENV).as_deref())
}

/// Resolve the installation root from a raw variable value.
///
/// Unset and empty values both mean "no root". Any other value must name an
/// existing directory. No `~` expansion is done; relative values are made
/// absolute against the current directory, since tools run from the project
/// directory.
pub fn resolve_install_dir_from(raw: Option<&OsStr>) -> Result<InstallDirResolution, PathError> {
    let Some(raw) = raw.filter(|value| !value.is_empty()) else {
        debug!("{PLL_INSTALL_DIR_ENV} not set, using default search paths only");
        return Ok(InstallDirResolution::unset());
    };

    let path = Path::new(raw);
    if !path.is_dir() {
        return Err(PathError::InvalidInstallDir {
            value: raw.to_string_lossy().into_owned(),
        });
    }

    let root = std::path::absolute(path).map_err(|e| PathError::CurrentDirError(e.to_string()))?;
    debug!(root = %root.display(), "using PLL installation root");
    Ok(InstallDirResolution {
        path: Some(root),
        source: InstallDirSource::EnvVar,
    })
}
