//! Platform-specific path helpers.
//!
//! Private helpers for turning user-supplied strings into absolute paths.
//! Public API is exposed through sibling modules.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

/// Resolve the project directory holding `src/` and `bin/`.
///
/// Uses the explicit path if given, otherwise the current directory.
pub fn resolve_project_dir(explicit: Option<&str>) -> Result<PathBuf, PathError> {
    match explicit {
        Some(raw) => normalize_user_path(raw),
        None => env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string())),
    }
}
