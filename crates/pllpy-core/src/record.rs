//! Build record persisted next to the built extension.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::configure::BuildDescription;

/// File name of the record inside the build directory.
pub const BUILD_RECORD_FILE: &str = "build-record.json";

/// What was built, when, and with which flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRecord {
    /// Package version at build time
    pub package_version: String,
    /// When the build finished
    pub build_date: DateTime<Utc>,
    /// Compiler used for native sources
    pub compiler: String,
    /// Path of the built extension module
    pub artifact: PathBuf,
    pub include_dirs: Vec<PathBuf>,
    pub library_dirs: Vec<PathBuf>,
    pub libraries: Vec<String>,
    pub compile_args: Vec<String>,
}

impl BuildRecord {
    /// Create a record for a build that just finished.
    pub fn new(description: &BuildDescription, compiler: &str, artifact: &Path) -> Self {
        let ext = &description.extension;
        Self {
            package_version: description.package.version.clone(),
            build_date: Utc::now(),
            compiler: compiler.to_string(),
            artifact: artifact.to_path_buf(),
            include_dirs: ext.include_dirs.clone(),
            library_dirs: ext.library_dirs.clone(),
            libraries: ext.libraries.clone(),
            compile_args: ext.extra_compile_args.clone(),
        }
    }

    /// Record path inside `build_dir`.
    pub fn path_in(build_dir: &Path) -> PathBuf {
        build_dir.join(BUILD_RECORD_FILE)
    }

    /// Save record to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize build record")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write build record {}", path.display()))?;
        Ok(())
    }

    /// Load record from file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read build record {}", path.display()))?;
        let record = serde_json::from_str(&json).context("Failed to parse build record")?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::{DataDirResolution, DataDirSource, InstallDirResolution};
    use tempfile::tempdir;

    #[test]
    fn record_survives_save_and_load() {
        let dir = tempdir().unwrap();
        let description = BuildDescription::assemble(
            DataDirResolution {
                path: PathBuf::from("/data"),
                source: DataDirSource::Explicit,
            },
            InstallDirResolution::unset(),
        );
        let record = BuildRecord::new(&description, "g++", &dir.path().join("lib/pllpy.so"));

        let path = BuildRecord::path_in(dir.path());
        record.save(&path).unwrap();
        let loaded = BuildRecord::load(&path).unwrap();

        assert_eq!(loaded, record);
        assert_eq!(loaded.libraries, ["pll-sse3-pthreads"]);
    }

    #[test]
    fn loading_garbage_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(BUILD_RECORD_FILE);
        fs::write(&path, "not json").unwrap();
        assert!(BuildRecord::load(&path).is_err());
    }
}
