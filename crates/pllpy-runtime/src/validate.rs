//! Artifact validation and build status reporting.

use std::path::Path;

use anyhow::Result;
use pllpy_core::BuildRecord;

use crate::error::{BuildError, BuildResult};

/// Validate that the built extension is present and non-empty.
pub fn validate_artifact(path: &Path) -> BuildResult<()> {
    if !path.exists() {
        return Err(BuildError::ArtifactMissing(path.to_path_buf()));
    }

    if !path.is_file() {
        return Err(BuildError::Other(format!(
            "extension path is not a file: {}",
            path.display()
        )));
    }

    if path.metadata()?.len() == 0 {
        return Err(BuildError::Other(format!(
            "extension is empty, rebuild it: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Load the build record from `build_dir`, failing if nothing was built.
pub fn load_record(build_dir: &Path) -> BuildResult<BuildRecord> {
    let record_path = BuildRecord::path_in(build_dir);
    if !record_path.exists() {
        return Err(BuildError::ArtifactMissing(build_dir.to_path_buf()));
    }
    BuildRecord::load(&record_path).map_err(BuildError::other)
}

/// Handle the status command
pub fn handle_status(build_dir: &Path) -> Result<()> {
    let record = match load_record(build_dir) {
        Ok(record) => record,
        Err(BuildError::ArtifactMissing(_)) => {
            println!("Status: Not built");
            println!();
            println!("Run 'pllpy-build build' to build the extension");
            return Ok(());
        }
        Err(e) => {
            println!("Status: Unknown");
            println!("Warning: Could not load build record: {e}");
            return Ok(());
        }
    };

    println!("Status: Built");
    println!("Extension: {}", record.artifact.display());

    match validate_artifact(&record.artifact) {
        Ok(()) => println!("Health: ✓ Present"),
        Err(e) => {
            println!("Health: ✗ {e}");
            return Ok(());
        }
    }

    println!();
    println!("Build Information:");
    println!("  Version: {}", record.package_version);
    println!(
        "  Built: {}",
        record.build_date.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  Compiler: {}", record.compiler);
    println!("  Compile flags: {}", record.compile_args.join(" "));
    println!("  Libraries: {}", record.libraries.join(" "));
    for dir in &record.library_dirs {
        println!("  Library dir: {}", dir.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn validate_nonexistent() {
        let result = validate_artifact(Path::new("/nonexistent/pllpy.so"));
        assert!(matches!(result, Err(BuildError::ArtifactMissing(_))));
    }

    #[test]
    fn validate_not_a_file() {
        let dir = tempdir().unwrap();
        assert!(validate_artifact(dir.path()).is_err());
    }

    #[test]
    fn validate_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pllpy.so");
        fs::write(&path, b"").unwrap();
        assert!(validate_artifact(&path).is_err());
    }

    #[test]
    fn validate_real_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pllpy.so");
        fs::write(&path, b"\x7fELF").unwrap();
        assert!(validate_artifact(&path).is_ok());
    }

    #[test]
    fn load_record_without_build_is_missing() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            load_record(dir.path()),
            Err(BuildError::ArtifactMissing(_))
        ));
    }

    #[test]
    fn status_without_build_succeeds() {
        let dir = tempdir().unwrap();
        assert!(handle_status(dir.path()).is_ok());
    }
}
