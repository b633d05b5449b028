//! Installation of the built extension and its scripts.

use std::fs;
use std::path::{Path, PathBuf};

use pllpy_core::paths::{DirectoryCreationStrategy, ensure_directory};
use pllpy_core::{BuildDescription, PathError};
use tracing::info;

use crate::error::{BuildError, BuildResult};
use crate::validate::{load_record, validate_artifact};

/// Destination directories for installed files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    /// Receives executable scripts
    pub bin_dir: PathBuf,
    /// Receives the extension module
    pub site_dir: PathBuf,
    /// Whether a missing `site_dir` is created
    pub site_dir_strategy: DirectoryCreationStrategy,
}

impl InstallTarget {
    /// `<prefix>/bin` and `<prefix>/lib/python`.
    pub fn from_prefix(prefix: &Path) -> Self {
        Self {
            bin_dir: prefix.join("bin"),
            site_dir: prefix.join("lib").join("python"),
            site_dir_strategy: DirectoryCreationStrategy::AutoCreate,
        }
    }

    /// Put the extension into an existing directory, e.g. a venv's
    /// site-packages. A missing directory is an error rather than created.
    #[must_use]
    pub fn with_site_dir(mut self, site_dir: PathBuf) -> Self {
        self.site_dir = site_dir;
        self.site_dir_strategy = DirectoryCreationStrategy::Disallow;
        self
    }

    /// Per-user prefix, `~/.local`.
    pub fn user_default() -> BuildResult<Self> {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        Ok(Self::from_prefix(&home.join(".local")))
    }
}

/// Files written by an install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledFiles {
    pub extension: PathBuf,
    pub scripts: Vec<PathBuf>,
}

/// Install the extension built in `build_dir` and every declared script.
///
/// Scripts are resolved against `project_dir`. All sources are checked
/// before anything is copied.
pub fn install(
    description: &BuildDescription,
    project_dir: &Path,
    build_dir: &Path,
    target: &InstallTarget,
) -> BuildResult<InstalledFiles> {
    let record = load_record(build_dir)?;
    validate_artifact(&record.artifact)?;

    let scripts: Vec<PathBuf> = description
        .package
        .scripts
        .iter()
        .map(|script| project_dir.join(script))
        .collect();
    if let Some(missing) = scripts.iter().find(|script| !script.is_file()) {
        return Err(BuildError::ScriptMissing(missing.clone()));
    }

    ensure_directory(&target.site_dir, target.site_dir_strategy)?;
    let extension = copy_into(&record.artifact, &target.site_dir)?;
    info!(path = %extension.display(), "installed extension");

    let mut installed_scripts = Vec::with_capacity(scripts.len());
    if !scripts.is_empty() {
        ensure_directory(&target.bin_dir, DirectoryCreationStrategy::AutoCreate)?;
    }
    for script in &scripts {
        let dest = copy_into(script, &target.bin_dir)?;
        make_executable(&dest)?;
        info!(path = %dest.display(), "installed script");
        installed_scripts.push(dest);
    }

    Ok(InstalledFiles {
        extension,
        scripts: installed_scripts,
    })
}

fn copy_into(source: &Path, dir: &Path) -> BuildResult<PathBuf> {
    let name = source
        .file_name()
        .ok_or_else(|| BuildError::Other(format!("not a file path: {}", source.display())))?;
    let dest = dir.join(name);
    fs::copy(source, &dest)?;
    Ok(dest)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> BuildResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> BuildResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pllpy_core::{BuildRecord, DataDirResolution, DataDirSource, InstallDirResolution};
    use tempfile::tempdir;

    fn description() -> BuildDescription {
        BuildDescription::assemble(
            DataDirResolution {
                path: PathBuf::from("/data"),
                source: DataDirSource::Explicit,
            },
            InstallDirResolution::unset(),
        )
    }

    fn fake_build(project: &Path) -> PathBuf {
        let build_dir = project.join("build");
        let artifact = build_dir.join("lib").join("pllpy.so");
        fs::create_dir_all(artifact.parent().unwrap()).unwrap();
        fs::write(&artifact, b"\x7fELF").unwrap();
        BuildRecord::new(&description(), "g++", &artifact)
            .save(&BuildRecord::path_in(&build_dir))
            .unwrap();

        fs::create_dir_all(project.join("bin")).unwrap();
        fs::write(project.join("bin/pll"), "#!/usr/bin/env python\n").unwrap();
        build_dir
    }

    #[test]
    fn prefix_layout() {
        let target = InstallTarget::from_prefix(Path::new("/usr/local"));
        assert_eq!(target.bin_dir, PathBuf::from("/usr/local/bin"));
        assert_eq!(target.site_dir, PathBuf::from("/usr/local/lib/python"));
    }

    #[test]
    fn installs_extension_and_script() {
        let project = tempdir().unwrap();
        let prefix = tempdir().unwrap();
        let build_dir = fake_build(project.path());
        let target = InstallTarget::from_prefix(prefix.path());

        let files = install(&description(), project.path(), &build_dir, &target).unwrap();

        assert_eq!(files.extension, prefix.path().join("lib/python/pllpy.so"));
        assert_eq!(files.scripts, vec![prefix.path().join("bin/pll")]);
        assert!(files.extension.is_file());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&files.scripts[0]).unwrap().permissions().mode();
            assert_ne!(mode & 0o111, 0);
        }
    }

    #[test]
    fn explicit_site_dir_must_exist() {
        let project = tempdir().unwrap();
        let prefix = tempdir().unwrap();
        let build_dir = fake_build(project.path());
        let missing = prefix.path().join("venv/site-packages");
        let target = InstallTarget::from_prefix(prefix.path()).with_site_dir(missing.clone());

        let err = install(&description(), project.path(), &build_dir, &target).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Path(PathError::DirectoryNotFound(_))
        ));
        assert!(!missing.exists());
    }

    #[test]
    fn explicit_site_dir_receives_extension() {
        let project = tempdir().unwrap();
        let prefix = tempdir().unwrap();
        let site = tempdir().unwrap();
        let build_dir = fake_build(project.path());
        let target =
            InstallTarget::from_prefix(prefix.path()).with_site_dir(site.path().to_path_buf());

        let files = install(&description(), project.path(), &build_dir, &target).unwrap();
        assert_eq!(files.extension, site.path().join("pllpy.so"));
    }

    #[test]
    fn install_before_build_fails() {
        let project = tempdir().unwrap();
        let prefix = tempdir().unwrap();
        let target = InstallTarget::from_prefix(prefix.path());

        let err = install(
            &description(),
            project.path(),
            &project.path().join("build"),
            &target,
        )
        .unwrap_err();
        assert!(matches!(err, BuildError::ArtifactMissing(_)));
        assert!(!target.site_dir.exists());
    }

    #[test]
    fn missing_script_copies_nothing() {
        let project = tempdir().unwrap();
        let prefix = tempdir().unwrap();
        let build_dir = fake_build(project.path());
        fs::remove_file(project.path().join("bin/pll")).unwrap();
        let target = InstallTarget::from_prefix(prefix.path());

        let err = install(&description(), project.path(), &build_dir, &target).unwrap_err();
        assert!(matches!(err, BuildError::ScriptMissing(_)));
        assert!(!target.site_dir.exists());
    }
}
