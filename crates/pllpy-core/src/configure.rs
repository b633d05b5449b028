//! Build configurator.
//!
//! Turns ambient state (the autowrap data directory and `PLL_INSTALL_DIR`)
//! into a single [`BuildDescription`]. Every failure here happens before
//! any tool is run.

use serde::Serialize;
use tracing::info;

use crate::domain::{Extension, PackageMetadata, SearchPaths};
use crate::paths::{
    DataDirResolution, InstallDirResolution, PathError, resolve_data_dir, resolve_install_dir,
};
use crate::ports::ResourceLocator;

/// Everything the build backend needs to produce the extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildDescription {
    pub package: PackageMetadata,
    pub extension: Extension,
    pub data_dir: DataDirResolution,
    pub install_dir: InstallDirResolution,
}

impl BuildDescription {
    /// Assemble a description from already-resolved directories.
    pub fn assemble(data_dir: DataDirResolution, install_dir: InstallDirResolution) -> Self {
        let mut search = SearchPaths::with_defaults(&data_dir.path);
        search.add_install_root(&install_dir);

        Self {
            package: PackageMetadata::pllpy(),
            extension: Extension::pllpy(search),
            data_dir,
            install_dir,
        }
    }
}

/// Resolve the data directory and installation root, then assemble the build.
///
/// The data directory is resolved before `PLL_INSTALL_DIR` is read.
pub fn configure(
    data_dir: Option<&str>,
    locator: &dyn ResourceLocator,
) -> Result<BuildDescription, PathError> {
    let data_dir = resolve_data_dir(data_dir, locator)?;
    let install_dir = resolve_install_dir()?;

    let description = BuildDescription::assemble(data_dir, install_dir);
    info!(
        extension = %description.extension.name,
        include_dirs = description.extension.include_dirs.len(),
        library_dirs = description.extension.library_dirs.len(),
        "configured build"
    );
    Ok(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use crate::paths::{DataDirSource, InstallDirSource, PLL_INSTALL_DIR_ENV};
    use crate::ports::ResourceError;
    use std::path::PathBuf;
    use tempfile::tempdir;

    struct FixedLocator(PathBuf);

    impl ResourceLocator for FixedLocator {
        fn resource_path(&self, _: &str, _: &str) -> Result<PathBuf, ResourceError> {
            Ok(self.0.clone())
        }
    }

    fn data_dir() -> DataDirResolution {
        DataDirResolution {
            path: PathBuf::from("/site/autowrap/data_files"),
            source: DataDirSource::PackageResource,
        }
    }

    #[test]
    fn assemble_without_root_uses_defaults_only() {
        let desc = BuildDescription::assemble(data_dir(), InstallDirResolution::unset());
        assert_eq!(
            desc.extension.include_dirs,
            vec![PathBuf::from("/site/autowrap/data_files")]
        );
        assert_eq!(
            desc.extension.library_dirs,
            vec![PathBuf::from("/usr/local/lib")]
        );
    }

    #[test]
    fn assemble_with_root_appends_subdirs() {
        let install = InstallDirResolution {
            path: Some(PathBuf::from("/opt/pll")),
            source: InstallDirSource::EnvVar,
        };
        let desc = BuildDescription::assemble(data_dir(), install);
        assert_eq!(
            desc.extension.include_dirs,
            vec![
                PathBuf::from("/site/autowrap/data_files"),
                PathBuf::from("/opt/pll/include")
            ]
        );
        assert_eq!(
            desc.extension.library_dirs,
            vec![PathBuf::from("/usr/local/lib"), PathBuf::from("/opt/pll/lib")]
        );
    }

    #[test]
    fn fixed_fields_do_not_depend_on_root() {
        let without = BuildDescription::assemble(data_dir(), InstallDirResolution::unset());
        let with = BuildDescription::assemble(
            data_dir(),
            InstallDirResolution {
                path: Some(PathBuf::from("/opt/pll")),
                source: InstallDirSource::EnvVar,
            },
        );
        assert_eq!(without.extension.sources, with.extension.sources);
        assert_eq!(without.extension.libraries, with.extension.libraries);
        assert_eq!(
            without.extension.extra_compile_args,
            with.extension.extra_compile_args
        );
        assert_eq!(without.package, with.package);
    }

    #[test]
    fn configure_rejects_invalid_root() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(PLL_INSTALL_DIR_ENV, "/nonexistent");

        let err = configure(None, &FixedLocator(PathBuf::from("/data"))).unwrap_err();
        assert!(matches!(err, PathError::InvalidInstallDir { .. }));
    }

    #[test]
    fn configure_reads_root_from_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        let root = tempdir().unwrap();
        let _env = EnvVarGuard::set(PLL_INSTALL_DIR_ENV, &root.path().to_string_lossy());

        let desc = configure(None, &FixedLocator(PathBuf::from("/data"))).unwrap();
        assert_eq!(desc.install_dir.source, InstallDirSource::EnvVar);
        assert_eq!(
            desc.extension.library_dirs.last(),
            Some(&root.path().join("lib"))
        );
    }

    #[test]
    fn description_serializes_to_json() {
        let desc = BuildDescription::assemble(data_dir(), InstallDirResolution::unset());
        let json = serde_json::to_value(&desc).unwrap();
        assert_eq!(json["extension"]["language"], "c++");
        assert_eq!(json["install_dir"]["source"], "Unset");
        assert_eq!(json["package"]["name"], "pllpy");
    }
}
