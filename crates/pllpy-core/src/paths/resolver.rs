//! Resolved build paths in a single struct, for the `paths` command and tests.

use std::path::PathBuf;

use super::{DataDirSource, InstallDirSource, PathError};
use crate::configure::{BuildDescription, configure};
use crate::ports::ResourceLocator;

/// All resolved build paths captured at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Directory holding the autowrap data files
    pub data_dir: PathBuf,
    /// How the data directory was resolved
    pub data_source: DataDirSource,
    /// External PLL installation root, if configured
    pub install_dir: Option<PathBuf>,
    /// How the installation root was resolved
    pub install_source: InstallDirSource,
    /// Include directories passed to the compiler, in order
    pub include_dirs: Vec<PathBuf>,
    /// Library directories passed to the linker, in order
    pub library_dirs: Vec<PathBuf>,
}

impl ResolvedPaths {
    /// Resolve all paths from the current environment.
    ///
    /// Goes through [`configure`], so the search paths shown are exactly the
    /// ones the build uses.
    pub fn resolve(
        data_dir: Option<&str>,
        locator: &dyn ResourceLocator,
    ) -> Result<Self, PathError> {
        configure(data_dir, locator).map(|description| Self::from_description(&description))
    }

    /// Paths of an already configured build.
    pub fn from_description(description: &BuildDescription) -> Self {
        Self {
            data_dir: description.data_dir.path.clone(),
            data_source: description.data_dir.source,
            install_dir: description.install_dir.path.clone(),
            install_source: description.install_dir.source,
            include_dirs: description.extension.include_dirs.clone(),
            library_dirs: description.extension.library_dirs.clone(),
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(":")
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "data_dir = {}", self.data_dir.display())?;
        writeln!(f, "data_source = {:?}", self.data_source)?;
        match &self.install_dir {
            Some(dir) => writeln!(f, "install_dir = {}", dir.display())?,
            None => writeln!(f, "install_dir = (unset)")?,
        }
        writeln!(f, "install_source = {:?}", self.install_source)?;
        writeln!(f, "include_dirs = {}", join_paths(&self.include_dirs))?;
        write!(f, "library_dirs = {}", join_paths(&self.library_dirs))
    }
}
