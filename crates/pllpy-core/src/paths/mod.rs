//! Path resolution for the pllpy build.
//!
//! - Autowrap data directory (explicit or package lookup)
//! - External PLL installation root (`PLL_INSTALL_DIR`)
//! - Project and output directories
//!
//! Nothing here runs external processes; lookups that need an interpreter
//! go through [`crate::ports::ResourceLocator`].

mod data_dir;
mod ensure;
mod error;
mod install_dir;
mod platform;
mod resolver;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::PathError;

pub use data_dir::{
    DATA_FILES_PACKAGE, DATA_FILES_RESOURCE, DataDirResolution, DataDirSource, resolve_data_dir,
};
pub use install_dir::{
    InstallDirResolution, InstallDirSource, PLL_INSTALL_DIR_ENV, resolve_install_dir,
    resolve_install_dir_from,
};

pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};
pub use platform::resolve_project_dir;

pub use resolver::ResolvedPaths;
