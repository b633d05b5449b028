//! Build configuration for the `pllpy` extension module.
//!
//! This crate is pure: it resolves directories, describes the extension and
//! persists build records. Running Cython and the C++ toolchain lives in
//! `pllpy-runtime`.
#![deny(unused_crate_dependencies)]

pub mod configure;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod record;

pub use configure::{BuildDescription, configure};
pub use domain::{
    Dependency, DependencyStatus, Extension, Language, PackageMetadata, SearchPaths,
};
pub use paths::{
    DataDirResolution, DataDirSource, InstallDirResolution, InstallDirSource,
    PLL_INSTALL_DIR_ENV, PathError, ResolvedPaths, resolve_data_dir, resolve_install_dir,
};
pub use ports::{ResourceError, ResourceLocator};
pub use record::{BUILD_RECORD_FILE, BuildRecord};
