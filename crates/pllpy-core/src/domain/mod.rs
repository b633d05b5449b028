//! Domain types describing what gets built.

mod dependency;
mod extension;
mod package;

pub use dependency::{Dependency, DependencyStatus};
pub use extension::{
    CXX_STANDARD_FLAG, DEFAULT_LIBRARY_DIR, Extension, Language, PLL_LIBRARY, PLLPY_MODULE,
    PLLPY_SOURCES, SearchPaths,
};
pub use package::PackageMetadata;
