//! Compiled extension descriptor.
//!
//! An [`Extension`] is the complete description of one native module: its
//! sources, language, search paths, link libraries and extra compiler
//! flags. Only the search paths depend on the environment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths::InstallDirResolution;

/// Default linker search directory, always first in the library path list.
pub const DEFAULT_LIBRARY_DIR: &str = "/usr/local/lib";

/// Importable module name of the extension.
pub const PLLPY_MODULE: &str = "pllpy";

/// Project-relative sources of the extension.
pub const PLLPY_SOURCES: [&str; 2] = ["src/pllpy.pyx", "src/pllml.cpp"];

/// Native PLL library linked into the extension.
pub const PLL_LIBRARY: &str = "pll-sse3-pthreads";

/// Language standard the native sources are compiled with.
pub const CXX_STANDARD_FLAG: &str = "-std=c++11";

/// Source language of an extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "c++")]
    Cxx,
}

impl Language {
    /// Display name used in logs and status output.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cxx => "C++",
        }
    }

    /// File extension Cython should emit for this language.
    pub const fn generated_extension(self) -> &'static str {
        match self {
            Self::Cxx => "cpp",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Compiler and linker search directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPaths {
    pub include_dirs: Vec<PathBuf>,
    pub library_dirs: Vec<PathBuf>,
}

impl SearchPaths {
    /// `[data_dir]` for includes and `[/usr/local/lib]` for libraries.
    pub fn with_defaults(data_dir: &Path) -> Self {
        Self {
            include_dirs: vec![data_dir.to_path_buf()],
            library_dirs: vec![PathBuf::from(DEFAULT_LIBRARY_DIR)],
        }
    }

    /// Append `<root>/include` and `<root>/lib` after the existing entries.
    ///
    /// Does nothing when no root is configured.
    pub fn add_install_root(&mut self, install: &InstallDirResolution) {
        self.include_dirs.extend(install.include_dir());
        self.library_dirs.extend(install.lib_dir());
    }
}

/// A compiled extension module build target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    pub name: String,
    pub sources: Vec<PathBuf>,
    pub language: Language,
    pub include_dirs: Vec<PathBuf>,
    pub libraries: Vec<String>,
    pub library_dirs: Vec<PathBuf>,
    pub extra_compile_args: Vec<String>,
}

impl Extension {
    /// The `pllpy` extension with the given search paths.
    pub fn pllpy(search: SearchPaths) -> Self {
        Self {
            name: PLLPY_MODULE.to_string(),
            sources: PLLPY_SOURCES.iter().map(PathBuf::from).collect(),
            language: Language::Cxx,
            include_dirs: search.include_dirs,
            libraries: vec![PLL_LIBRARY.to_string()],
            library_dirs: search.library_dirs,
            extra_compile_args: vec![CXX_STANDARD_FLAG.to_string()],
        }
    }

    /// Sources that must be translated by Cython first.
    pub fn cython_sources(&self) -> impl Iterator<Item = &Path> {
        self.sources
            .iter()
            .map(PathBuf::as_path)
            .filter(|p| is_cython_source(p))
    }

    /// Sources handed to the native compiler as-is.
    pub fn native_sources(&self) -> impl Iterator<Item = &Path> {
        self.sources
            .iter()
            .map(PathBuf::as_path)
            .filter(|p| !is_cython_source(p))
    }
}

fn is_cython_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "pyx")
}
