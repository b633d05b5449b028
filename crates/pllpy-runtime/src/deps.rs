//! Dependency checking for building the extension.

use std::path::PathBuf;

use pllpy_core::domain::PLL_LIBRARY;
use pllpy_core::{Dependency, DependencyStatus, PLL_INSTALL_DIR_ENV};

use crate::detect::{Tool, find_cython, find_library, select_cxx_compiler};
use crate::error::{BuildError, BuildResult};
use crate::python::PythonInterpreter;

fn status_from(version: Option<String>) -> DependencyStatus {
    version.map_or(DependencyStatus::Missing, |version| {
        DependencyStatus::Present { version }
    })
}

/// Check every tool and library the build needs.
///
/// `library_dirs` are the linker search directories of the configured
/// extension; the PLL library is reported optional because the compiler
/// may still find it in its own default paths.
pub fn check_dependencies(python: &PythonInterpreter, library_dirs: &[PathBuf]) -> Vec<Dependency> {
    let python_dep = Dependency::required(python.program(), "Interpreter the extension targets")
        .with_status(status_from(python.version()))
        .with_hint("Install Python 3 with development headers (python3-dev)");

    let cython_dep = Dependency::required("cython", "Translates pllpy.pyx to C++")
        .with_status(status_from(find_cython(python).and_then(|t| t.version())))
        .with_hint("pip install cython");

    let compiler = select_cxx_compiler();
    let compiler_name = compiler
        .as_ref()
        .map_or_else(|| "c++".to_string(), ToString::to_string);
    let compiler_dep = Dependency::required(compiler_name, "Compiles and links native sources")
        .with_status(status_from(compiler.as_ref().and_then(Tool::version)))
        .with_hint("Install g++ or clang++, or set CXX");

    let library_status = find_library(PLL_LIBRARY, library_dirs).map_or(
        DependencyStatus::Missing,
        |path| DependencyStatus::Present {
            version: path.display().to_string(),
        },
    );
    let library_dep = Dependency::optional(format!("lib{PLL_LIBRARY}"), "Phylogenetic Likelihood Library")
        .with_status(library_status)
        .with_hint(format!("Install PLL and set {PLL_INSTALL_DIR_ENV} to its prefix"));

    vec![python_dep, cython_dep, compiler_dep, library_dep]
}

/// Fail with the names of all missing required dependencies.
pub fn ensure_dependencies(dependencies: &[Dependency]) -> BuildResult<()> {
    let missing: Vec<&str> = dependencies
        .iter()
        .filter(|d| d.is_blocking())
        .map(|d| d.name.as_str())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(BuildError::MissingDependencies {
            missing: missing.join(", "),
        })
    }
}
