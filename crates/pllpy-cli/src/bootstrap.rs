//! CLI composition root.
//!
//! Wires the Python-backed resource locator into the core configurator and
//! resolves the project directory once per invocation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use pllpy_core::paths::resolve_project_dir;
use pllpy_core::{BuildDescription, DataDirSource, PathError, ResolvedPaths, configure};
use pllpy_runtime::{PythonInterpreter, PythonResourceLocator};

use crate::error::CliError;
use crate::parser::Cli;

/// Dependencies shared by all command handlers.
pub struct CliContext {
    pub project_dir: PathBuf,
    pub data_dir: Option<String>,
    pub python: PythonInterpreter,
    pub locator: PythonResourceLocator,
}

impl CliContext {
    /// Build the context from parsed global arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, PathError> {
        let project_dir = resolve_project_dir(cli.project_dir.as_deref())?;
        let python = cli
            .python
            .as_deref()
            .map_or_else(PythonInterpreter::from_env, PythonInterpreter::new);

        Ok(Self {
            project_dir,
            data_dir: cli.data_dir.clone(),
            locator: PythonResourceLocator::new(python.clone()),
            python,
        })
    }

    /// Resolve directories and assemble the build description.
    ///
    /// An explicit `--data-dir` must exist; looked-up paths are taken as the
    /// package reports them.
    pub fn configure(&self) -> Result<BuildDescription> {
        let description = configure(self.data_dir.as_deref(), &self.locator)?;
        if description.data_dir.source == DataDirSource::Explicit
            && !description.data_dir.path.is_dir()
        {
            return Err(CliError::Config(format!(
                "data directory {} does not exist",
                description.data_dir.path.display()
            ))
            .into());
        }
        Ok(description)
    }

    /// Resolve all paths for display.
    pub fn resolve_paths(&self) -> Result<ResolvedPaths, PathError> {
        ResolvedPaths::resolve(self.data_dir.as_deref(), &self.locator)
    }

    /// Build directory from a flag, relative to the project directory.
    pub fn build_dir(&self, explicit: Option<&str>) -> PathBuf {
        explicit.map_or_else(
            || self.project_dir.join("build"),
            |raw| self.project_relative(raw),
        )
    }

    fn project_relative(&self, raw: &str) -> PathBuf {
        let path = Path::new(raw);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_dir.join(path)
        }
    }
}
