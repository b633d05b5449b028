//! Python interpreter introspection.
//!
//! The extension is built for a specific interpreter: its headers, its
//! extension-module suffix and the packages it can import (autowrap) all
//! come from asking it directly.

use std::env;
use std::path::PathBuf;
use std::process::Command;

use pllpy_core::{ResourceError, ResourceLocator};
use tracing::debug;

use crate::error::{BuildError, BuildResult};

/// Environment variable selecting the interpreter.
pub const PYTHON_ENV: &str = "PYTHON";

/// Interpreter used when `PYTHON` is unset.
pub const DEFAULT_PYTHON: &str = "python3";

/// Exit status the lookup script uses for "package not importable".
const PACKAGE_NOT_FOUND_STATUS: i32 = 3;

const RESOURCE_SCRIPT: &str = r"
import importlib.util, os, sys
spec = importlib.util.find_spec(sys.argv[1])
if spec is None:
    sys.exit(3)
locations = list(spec.submodule_search_locations or [])
base = locations[0] if locations else os.path.dirname(spec.origin)
print(os.path.join(base, sys.argv[2]))
";

const CONFIG_SCRIPT: &str = r"
import sysconfig
print(sysconfig.get_paths()['include'])
print(sysconfig.get_config_var('EXT_SUFFIX') or '.so')
";

/// A Python interpreter to query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonInterpreter {
    program: String,
}

impl PythonInterpreter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The interpreter named by `PYTHON`, else `python3`.
    pub fn from_env() -> Self {
        let program = env::var(PYTHON_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PYTHON.to_string());
        Self::new(program)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Interpreter version, e.g. `3.12.4`, or `None` if it cannot be run.
    pub fn version(&self) -> Option<String> {
        let output = Command::new(&self.program).arg("--version").output().ok()?;
        if !output.status.success() {
            return None;
        }
        // Python 2 printed the version on stderr
        let text = if output.stdout.is_empty() {
            String::from_utf8_lossy(&output.stderr).into_owned()
        } else {
            String::from_utf8_lossy(&output.stdout).into_owned()
        };
        text.trim()
            .strip_prefix("Python ")
            .map(str::to_string)
    }

    /// Query header location and extension suffix.
    pub fn config(&self) -> BuildResult<PythonConfig> {
        let output = Command::new(&self.program)
            .args(["-c", CONFIG_SCRIPT])
            .output()
            .map_err(|e| BuildError::SpawnFailed {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(BuildError::Python(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let config = PythonConfig::parse(&String::from_utf8_lossy(&output.stdout))?;
        debug!(
            include = %config.include_dir.display(),
            suffix = %config.extension_suffix,
            "queried {}", self.program
        );
        Ok(config)
    }
}

/// Build-relevant settings of an interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonConfig {
    /// Directory holding `Python.h`
    pub include_dir: PathBuf,
    /// Extension-module file suffix, e.g. `.cpython-312-x86_64-linux-gnu.so`
    pub extension_suffix: String,
}

impl PythonConfig {
    fn parse(stdout: &str) -> BuildResult<Self> {
        let mut lines = stdout.lines().map(str::trim).filter(|l| !l.is_empty());
        let include_dir = lines
            .next()
            .ok_or_else(|| BuildError::Python("missing include path".to_string()))?;
        let extension_suffix = lines.next().unwrap_or(".so");

        Ok(Self {
            include_dir: PathBuf::from(include_dir),
            extension_suffix: extension_suffix.to_string(),
        })
    }
}

/// Resolves package resources by asking the interpreter where the package lives.
#[derive(Debug, Clone)]
pub struct PythonResourceLocator {
    interpreter: PythonInterpreter,
}

impl PythonResourceLocator {
    pub const fn new(interpreter: PythonInterpreter) -> Self {
        Self { interpreter }
    }
}

impl ResourceLocator for PythonResourceLocator {
    fn resource_path(&self, package: &str, resource: &str) -> Result<PathBuf, ResourceError> {
        let program = self.interpreter.program();
        let output = Command::new(program)
            .args(["-c", RESOURCE_SCRIPT, package, resource])
            .output()
            .map_err(|e| ResourceError::InterpreterUnavailable {
                interpreter: program.to_string(),
                reason: e.to_string(),
            })?;

        match output.status.code() {
            Some(0) => {}
            Some(PACKAGE_NOT_FOUND_STATUS) => {
                return Err(ResourceError::PackageNotFound {
                    package: package.to_string(),
                    reason: format!("not importable by {program}"),
                });
            }
            _ => {
                return Err(ResourceError::LookupFailed(
                    String::from_utf8_lossy(&output.stderr).trim().to_string(),
                ));
            }
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let path = stdout.trim();
        if path.is_empty() {
            return Err(ResourceError::LookupFailed(format!(
                "{program} printed no path for {package}/{resource}"
            )));
        }
        Ok(PathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_include_and_suffix() {
        let config = PythonConfig::parse(
            "/usr/include/python3.12\n.cpython-312-x86_64-linux-gnu.so\n",
        )
        .unwrap();
        assert_eq!(config.include_dir, PathBuf::from("/usr/include/python3.12"));
        assert_eq!(config.extension_suffix, ".cpython-312-x86_64-linux-gnu.so");
    }

    #[test]
    fn parse_defaults_suffix() {
        let config = PythonConfig::parse("/usr/include/python3.12\n").unwrap();
        assert_eq!(config.extension_suffix, ".so");
    }

    #[test]
    fn parse_rejects_empty_output() {
        assert!(PythonConfig::parse("\n").is_err());
    }

    #[test]
    fn missing_interpreter_is_reported() {
        let locator =
            PythonResourceLocator::new(PythonInterpreter::new("/nonexistent/bin/python3"));
        let err = locator.resource_path("autowrap", "data_files").unwrap_err();
        assert!(matches!(err, ResourceError::InterpreterUnavailable { .. }));
    }

    #[test]
    fn missing_interpreter_has_no_version() {
        assert_eq!(
            PythonInterpreter::new("/nonexistent/bin/python3").version(),
            None
        );
    }
}
