//! Toolchain detection: Cython, C++ compiler and the PLL library.

use std::env;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::python::PythonInterpreter;

/// Environment variable overriding the C++ compiler.
pub const CXX_ENV: &str = "CXX";

/// A program plus fixed leading arguments (e.g. `python3 -m cython`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub program: String,
    pub prefix_args: Vec<String>,
}

impl Tool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            prefix_args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_prefix_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefix_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Split a command line such as `ccache g++` into program and leading
    /// arguments. `None` for a blank value.
    pub fn from_command_line(value: &str) -> Option<Self> {
        let mut words = value.split_whitespace();
        let program = words.next()?;
        Some(Self::new(program).with_prefix_args(words))
    }

    /// First line of `--version` output, if the tool runs.
    pub fn version(&self) -> Option<String> {
        let output = Command::new(&self.program)
            .args(&self.prefix_args)
            .arg("--version")
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        // Cython reports its version on stderr
        let text = if output.stdout.is_empty() {
            output.stderr
        } else {
            output.stdout
        };
        String::from_utf8_lossy(&text)
            .lines()
            .next()
            .map(|line| line.trim().to_string())
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.prefix_args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// C++ compilers to try, in order of preference.
pub fn cxx_candidates() -> &'static [&'static str] {
    if cfg!(target_os = "macos") {
        &["clang++", "g++"]
    } else {
        &["g++", "clang++"]
    }
}

/// Select the C++ compiler: `CXX` if set, else the first candidate on `PATH`.
pub fn select_cxx_compiler() -> Option<Tool> {
    if let Some(tool) = env::var(CXX_ENV)
        .ok()
        .and_then(|cxx| Tool::from_command_line(&cxx))
    {
        debug!(compiler = %tool, "using compiler from {CXX_ENV}");
        return Some(tool);
    }

    cxx_candidates()
        .iter()
        .find(|name| which::which(name).is_ok())
        .map(|name| Tool::new(*name))
}

/// Locate Cython: the `cython` executable, else `python -m cython`.
pub fn find_cython(python: &PythonInterpreter) -> Option<Tool> {
    if which::which("cython").is_ok() {
        return Some(Tool::new("cython"));
    }

    let module = Tool::new(python.program()).with_prefix_args(["-m", "cython"]);
    module.version().map(|_| module)
}

/// Shared-library file names the linker accepts for `-l<name>`.
pub fn library_file_names(name: &str) -> Vec<String> {
    ["so", "dylib", "a"]
        .iter()
        .map(|ext| format!("lib{name}.{ext}"))
        .collect()
}

/// Find `lib<name>` in the given directories, first match wins.
pub fn find_library(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let candidates = library_file_names(name);
    dirs.iter()
        .flat_map(|dir| candidates.iter().map(move |file| dir.join(file)))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn tool_display_includes_prefix_args() {
        let tool = Tool::new("python3").with_prefix_args(["-m", "cython"]);
        assert_eq!(tool.to_string(), "python3 -m cython");
    }

    #[test]
    fn compiler_launcher_becomes_prefix_args() {
        let tool = Tool::from_command_line("  ccache g++ ").unwrap();
        assert_eq!(tool.program, "ccache");
        assert_eq!(tool.prefix_args, vec!["g++".to_string()]);
        assert_eq!(tool.to_string(), "ccache g++");

        assert_eq!(Tool::from_command_line("clang++"), Some(Tool::new("clang++")));
        assert_eq!(Tool::from_command_line("   "), None);
    }

    #[test]
    fn library_names_cover_shared_and_static() {
        let names = library_file_names("pll-sse3-pthreads");
        assert!(names.contains(&"libpll-sse3-pthreads.so".to_string()));
        assert!(names.contains(&"libpll-sse3-pthreads.a".to_string()));
    }

    #[test]
    fn find_library_searches_in_order() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        std::fs::write(second.path().join("libpll-sse3-pthreads.a"), b"").unwrap();

        let found = find_library(
            "pll-sse3-pthreads",
            &[first.path().to_path_buf(), second.path().to_path_buf()],
        );
        assert_eq!(found, Some(second.path().join("libpll-sse3-pthreads.a")));
    }

    #[test]
    fn find_library_misses_cleanly() {
        let dir = tempdir().unwrap();
        assert_eq!(find_library("pll", &[dir.path().to_path_buf()]), None);
    }

    #[test]
    fn missing_tool_has_no_version() {
        assert_eq!(Tool::new("/nonexistent/bin/cython").version(), None);
    }
}
