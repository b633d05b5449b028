//! Build orchestration for the extension module with progress tracking.
//!
//! Steps run strictly one after another; the first failure aborts the
//! build. Tool output is streamed into a spinner, with errors and warnings
//! echoed above it and every line logged at debug level.

mod plan;

pub use plan::{BuildPlan, StepKind, ToolInvocation, Toolchain};

use std::fs;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use pllpy_core::paths::{DirectoryCreationStrategy, ensure_directory};
use pllpy_core::{BuildDescription, BuildRecord};
use tracing::{debug, info, warn};

use crate::detect::{Tool, find_cython, select_cxx_compiler};
use crate::error::{BuildError, BuildResult};
use crate::python::{PythonConfig, PythonInterpreter};

/// Stand-ins shown in dry-run plans for tools that were not found.
const PLACEHOLDER_CYTHON: &str = "cython";
const PLACEHOLDER_CXX: &str = "c++";
const PLACEHOLDER_PYTHON_INCLUDE: &str = "<python-include>";
const PLACEHOLDER_EXTENSION_SUFFIX: &str = ".so";

/// Where and how to build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory holding `src/` and `bin/`
    pub project_dir: PathBuf,
    /// Directory receiving generated sources, objects and the extension
    pub build_dir: PathBuf,
    /// Plan only, run nothing
    pub dry_run: bool,
}

impl BuildOptions {
    /// Build into `<project_dir>/build`.
    pub fn in_project(project_dir: &Path) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            build_dir: project_dir.join("build"),
            dry_run: false,
        }
    }
}

/// Result of a build request.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub plan: BuildPlan,
    /// Written after a real build, absent for dry runs
    pub record: Option<BuildRecord>,
}

/// Detect Python settings, Cython and the C++ compiler.
pub fn detect_toolchain(python: &PythonInterpreter) -> BuildResult<Toolchain> {
    let config = python.config()?;

    let mut missing = Vec::new();
    let cython = find_cython(python);
    if cython.is_none() {
        missing.push("cython");
    }
    let cxx = select_cxx_compiler();
    if cxx.is_none() {
        missing.push("C++ compiler");
    }

    match (cython, cxx) {
        (Some(cython), Some(cxx)) => Ok(Toolchain {
            python: config,
            cython,
            cxx,
        }),
        _ => Err(BuildError::MissingDependencies {
            missing: missing.join(", "),
        }),
    }
}

/// Toolchain for planning only: detected tools where available, placeholders
/// for the rest. Never fails, so `--dry-run` works on a bare machine.
pub fn planning_toolchain(python: &PythonInterpreter) -> Toolchain {
    let python_config = python.config().unwrap_or_else(|e| {
        warn!("{e}; using placeholder Python settings");
        PythonConfig {
            include_dir: PathBuf::from(PLACEHOLDER_PYTHON_INCLUDE),
            extension_suffix: PLACEHOLDER_EXTENSION_SUFFIX.to_string(),
        }
    });
    let cython = find_cython(python).unwrap_or_else(|| {
        warn!("cython not found; plan shows '{PLACEHOLDER_CYTHON}'");
        Tool::new(PLACEHOLDER_CYTHON)
    });
    let cxx = select_cxx_compiler().unwrap_or_else(|| {
        warn!("no C++ compiler found; plan shows '{PLACEHOLDER_CXX}'");
        Tool::new(PLACEHOLDER_CXX)
    });

    Toolchain {
        python: python_config,
        cython,
        cxx,
    }
}

/// Build the extension described by `description`.
pub fn build_extension(
    description: &BuildDescription,
    toolchain: &Toolchain,
    options: &BuildOptions,
) -> BuildResult<BuildOutcome> {
    let plan = BuildPlan::new(
        description,
        &options.project_dir,
        &options.build_dir,
        toolchain,
    );

    if options.dry_run {
        info!(steps = plan.steps.len(), "dry run, nothing executed");
        return Ok(BuildOutcome { plan, record: None });
    }

    // A failed rebuild must not leave the previous build looking current
    let record_path = BuildRecord::path_in(&options.build_dir);
    match fs::remove_file(&record_path) {
        Ok(()) => debug!(path = %record_path.display(), "removed previous build record"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    println!();
    println!(
        "Building {} {} ({})...",
        description.package.name,
        description.package.version,
        description.extension.language
    );
    println!();

    let total = plan.steps.len();
    for (index, step) in plan.steps.iter().enumerate() {
        if let Some(parent) = step.output.parent() {
            ensure_directory(parent, DirectoryCreationStrategy::AutoCreate)?;
        }
        run_step(step, &options.project_dir, index + 1, total)?;
    }

    let record = BuildRecord::new(description, &toolchain.cxx.to_string(), &plan.artifact);
    record.save(&record_path).map_err(BuildError::other)?;

    println!();
    println!("✓ Built {}", plan.artifact.display());

    Ok(BuildOutcome {
        plan,
        record: Some(record),
    })
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb
}

/// Forward every line of `source` into `tx` from a background thread.
fn forward_lines<R: Read + Send + 'static>(source: R, tx: mpsc::Sender<String>) {
    thread::spawn(move || {
        let reader = BufReader::new(source);
        for line in reader.lines().map_while(Result::ok) {
            let _ = tx.send(line);
        }
    });
}

/// Lines worth showing above the spinner.
fn is_notable(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    lower.contains("error")
        || lower.contains("warning:")
        || lower.contains("fatal")
        || lower.contains("undefined reference")
        || lower.contains("cannot find")
}

fn run_step(step: &ToolInvocation, cwd: &Path, index: usize, total: usize) -> BuildResult<()> {
    let label = step.label();
    debug!(command = %step.command_line(), "[{index}/{total}] {label}");
    let pb = spinner(format!("[{index}/{total}] {label}"));

    let mut child = step
        .to_command(cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| BuildError::SpawnFailed {
            program: step.program.clone(),
            reason: e.to_string(),
        })?;

    let (tx, rx) = mpsc::channel();
    if let Some(stdout) = child.stdout.take() {
        forward_lines(stdout, tx.clone());
    }
    if let Some(stderr) = child.stderr.take() {
        forward_lines(stderr, tx);
    }

    // The channel closes once both reader threads hit EOF
    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(line) => {
                debug!("{line}");
                if is_notable(&line) {
                    pb.println(&line);
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => pb.tick(),
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    let status = child.wait()?;
    pb.finish_and_clear();

    if !status.success() {
        return Err(BuildError::StepFailed {
            step: label,
            code: status.code().unwrap_or(-1),
        });
    }

    println!("✓ {label}");
    Ok(())
}
