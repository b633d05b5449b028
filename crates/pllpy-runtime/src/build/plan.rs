//! Build planning: the ordered tool invocations that produce the extension.
//!
//! Planning is pure so the exact command lines can be shown with
//! `--dry-run` and checked in tests without a toolchain.

use std::path::{Path, PathBuf};
use std::process::Command;

use pllpy_core::{BuildDescription, Language};
use serde::Serialize;

use crate::detect::Tool;
use crate::python::PythonConfig;

/// Kind of a build step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepKind {
    Cythonize,
    Compile,
    Link,
}

impl StepKind {
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Cythonize => "Cythonizing",
            Self::Compile => "Compiling",
            Self::Link => "Linking",
        }
    }
}

/// One external tool run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolInvocation {
    pub kind: StepKind,
    pub program: String,
    pub args: Vec<String>,
    /// File this step produces
    pub output: PathBuf,
}

impl ToolInvocation {
    fn new(kind: StepKind, tool: &Tool, args: Vec<String>, output: PathBuf) -> Self {
        let mut all = tool.prefix_args.clone();
        all.extend(args);
        Self {
            kind,
            program: tool.program.clone(),
            args: all,
            output,
        }
    }

    /// Short label for progress output, e.g. `Compiling pllml.o`.
    pub fn label(&self) -> String {
        let name = self
            .output
            .file_name()
            .map_or_else(|| self.output.display().to_string(), |n| n.to_string_lossy().into_owned());
        format!("{} {name}", self.kind.verb())
    }

    /// Shell-like rendering for logs and dry runs.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A `Command` ready to spawn from `cwd`.
    pub fn to_command(&self, cwd: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(cwd);
        cmd
    }
}

/// Tools the plan is built for.
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub python: PythonConfig,
    pub cython: Tool,
    pub cxx: Tool,
}

/// The full build of one extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    pub build_dir: PathBuf,
    pub steps: Vec<ToolInvocation>,
    /// Final extension module path
    pub artifact: PathBuf,
}

impl BuildPlan {
    /// Plan cythonize, compile and link steps, in that order.
    ///
    /// Sources are resolved against `project_dir`; everything produced goes
    /// under `build_dir`.
    pub fn new(
        description: &BuildDescription,
        project_dir: &Path,
        build_dir: &Path,
        toolchain: &Toolchain,
    ) -> Self {
        let ext = &description.extension;
        let mut steps = Vec::new();
        let mut translation_units = Vec::new();

        for pyx in ext.cython_sources() {
            let generated = build_dir
                .join(file_stem(pyx))
                .with_extension(ext.language.generated_extension());
            steps.push(ToolInvocation::new(
                StepKind::Cythonize,
                &toolchain.cython,
                cython_args(ext.language, &ext.include_dirs, &project_dir.join(pyx), &generated),
                generated.clone(),
            ));
            translation_units.push(generated);
        }
        translation_units.extend(ext.native_sources().map(|src| project_dir.join(src)));

        let obj_dir = build_dir.join("obj");
        let mut objects = Vec::new();
        for unit in &translation_units {
            let object = obj_dir.join(file_stem(unit)).with_extension("o");
            let mut args = ext.extra_compile_args.clone();
            args.extend(["-fPIC".to_string(), "-O2".to_string()]);
            args.extend(ext.include_dirs.iter().map(|d| format!("-I{}", d.display())));
            args.push(format!("-I{}", toolchain.python.include_dir.display()));
            args.extend([
                "-c".to_string(),
                unit.display().to_string(),
                "-o".to_string(),
                object.display().to_string(),
            ]);
            steps.push(ToolInvocation::new(
                StepKind::Compile,
                &toolchain.cxx,
                args,
                object.clone(),
            ));
            objects.push(object);
        }

        let artifact = build_dir
            .join("lib")
            .join(format!("{}{}", ext.name, toolchain.python.extension_suffix));
        let mut args: Vec<String> = shared_link_flags().iter().map(|s| (*s).to_string()).collect();
        args.extend(objects.iter().map(|o| o.display().to_string()));
        for dir in &ext.library_dirs {
            args.push(format!("-L{}", dir.display()));
            if !cfg!(target_os = "macos") {
                args.push(format!("-Wl,-rpath,{}", dir.display()));
            }
        }
        args.extend(ext.libraries.iter().map(|lib| format!("-l{lib}")));
        args.extend(["-o".to_string(), artifact.display().to_string()]);
        steps.push(ToolInvocation::new(
            StepKind::Link,
            &toolchain.cxx,
            args,
            artifact.clone(),
        ));

        Self {
            build_dir: build_dir.to_path_buf(),
            steps,
            artifact,
        }
    }
}

fn cython_args(language: Language, include_dirs: &[PathBuf], source: &Path, output: &Path) -> Vec<String> {
    let mut args = Vec::new();
    if language == Language::Cxx {
        args.push("--cplus".to_string());
    }
    args.push("-3".to_string());
    for dir in include_dirs {
        args.push("-I".to_string());
        args.push(dir.display().to_string());
    }
    args.extend([
        source.display().to_string(),
        "-o".to_string(),
        output.display().to_string(),
    ]);
    args
}

fn file_stem(path: &Path) -> PathBuf {
    path.file_stem().map_or_else(|| path.to_path_buf(), PathBuf::from)
}

/// Flags producing a loadable module for the host platform.
const fn shared_link_flags() -> &'static [&'static str] {
    if cfg!(target_os = "macos") {
        &["-bundle", "-undefined", "dynamic_lookup"]
    } else {
        &["-shared"]
    }
}
