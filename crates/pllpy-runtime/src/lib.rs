//! Toolchain side of the pllpy build.
//!
//! Everything that runs an external program lives here: interpreter
//! queries, dependency detection, the cythonize/compile/link pipeline and
//! installation. Configuration itself comes from `pllpy-core`.
#![deny(unused_crate_dependencies)]

pub mod build;
pub mod deps;
pub mod detect;
pub mod error;
pub mod install;
pub mod python;
pub mod validate;

pub use build::{BuildOptions, BuildOutcome, BuildPlan, StepKind, ToolInvocation, Toolchain};
pub use build::{build_extension, detect_toolchain, planning_toolchain};
pub use deps::{check_dependencies, ensure_dependencies};
pub use error::{BuildError, BuildResult};
pub use install::{InstallTarget, InstalledFiles, install};
pub use python::{PythonConfig, PythonInterpreter, PythonResourceLocator};
pub use validate::{handle_status, load_record, validate_artifact};
