//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Validate CLI-specific input
//!   2. Call `pllpy-core` / `pllpy-runtime`
//!   3. Format output for the terminal

pub mod build;
pub mod check_deps;
pub mod install;
pub mod paths;
pub mod plan;
pub mod status;
