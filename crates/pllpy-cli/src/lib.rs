//! Command-line adapter for the pllpy build configurator.
//!
//! Parsing, the composition root and terminal output live here; all build
//! logic is in `pllpy-core` and `pllpy-runtime`.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

#[cfg(test)]
pub(crate) mod test_utils;

pub use bootstrap::CliContext;
pub use commands::Commands;
pub use error::{CliError, exit_code_for};
pub use parser::Cli;
