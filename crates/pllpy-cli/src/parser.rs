//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Build configurator for the pllpy extension module.
#[derive(Parser)]
#[command(name = "pllpy-build")]
#[command(about = "Configure, build and install the pllpy PLL extension")]
#[command(version = pllpy_build_info::LONG_VERSION)]
pub struct Cli {
    /// Project directory containing src/ and bin/ (defaults to the current directory)
    #[arg(long = "project-dir", global = true)]
    pub project_dir: Option<String>,

    /// Use this autowrap data directory instead of looking it up
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    /// Python interpreter to build for
    #[arg(long, global = true, env = "PYTHON")]
    pub python: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
