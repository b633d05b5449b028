//! Available subcommands.

use clap::Subcommand;

/// Commands of the pllpy build configurator.
#[derive(Subcommand)]
pub enum Commands {
    /// Check the tools and libraries the build needs
    CheckDeps,

    /// Show the resolved data directory, PLL root and search paths
    Paths,

    /// Show the extension build description
    Plan {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Cythonize, compile and link the extension
    Build {
        /// Output directory (relative paths are taken from the project directory)
        #[arg(long)]
        build_dir: Option<String>,
        /// Print the commands without running them
        #[arg(long)]
        dry_run: bool,
        /// Print the dry-run plan as JSON
        #[arg(long, requires = "dry_run")]
        json: bool,
    },

    /// Install the built extension and the pll script
    Install {
        /// Installation prefix (defaults to ~/.local)
        #[arg(long)]
        prefix: Option<String>,
        /// Existing directory to put the extension in instead of <prefix>/lib/python
        #[arg(long)]
        site_dir: Option<String>,
        /// Build directory to install from
        #[arg(long)]
        build_dir: Option<String>,
    },

    /// Show whether the extension is built and how
    Status {
        /// Build directory to inspect
        #[arg(long)]
        build_dir: Option<String>,
    },
}
