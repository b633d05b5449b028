//! Paths command handler.
//!
//! Displays the resolved data directory, PLL root and search paths. This is
//! the first thing to look at when the compiler cannot find PLL headers.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the paths command.
///
/// Prints one `key = value` line per resolved path.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let paths = ctx.resolve_paths()?;
    println!("project_dir = {}", ctx.project_dir.display());
    println!("{paths}");
    Ok(())
}
