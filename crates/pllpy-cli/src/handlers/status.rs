//! Status command handler.

use anyhow::Result;
use pllpy_runtime::handle_status;

use crate::bootstrap::CliContext;

/// Report whether the extension is built in the chosen build directory.
pub fn execute(ctx: &CliContext, build_dir: Option<&str>) -> Result<()> {
    handle_status(&ctx.build_dir(build_dir))
}
