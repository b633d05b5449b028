//! Install command handler.

use std::path::Path;

use anyhow::Result;
use pllpy_runtime::{InstallTarget, install};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Install the built extension and scripts.
///
/// Without `--prefix` files go under `~/.local`.
pub fn execute(
    ctx: &CliContext,
    prefix: Option<&str>,
    site_dir: Option<&str>,
    build_dir: Option<&str>,
) -> Result<()> {
    let target = match prefix {
        Some(raw) => {
            let prefix = Path::new(raw);
            if prefix.exists() && !prefix.is_dir() {
                return Err(CliError::Arguments(format!(
                    "--prefix {raw} exists and is not a directory"
                ))
                .into());
            }
            InstallTarget::from_prefix(prefix)
        }
        None => InstallTarget::user_default()?,
    };
    let target = match site_dir {
        Some(dir) => target.with_site_dir(Path::new(dir).to_path_buf()),
        None => target,
    };

    let description = ctx.configure()?;
    let installed = install(
        &description,
        &ctx.project_dir,
        &ctx.build_dir(build_dir),
        &target,
    )?;

    println!("✓ Installed {}", installed.extension.display());
    for script in &installed.scripts {
        println!("✓ Installed {}", script.display());
    }
    println!();
    println!(
        "Make sure {} is on PYTHONPATH and {} is on PATH",
        target.site_dir.display(),
        target.bin_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::exit_code_for;
    use crate::parser::Cli;
    use clap::Parser;
    use tempfile::tempdir;

    #[test]
    fn prefix_that_is_a_file_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("prefix");
        std::fs::write(&file, b"").unwrap();

        let cli = Cli::parse_from(["pllpy-build", "install"]);
        let ctx = CliContext::from_cli(&cli).unwrap();
        let err = execute(&ctx, file.to_str(), None, None).unwrap_err();
        assert_eq!(exit_code_for(&err), 2);
    }
}
