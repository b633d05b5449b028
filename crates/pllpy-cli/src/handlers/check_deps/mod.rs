//! Check build dependencies handler.
//!
//! Checks the interpreter, Cython, the C++ compiler, the autowrap data files
//! and libpll, and prints them as a table.

mod display;

use anyhow::{Context, Result};
use pllpy_core::paths::{DATA_FILES_PACKAGE, DATA_FILES_RESOURCE};
use pllpy_core::{Dependency, DependencyStatus, ResourceLocator};
use pllpy_runtime::{check_dependencies, ensure_dependencies};

use crate::bootstrap::CliContext;
use display::{BLUE, BOLD, GREEN, RED, RESET, print_dependency, print_hints};

/// Execute the check-deps command.
///
/// Returns an error naming the missing tools if any required dependency is
/// absent. A broken `PLL_INSTALL_DIR` is reported but does not abort the
/// check, since the table is most useful exactly when setup is wrong.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("{BOLD}{BLUE}Checking build dependencies...{RESET}\n");

    let library_dirs = match ctx.resolve_paths() {
        Ok(paths) => paths.library_dirs,
        Err(e) => {
            println!("{RED}✗ {e}{RESET}\n");
            Vec::new()
        }
    };

    let mut dependencies = check_dependencies(&ctx.python, &library_dirs);
    dependencies.insert(2, autowrap_dependency(ctx));

    println!(
        "{BOLD}{:<20} {:<25} {:<40}{RESET}",
        "DEPENDENCY", "STATUS", "NOTES"
    );
    println!("{}", "=".repeat(85));
    for dep in &dependencies {
        print_dependency(dep);
    }
    println!("{}", "=".repeat(85));

    let total_required = dependencies.iter().filter(|d| d.required).count();
    let blocking: Vec<&Dependency> = dependencies.iter().filter(|d| d.is_blocking()).collect();

    if blocking.is_empty() {
        println!(
            "{GREEN}✓ All required dependencies are installed!{RESET} ({total_required}/{total_required})"
        );
        println!("\n{BOLD}You can now run: {BLUE}pllpy-build build{RESET}");
        return Ok(());
    }

    println!(
        "{RED}✗ {} required dependencies are missing.{RESET} ({}/{total_required})",
        blocking.len(),
        total_required - blocking.len()
    );
    println!();
    print_hints(&blocking);
    ensure_dependencies(&dependencies).context("Build dependencies are incomplete")
}

fn autowrap_dependency(ctx: &CliContext) -> Dependency {
    let dep = Dependency::required(DATA_FILES_PACKAGE, "Headers and pxd files for pllpy.pyx")
        .with_hint("pip install autowrap");

    if let Some(explicit) = ctx.data_dir.as_deref() {
        return dep.with_status(DependencyStatus::Present {
            version: format!("--data-dir {explicit}"),
        });
    }

    match ctx
        .locator
        .resource_path(DATA_FILES_PACKAGE, DATA_FILES_RESOURCE)
    {
        Ok(path) => dep.with_status(DependencyStatus::Present {
            version: path.display().to_string(),
        }),
        Err(_) => dep,
    }
}
