//! Plan command handler.

use anyhow::{Context, Result};
use pllpy_core::BuildDescription;

use crate::bootstrap::CliContext;

/// Print the build description, as text or JSON.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let description = ctx.configure()?;
    if json {
        let rendered = serde_json::to_string_pretty(&description)
            .context("Failed to serialize build description")?;
        println!("{rendered}");
    } else {
        print_description(&description);
    }
    Ok(())
}

fn print_description(description: &BuildDescription) {
    let package = &description.package;
    let extension = &description.extension;

    println!("{} {}", package.name, package.version);
    println!("  {}", package.description);
    println!();
    println!("Extension: {} ({})", extension.name, extension.language);
    for source in &extension.sources {
        println!("  source: {}", source.display());
    }
    for dir in &extension.include_dirs {
        println!("  include: {}", dir.display());
    }
    for dir in &extension.library_dirs {
        println!("  library dir: {}", dir.display());
    }
    println!("  libraries: {}", extension.libraries.join(" "));
    println!("  compile args: {}", extension.extra_compile_args.join(" "));
    println!();
    println!(
        "Data dir: {} ({:?})",
        description.data_dir.path.display(),
        description.data_dir.source
    );
    match &description.install_dir.path {
        Some(root) => println!("PLL root: {}", root.display()),
        None => println!("PLL root: (unset, using default search paths)"),
    }
    println!("Requires: {}", package.install_requires.join(", "));
}
