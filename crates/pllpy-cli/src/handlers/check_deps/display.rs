//! Display utilities for dependency status output.

use pllpy_core::{Dependency, DependencyStatus};

// ANSI color codes
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

/// Status cell for a dependency row, without padding.
fn status_text(dep: &Dependency) -> String {
    match &dep.status {
        DependencyStatus::Present { version } if version.is_empty() => {
            format!("{GREEN}✓ installed{RESET}")
        }
        DependencyStatus::Present { version } => format!("{GREEN}✓ {version}{RESET}"),
        DependencyStatus::Missing if dep.required => format!("{RED}✗ missing{RESET}"),
        DependencyStatus::Missing => format!("{YELLOW}○ not found{RESET}"),
    }
}

/// Print a single dependency row in the status table.
pub fn print_dependency(dep: &Dependency) {
    let req_indicator = if dep.required {
        format!("{RED}*{RESET}")
    } else {
        " ".to_string()
    };

    println!(
        "{req_indicator}{:<19} {:<25} {}",
        dep.name,
        status_text(dep),
        dep.description
    );
}

/// Print installation hints for missing dependencies.
pub fn print_hints(missing: &[&Dependency]) {
    println!("{BOLD}To install missing dependencies:{RESET}");
    for dep in missing {
        match &dep.install_hint {
            Some(hint) => println!("  {BOLD}{}{RESET}: {hint}", dep.name),
            None => println!("  {BOLD}{}{RESET}", dep.name),
        }
    }
}
