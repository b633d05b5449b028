//! Build command handler.

use anyhow::{Context, Result};
use pllpy_runtime::{
    BuildOptions, BuildPlan, build_extension, check_dependencies, detect_toolchain,
    ensure_dependencies, planning_toolchain,
};
use tracing::debug;

use crate::bootstrap::CliContext;

/// Build the extension, or print the plan with `dry_run`.
///
/// Configuration errors surface before any tool is detected or run.
pub fn execute(
    ctx: &CliContext,
    build_dir: Option<&str>,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let description = ctx.configure()?;
    let options = BuildOptions {
        project_dir: ctx.project_dir.clone(),
        build_dir: ctx.build_dir(build_dir),
        dry_run,
    };

    let toolchain = if dry_run {
        planning_toolchain(&ctx.python)
    } else {
        let dependencies = check_dependencies(&ctx.python, &description.extension.library_dirs);
        ensure_dependencies(&dependencies)
            .context("Run 'pllpy-build check-deps' for installation hints")?;
        detect_toolchain(&ctx.python)?
    };
    debug!(cxx = %toolchain.cxx, cython = %toolchain.cython, "toolchain selected");

    let outcome = build_extension(&description, &toolchain, &options)?;
    if dry_run {
        print_plan(&outcome.plan, json)?;
    }
    Ok(())
}

fn print_plan(plan: &BuildPlan, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(plan).context("Failed to serialize build plan")?;
        println!("{rendered}");
        return Ok(());
    }

    for step in &plan.steps {
        println!("{}", step.command_line());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::exit_code_for;
    use crate::parser::Cli;
    use crate::test_utils::{ENV_LOCK, EnvVarGuard};
    use clap::Parser;
    use pllpy_core::PLL_INSTALL_DIR_ENV;
    use tempfile::tempdir;

    fn context(project: &std::path::Path, data: &std::path::Path) -> CliContext {
        let project = project.display().to_string();
        let data = data.display().to_string();
        let cli = Cli::parse_from([
            "pllpy-build",
            "--project-dir",
            project.as_str(),
            "--data-dir",
            data.as_str(),
            "--python",
            "/nonexistent/bin/python3",
            "build",
        ]);
        CliContext::from_cli(&cli).unwrap()
    }

    #[test]
    fn invalid_install_root_stops_before_any_tool() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(PLL_INSTALL_DIR_ENV, "/nonexistent");
        let project = tempdir().unwrap();
        let data = tempdir().unwrap();

        let err = execute(&context(project.path(), data.path()), None, false, false).unwrap_err();

        assert_eq!(exit_code_for(&err), 78);
        assert!(err.to_string().contains("\"/nonexistent\""));
        assert!(!project.path().join("build").exists());
    }

    #[test]
    fn dry_run_needs_no_toolchain() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::remove(PLL_INSTALL_DIR_ENV);
        let project = tempdir().unwrap();
        let data = tempdir().unwrap();

        execute(&context(project.path(), data.path()), None, true, true).unwrap();
        assert!(!project.path().join("build").exists());
    }
}
