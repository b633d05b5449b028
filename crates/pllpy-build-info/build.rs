use std::env;
use std::path::{Path, PathBuf};

use vergen_gix::{Emitter, GixBuilder};

/// Packagers building from a tarball can pin the SHA here.
const SHA_OVERRIDE_ENV: &str = "PLLPY_BUILD_SHA_SHORT";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={SHA_OVERRIDE_ENV}");

    if let Some(sha) = env::var(SHA_OVERRIDE_ENV)
        .ok()
        .and_then(|raw| short_sha(&raw))
    {
        emit_fallback(&sha);
        return;
    }

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    match find_git_root(Path::new(&manifest_dir)) {
        Some(root) => emit_from_git(root),
        None => emit_fallback("unknown"),
    }
}

/// Emit `VERGEN_GIT_SHA` from the repository, never failing the build.
fn emit_from_git(root: PathBuf) {
    let git = match GixBuilder::default().repo_path(Some(root)).sha(true).build() {
        Ok(git) => git,
        Err(err) => {
            println!("cargo:warning=pllpy-build-info: git metadata unavailable: {err}");
            emit_fallback("unknown");
            return;
        }
    };

    if let Err(err) = Emitter::default()
        .add_instructions(&git)
        .and_then(|emitter| emitter.emit())
    {
        println!("cargo:warning=pllpy-build-info: git metadata unavailable: {err}");
        emit_fallback("unknown");
    }
}

/// The library reads this with `env!()`, so it must always be set.
fn emit_fallback(sha: &str) {
    println!("cargo:rustc-env=VERGEN_GIT_SHA={sha}");
}

/// First seven characters of `raw`, if they are hex.
fn short_sha(raw: &str) -> Option<String> {
    let sha: String = raw.trim().chars().take(7).collect();
    (sha.len() == 7 && sha.chars().all(|c| c.is_ascii_hexdigit())).then_some(sha)
}

fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
