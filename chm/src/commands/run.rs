//! Run-dispatch entry point, re-invoked by the host for each hook firing.
//!
//! Prompts print to stdout (wrapped per event compatibility); scripts run
//! through the platform shell with all standard streams inherited, and the
//! script's exit code becomes this process's exit code. That code is how a
//! hook blocks a host action, so it must pass through untouched.

use anyhow::{Context, Result};
use chm_common::events::HookKind;
use chm_common::runner::{classify_extension, render_prompt};
use chm_common::{EnvConfig, HookPaths, Scope};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

fn shell() -> &'static str {
    if cfg!(windows) { "powershell.exe" } else { "bash" }
}

/// Execute the hook file at `relative_path` under the global hooks dir.
/// Returns the exit code this process should finish with.
pub fn run_hook(config: &EnvConfig, relative_path: &str) -> Result<i32> {
    let paths = HookPaths::resolve(Scope::Global)?;
    run_hook_at(&paths, config, relative_path)
}

/// Same as [`run_hook`] with an explicit store root, for tests.
pub fn run_hook_at(paths: &HookPaths, config: &EnvConfig, relative_path: &str) -> Result<i32> {
    let absolute = paths.resolve_hook_file(relative_path);

    match classify_extension(Path::new(relative_path))? {
        HookKind::Prompt => {
            let content = fs::read_to_string(&absolute)
                .with_context(|| format!("failed to read {}", absolute.display()))?;
            let output = render_prompt(relative_path, &content)?;
            let mut stdout = std::io::stdout();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(0)
        }
        HookKind::Script => run_script(config, &absolute),
    }
}

fn run_script(config: &EnvConfig, absolute: &Path) -> Result<i32> {
    let cwd = match &config.project_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };

    debug!(script = %absolute.display(), cwd = %cwd.display(), "executing script hook");
    // Streams are inherited so the script sees the host's stdin payload and
    // writes its verdict straight back.
    match Command::new(shell()).arg(absolute).current_dir(&cwd).status() {
        Ok(status) => Ok(status.code().unwrap_or(1)),
        Err(e) => {
            warn!(shell = shell(), error = %e, "failed to launch script interpreter");
            eprintln!("Failed to launch {}: {e}", shell());
            Ok(1)
        }
    }
}
