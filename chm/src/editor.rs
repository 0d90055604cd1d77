//! External editor collaborator.
//!
//! Blocks until the editor exits, with the terminal handed over via
//! inherited standard streams. The editor command comes from [`EnvConfig`]
//! and may carry arguments (e.g. `code --wait`).

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Open `path` in the configured editor and wait for it to close.
pub fn open_in_editor(editor: &str, path: &Path) -> Result<()> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().context("editor command is empty")?;

    debug!(editor, path = %path.display(), "launching editor");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{editor}'"))?;

    if !status.success() {
        bail!("editor '{editor}' exited with {status}");
    }
    Ok(())
}
