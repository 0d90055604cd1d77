//! Environment-derived configuration.
//!
//! All ambient environment lookups happen in one place, once, at startup.
//! The resulting record is threaded into the operations that need it so
//! the transforms themselves stay free of hidden environment dependence
//! and tests can construct configurations directly.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the Claude Code project root, used as the
/// working directory for script hooks.
pub const PROJECT_DIR_ENV: &str = "CLAUDE_PROJECT_DIR";

/// Resolved environment configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// Editor command for interactive hook editing.
    pub editor: String,
    /// Working-directory override for script execution.
    pub project_dir: Option<PathBuf>,
}

impl EnvConfig {
    /// Read the environment once: `EDITOR`, then `VISUAL`, then the
    /// platform default; empty values are treated as unset.
    pub fn from_env() -> Self {
        let editor = ["EDITOR", "VISUAL"]
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|v| !v.is_empty())
            .unwrap_or_else(|| default_editor().to_string());

        let project_dir = env::var(PROJECT_DIR_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            editor,
            project_dir,
        }
    }
}

fn default_editor() -> &'static str {
    if cfg!(windows) { "notepad" } else { "vi" }
}
