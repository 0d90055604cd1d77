//! Storage locations for hook files and both stores.
//!
//! Everything branches on a single scope choice: global hooks live under
//! the user's home directory, project hooks under the current working
//! directory. Both use the same `.claude/` layout inside their root.

use crate::error::HookError;
use std::path::{Path, PathBuf};

const CLAUDE_DIR: &str = ".claude";
const HOOKS_DIR: &str = "hooks";
const SETTINGS_FILE: &str = "settings.json";
const METADATA_FILE: &str = ".chm.json";

/// Which store root a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `~/.claude` — hooks that apply to every project.
    Global,
    /// `./.claude` — hooks scoped to the current project.
    Project,
}

impl Scope {
    pub fn from_project_flag(project: bool) -> Self {
        if project { Scope::Project } else { Scope::Global }
    }
}

/// The four locations every operation needs, resolved once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookPaths {
    pub claude_dir: PathBuf,
    pub hooks_dir: PathBuf,
    pub settings_path: PathBuf,
    pub metadata_path: PathBuf,
}

impl HookPaths {
    /// Resolve paths for a scope against the real environment.
    pub fn resolve(scope: Scope) -> Result<Self, HookError> {
        let root = match scope {
            Scope::Global => dirs::home_dir().ok_or(HookError::HomeDirUnavailable)?,
            Scope::Project => {
                std::env::current_dir().map_err(|e| HookError::io(PathBuf::from("."), e))?
            }
        };
        Ok(Self::rooted(&root))
    }

    /// Derive the layout under an explicit root. Tests use this with a
    /// temp directory instead of touching the real home.
    pub fn rooted(root: &Path) -> Self {
        let claude_dir = root.join(CLAUDE_DIR);
        let hooks_dir = claude_dir.join(HOOKS_DIR);
        let settings_path = claude_dir.join(SETTINGS_FILE);
        let metadata_path = hooks_dir.join(METADATA_FILE);
        Self {
            claude_dir,
            hooks_dir,
            settings_path,
            metadata_path,
        }
    }

    /// Absolute path of a hook file stored as hooks-dir-relative.
    pub fn resolve_hook_file(&self, relative_path: &str) -> PathBuf {
        self.hooks_dir.join(relative_path)
    }
}
