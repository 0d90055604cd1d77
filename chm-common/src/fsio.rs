//! Atomic JSON file persistence shared by both stores.

use crate::error::HookError;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

/// Writes content to a file atomically using a temporary file.
///
/// The temp file lands in the destination's parent directory so the final
/// rename never crosses a filesystem boundary.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<(), HookError> {
    let parent = path.parent().ok_or_else(|| {
        HookError::io(
            path,
            std::io::Error::other("path has no parent directory"),
        )
    })?;
    let temp_path = parent.join(format!(".{}.tmp", Uuid::new_v4()));

    let mut file = fs::File::create(&temp_path).map_err(|e| HookError::io(&temp_path, e))?;
    file.write_all(content)
        .map_err(|e| HookError::io(&temp_path, e))?;
    file.sync_all().map_err(|e| HookError::io(&temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| HookError::io(path, e))?;
    debug!(path = %path.display(), "atomic write complete");
    Ok(())
}

/// Serialize a value as pretty JSON (2-space indent, trailing newline) and
/// write it atomically, creating parent directories as needed.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<(), HookError> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| HookError::io(parent, e))?;
    }
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    atomic_write(path, content.as_bytes())
}
