//! Unregister a hook: backing file, metadata entry, settings handler.

use anyhow::{Context, Result};
use chm_common::events::HookEvent;
use chm_common::metadata::{find_hook_entry, read_metadata, remove_hook_entry, write_metadata};
use chm_common::settings::{read_settings, remove_hook_from_settings, write_settings};
use chm_common::{HookError, HookPaths};
use std::fs;
use tracing::info;

/// Remove the hook registered as `(event, name)`.
///
/// The backing file may already be gone; that is tolerated and the store
/// cleanup still proceeds. A missing metadata entry is an error.
pub fn remove_hook(paths: &HookPaths, event: HookEvent, name: &str) -> Result<()> {
    let metadata = read_metadata(&paths.metadata_path)?;
    let Some(entry) = find_hook_entry(&metadata, event, name) else {
        return Err(HookError::HookNotFound {
            event: event.to_string(),
            name: name.to_string(),
        }
        .into());
    };
    let relative_path = entry.file.clone();

    let file_path = paths.resolve_hook_file(&relative_path);
    if file_path.exists() {
        fs::remove_file(&file_path)
            .with_context(|| format!("failed to delete {}", file_path.display()))?;
    }

    let metadata = remove_hook_entry(metadata, event, name);
    write_metadata(&paths.metadata_path, &metadata)?;

    let settings = read_settings(&paths.settings_path)?;
    let settings = remove_hook_from_settings(settings, event, &relative_path)?;
    write_settings(&paths.settings_path, &settings)?;

    info!(%event, name, "hook removed");
    println!("Hook \"{name}\" removed from {event}.");
    Ok(())
}
