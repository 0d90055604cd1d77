//! Open an existing hook file in the editor. No store mutation.

use crate::editor::open_in_editor;
use anyhow::Result;
use chm_common::events::HookEvent;
use chm_common::metadata::{find_hook_entry, read_metadata};
use chm_common::{EnvConfig, HookError, HookPaths};

pub fn edit_hook(
    paths: &HookPaths,
    config: &EnvConfig,
    event: HookEvent,
    name: &str,
) -> Result<()> {
    let metadata = read_metadata(&paths.metadata_path)?;
    let Some(entry) = find_hook_entry(&metadata, event, name) else {
        return Err(HookError::HookNotFound {
            event: event.to_string(),
            name: name.to_string(),
        }
        .into());
    };

    let file_path = paths.resolve_hook_file(&entry.file);
    open_in_editor(&config.editor, &file_path)?;
    println!("Hook \"{name}\" updated.");
    Ok(())
}
