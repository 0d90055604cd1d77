//! Register a new hook: file on disk, metadata entry, settings handler.

use crate::editor::open_in_editor;
use anyhow::{Context, Result};
use chm_common::events::{
    HookEvent, HookKind, PromptCompatibility, prompt_template, script_template,
};
use chm_common::metadata::{add_hook_entry, find_hook_entry, read_metadata, write_metadata};
use chm_common::settings::{add_hook_to_settings, read_settings, write_settings};
use chm_common::{EnvConfig, HookEntry, HookError, HookPaths};
use chrono::Utc;
use std::fs;
use tracing::info;

/// Add a hook for `event` and mirror it into the host settings.
///
/// Both stores are updated, metadata first. A duplicate `(event, name)` or
/// an incompatible prompt event fails before anything is written.
pub fn add_hook(
    paths: &HookPaths,
    config: &EnvConfig,
    event: HookEvent,
    kind: HookKind,
    name: &str,
    matcher: Option<&str>,
    content: Option<&str>,
) -> Result<()> {
    if kind == HookKind::Prompt {
        match event.prompt_compatibility() {
            PromptCompatibility::Incompatible => {
                return Err(HookError::PromptIncompatible {
                    event: event.to_string(),
                }
                .into());
            }
            PromptCompatibility::Json => {
                println!(
                    "Note: Prompt content for {event} will be auto-wrapped in JSON for compatibility."
                );
            }
            PromptCompatibility::Plaintext => {}
        }
    }

    let metadata = read_metadata(&paths.metadata_path)?;
    if find_hook_entry(&metadata, event, name).is_some() {
        return Err(HookError::DuplicateHook {
            event: event.to_string(),
            name: name.to_string(),
        }
        .into());
    }

    let event_dir = paths.hooks_dir.join(event.as_str());
    if !event_dir.exists() {
        fs::create_dir_all(&event_dir)
            .with_context(|| format!("failed to create {}", event_dir.display()))?;
    }

    let file_name = format!("{name}{}", kind.file_extension());
    let file_path = event_dir.join(&file_name);
    let relative_path = format!("{event}/{file_name}");

    match content {
        Some(content) => {
            fs::write(&file_path, content)
                .with_context(|| format!("failed to write {}", file_path.display()))?;
        }
        None => {
            let template = match kind {
                HookKind::Prompt => prompt_template(name, event),
                HookKind::Script => script_template(name, event),
            };
            fs::write(&file_path, template)
                .with_context(|| format!("failed to write {}", file_path.display()))?;
            open_in_editor(&config.editor, &file_path)?;
        }
    }

    let entry = HookEntry {
        name: name.to_string(),
        event,
        kind,
        matcher: matcher.map(str::to_string),
        file: relative_path.clone(),
        created_at: Utc::now(),
    };
    let metadata = add_hook_entry(metadata, entry);
    write_metadata(&paths.metadata_path, &metadata)?;

    let settings = read_settings(&paths.settings_path)?;
    let settings = add_hook_to_settings(settings, event, &relative_path, matcher)?;
    write_settings(&paths.settings_path, &settings)?;

    info!(%event, name, kind = %kind, "hook registered");
    println!("Hook \"{name}\" added for {event} ({kind}).");
    println!("File: {}", file_path.display());
    Ok(())
}
