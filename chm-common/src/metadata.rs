//! Sidecar metadata store listing every registered hook.
//!
//! The store is a single JSON file kept next to the hook files. Reads and
//! writes are value-oriented: load the whole file, transform with the pure
//! functions below, persist the result. Uniqueness of `(event, name)` is
//! the caller's invariant to enforce via [`find_hook_entry`] before
//! [`add_hook_entry`].

use crate::error::HookError;
use crate::events::{HookEvent, HookKind};
use crate::fsio::write_json_pretty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One registered hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookEntry {
    /// Hook name, unique per event.
    pub name: String,
    pub event: HookEvent,
    pub kind: HookKind,
    /// Optional tool matcher, stored as `null` when absent.
    pub matcher: Option<String>,
    /// Path of the backing file, relative to the hooks directory.
    pub file: String,
    pub created_at: DateTime<Utc>,
}

/// The whole metadata file; insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataFile {
    pub hooks: Vec<HookEntry>,
}

/// Read the metadata file; a missing file is the empty store, not an error.
pub fn read_metadata(path: &Path) -> Result<MetadataFile, HookError> {
    if !path.exists() {
        return Ok(MetadataFile::default());
    }
    let content = fs::read_to_string(path).map_err(|e| HookError::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}

/// Persist the metadata file (2-space indent, trailing newline, atomic).
pub fn write_metadata(path: &Path, metadata: &MetadataFile) -> Result<(), HookError> {
    write_json_pretty(path, metadata)
}

/// Find the entry for `(event, name)`, if registered.
pub fn find_hook_entry<'a>(
    metadata: &'a MetadataFile,
    event: HookEvent,
    name: &str,
) -> Option<&'a HookEntry> {
    metadata
        .hooks
        .iter()
        .find(|h| h.event == event && h.name == name)
}

/// Append an entry. Pure; callers check uniqueness first.
pub fn add_hook_entry(mut metadata: MetadataFile, entry: HookEntry) -> MetadataFile {
    metadata.hooks.push(entry);
    metadata
}

/// Drop the entry for `(event, name)`. Pure; no-op when absent.
pub fn remove_hook_entry(mut metadata: MetadataFile, event: HookEvent, name: &str) -> MetadataFile {
    metadata.hooks.retain(|h| !(h.event == event && h.name == name));
    metadata
}
