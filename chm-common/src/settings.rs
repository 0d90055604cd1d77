//! Merging hook registrations into the host's `settings.json`.
//!
//! The settings file is owned by Claude Code; this tool manages exactly one
//! top-level key, `hooks`, and must leave everything else untouched. The
//! transforms therefore work on raw [`serde_json::Value`] rather than a
//! typed schema: unknown keys, unknown handler fields, and the host's own
//! key order all survive the round trip (serde_json's `preserve_order`
//! feature keeps object ordering stable).
//!
//! Shape of the managed key:
//!
//! ```json
//! {
//!   "hooks": {
//!     "PreToolUse": [
//!       { "matcher": "Bash", "hooks": [ { "type": "command", "command": "..." } ] }
//!     ]
//!   }
//! }
//! ```
//!
//! Invariants maintained here: at most one matcher group per distinct
//! matcher value (the no-matcher bucket is its own value), and no empty
//! group, event list, or `hooks` mapping is ever written back.

use crate::error::HookError;
use crate::events::HookEvent;
use crate::fsio::write_json_pretty;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Build the command string the host re-invokes for a registered hook.
///
/// The template is fixed: changing it would orphan every handler already
/// written to settings, since removal matches on the exact string.
pub fn invocation_command(relative_path: &str) -> String {
    format!("chm run {relative_path}")
}

/// Read the settings file; a missing file is an empty object.
pub fn read_settings(path: &Path) -> Result<Value, HookError> {
    if !path.exists() {
        return Ok(json!({}));
    }
    let content = fs::read_to_string(path).map_err(|e| HookError::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}

/// Persist the settings file (2-space indent, trailing newline, atomic).
pub fn write_settings(path: &Path, settings: &Value) -> Result<(), HookError> {
    write_json_pretty(path, settings)
}

fn malformed(detail: impl Into<String>) -> HookError {
    HookError::MalformedSettings {
        detail: detail.into(),
    }
}

/// The matcher of a group, with absent treated as its own distinct bucket.
fn group_matcher(group: &Value) -> Option<&str> {
    group.get("matcher").and_then(Value::as_str)
}

/// Register a hook invocation under `event`, grouped by `matcher`.
///
/// Appends to the existing group with an equal matcher value, or creates a
/// new group (omitting the `matcher` field entirely when none is given).
/// Pure: the input value is consumed and the updated value returned.
pub fn add_hook_to_settings(
    mut settings: Value,
    event: HookEvent,
    relative_path: &str,
    matcher: Option<&str>,
) -> Result<Value, HookError> {
    let handler = json!({
        "type": "command",
        "command": invocation_command(relative_path),
    });

    let root = settings
        .as_object_mut()
        .ok_or_else(|| malformed("settings root is not a JSON object"))?;

    let hooks = root.entry("hooks").or_insert_with(|| json!({}));
    let hooks_obj = hooks
        .as_object_mut()
        .ok_or_else(|| malformed("\"hooks\" is not a JSON object"))?;

    let groups = hooks_obj.entry(event.as_str()).or_insert_with(|| json!([]));
    let groups = groups
        .as_array_mut()
        .ok_or_else(|| malformed(format!("\"hooks.{event}\" is not an array")))?;

    match groups.iter().position(|g| group_matcher(g) == matcher) {
        Some(idx) => {
            let handlers = groups[idx]
                .get_mut("hooks")
                .and_then(Value::as_array_mut)
                .ok_or_else(|| {
                    malformed(format!("matcher group under \"{event}\" has no hooks array"))
                })?;
            handlers.push(handler);
        }
        None => {
            let group = match matcher {
                Some(m) => json!({ "matcher": m, "hooks": [handler] }),
                None => json!({ "hooks": [handler] }),
            };
            groups.push(group);
        }
    }

    debug!(%event, relative_path, "registered hook in settings");
    Ok(settings)
}

/// Remove every handler for `relative_path` under `event`, pruning as it
/// goes: empty groups, then the event key, then the `hooks` key itself.
///
/// Identity (modulo that pruning) when the event or command is absent.
pub fn remove_hook_from_settings(
    mut settings: Value,
    event: HookEvent,
    relative_path: &str,
) -> Result<Value, HookError> {
    let command = invocation_command(relative_path);

    let root = settings
        .as_object_mut()
        .ok_or_else(|| malformed("settings root is not a JSON object"))?;

    let Some(hooks) = root.get_mut("hooks") else {
        return Ok(settings);
    };
    let hooks_obj = hooks
        .as_object_mut()
        .ok_or_else(|| malformed("\"hooks\" is not a JSON object"))?;

    let Some(groups) = hooks_obj.get_mut(event.as_str()) else {
        return Ok(settings);
    };
    let groups = groups
        .as_array_mut()
        .ok_or_else(|| malformed(format!("\"hooks.{event}\" is not an array")))?;

    for group in groups.iter_mut() {
        let handlers = group
            .get_mut("hooks")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| malformed(format!("matcher group under \"{event}\" has no hooks array")))?;
        handlers.retain(|h| h.get("command").and_then(Value::as_str) != Some(command.as_str()));
    }
    groups.retain(|g| {
        g.get("hooks")
            .and_then(Value::as_array)
            .is_some_and(|handlers| !handlers.is_empty())
    });

    if groups.is_empty() {
        hooks_obj.shift_remove(event.as_str());
    }
    if hooks_obj.is_empty() {
        root.shift_remove("hooks");
    }

    debug!(%event, relative_path, "removed hook from settings");
    Ok(settings)
}
