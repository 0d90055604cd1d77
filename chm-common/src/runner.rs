//! Run-time classification of hook files.
//!
//! The dispatcher in the CLI resolves a relative path, asks this module
//! what the file is, and either emits prompt output or hands the script to
//! the shell. The pure parts live here so they can be tested without
//! spawning processes.

use crate::error::HookError;
use crate::events::{HookEvent, HookKind, PromptCompatibility, wrap_prompt_as_json};
use std::path::Path;

/// Classify a hook file by extension. Anything but the two recognized
/// extensions is a hard error, raised before any execution is attempted.
pub fn classify_extension(path: &Path) -> Result<HookKind, HookError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "md" => Ok(HookKind::Prompt),
        "sh" => Ok(HookKind::Script),
        _ => Err(HookError::UnknownExtension(format!(".{ext}"))),
    }
}

/// Extract the event from the leading directory segment of a stored
/// relative path (`<Event>/<name>.<ext>`). Unrecognized segments yield
/// `None`: the content is then treated as opaque.
pub fn extract_event(relative_path: &str) -> Option<HookEvent> {
    let segment = relative_path.split('/').next().unwrap_or(relative_path);
    segment.parse().ok()
}

/// Produce the text a prompt hook emits to the host.
///
/// Re-runs the same compatibility classification as at registration time:
/// an incompatible event is a hard error even here, in case a hook file
/// was placed by hand rather than through `add`.
pub fn render_prompt(relative_path: &str, content: &str) -> Result<String, HookError> {
    let Some(event) = extract_event(relative_path) else {
        // No known event in the path means no wrapping rule can apply.
        return Ok(content.to_string());
    };

    match event.prompt_compatibility() {
        PromptCompatibility::Incompatible => Err(HookError::PromptIncompatible {
            event: event.to_string(),
        }),
        PromptCompatibility::Json => Ok(wrap_prompt_as_json(event, content)),
        PromptCompatibility::Plaintext => Ok(content.to_string()),
    }
}
