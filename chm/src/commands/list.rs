//! Render registered hooks as a fixed-width table. Read-only.

use anyhow::Result;
use chm_common::events::HookEvent;
use chm_common::metadata::read_metadata;
use chm_common::{HookEntry, HookPaths};

fn pad_right(s: &str, len: usize) -> String {
    if s.len() >= len {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(len - s.len()))
    }
}

/// Render the table body, or `None` when nothing matches the filter.
pub fn render_table(hooks: &[HookEntry]) -> Option<String> {
    if hooks.is_empty() {
        return None;
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{} {} {} {} FILE\n",
        pad_right("NAME", 20),
        pad_right("EVENT", 20),
        pad_right("KIND", 8),
        pad_right("MATCHER", 15),
    ));
    out.push_str(&"-".repeat(90));
    out.push('\n');

    for hook in hooks {
        let matcher = hook.matcher.as_deref().unwrap_or("-");
        out.push_str(&format!(
            "{} {} {} {} {}\n",
            pad_right(&hook.name, 20),
            pad_right(hook.event.as_str(), 20),
            pad_right(hook.kind.as_str(), 8),
            pad_right(matcher, 15),
            hook.file,
        ));
    }
    Some(out)
}

/// List hooks, optionally filtered to one event.
pub fn list_hooks(paths: &HookPaths, event: Option<HookEvent>) -> Result<()> {
    let metadata = read_metadata(&paths.metadata_path)?;

    let hooks: Vec<HookEntry> = match event {
        Some(event) => metadata
            .hooks
            .into_iter()
            .filter(|h| h.event == event)
            .collect(),
        None => metadata.hooks,
    };

    match render_table(&hooks) {
        Some(table) => print!("{table}"),
        None => match event {
            Some(event) => println!("No hooks registered for {event}."),
            None => println!("No hooks registered."),
        },
    }
    Ok(())
}
