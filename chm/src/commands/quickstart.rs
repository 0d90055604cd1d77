//! Usage guide, generated from the event registry so it can never drift
//! from the actual classification tables.

use chm_common::events::{HookEvent, PromptCompatibility};

fn format_event_table() -> String {
    let mut plaintext = Vec::new();
    let mut json = Vec::new();
    let mut script_only = Vec::new();

    for event in HookEvent::ALL {
        match event.prompt_compatibility() {
            PromptCompatibility::Plaintext => plaintext.push(event.as_str()),
            PromptCompatibility::Json => json.push(event.as_str()),
            PromptCompatibility::Incompatible => script_only.push(event.as_str()),
        }
    }

    format!(
        "Events by prompt compatibility:\n  \
         plaintext (raw stdout):    {}\n  \
         json (auto-wrapped):       {}\n  \
         script-only (no prompts):  {}",
        plaintext.join(", "),
        json.join(", "),
        script_only.join(", "),
    )
}

fn format_stdin_reference() -> String {
    let mut lines = vec!["Script stdin by event:".to_string()];
    for event in HookEvent::ALL {
        lines.push(format!("  {event}: {}", event.script_stdin_doc()));
    }
    lines.join("\n")
}

pub fn quickstart_text() -> String {
    format!(
        r#"# chm — Claude Code Hook Manager

Manages Claude Code hooks. Creates hook files, registers them in settings.json, tracks metadata.

## Hook Types

- prompt (.md): Markdown content injected as context into Claude. Some events auto-wrap in JSON.
- script (.sh): Bash script executed on the event. Receives JSON on stdin. Works for all events.

## {events}

## Commands

Add a hook (opens $EDITOR):
  chm add <Event> prompt <name> [--matcher <regex>] [--project]
  chm add <Event> script <name> [--matcher <regex>] [--project]

Add a hook with content (skips $EDITOR, ideal for AI agents):
  chm add <Event> prompt <name> --content "your markdown content"
  chm add <Event> script <name> --content '#!/usr/bin/env bash
echo "hello"'

List hooks:
  chm list [<Event>] [--project]

Remove a hook:
  chm remove <Event> <name> [--project]

Edit a hook (opens $EDITOR):
  chm edit <Event> <name> [--project]

## Examples

Add a SessionStart prompt:
  chm add SessionStart prompt my-context --content "Always use TypeScript strict mode."

Add a PreToolUse prompt (auto-wrapped in JSON):
  chm add PreToolUse prompt lint-check --matcher "Bash" --content "Run linter before executing bash commands."

Add a UserPromptSubmit script:
  chm add UserPromptSubmit script log-prompt --content '#!/usr/bin/env bash
set -euo pipefail
jq -r .prompt | tee -a /tmp/claude-prompts.log'

## {stdin}

## Flags

--content <text>  Write content directly to the hook file (skips $EDITOR)
--matcher <regex> Regex matcher (e.g. "Bash" for PreToolUse to match tool name)
--project         Target project-level hooks (.claude/ in cwd) instead of global (~/.claude/)
"#,
        events = format_event_table(),
        stdin = format_stdin_reference(),
    )
}

pub fn quickstart() {
    print!("{}", quickstart_text());
}
