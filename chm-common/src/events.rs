//! Static registry of Claude Code lifecycle events.
//!
//! Every table in this module is a total `match` over [`HookEvent`], so
//! adding a variant without extending the tables is a compile error rather
//! than a silent misclassification at run time.

use crate::error::HookError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Claude Code lifecycle event that can carry hooks.
///
/// The set is closed and fixed at build time; unrecognized names are
/// rejected during parsing, before any classification is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookEvent {
    SessionStart,
    UserPromptSubmit,
    PreToolUse,
    PostToolUse,
    PostToolUseFailure,
    Stop,
    Notification,
    SubagentStart,
    SubagentStop,
    PermissionRequest,
    ConfigChange,
    PreCompact,
    SessionEnd,
    TeammateIdle,
    TaskCompleted,
    WorktreeCreate,
    WorktreeRemove,
}

impl HookEvent {
    /// All recognized events, in the order they are documented to users.
    pub const ALL: [HookEvent; 17] = [
        HookEvent::PreToolUse,
        HookEvent::PostToolUse,
        HookEvent::PostToolUseFailure,
        HookEvent::SessionStart,
        HookEvent::UserPromptSubmit,
        HookEvent::Stop,
        HookEvent::Notification,
        HookEvent::SubagentStart,
        HookEvent::SubagentStop,
        HookEvent::PermissionRequest,
        HookEvent::ConfigChange,
        HookEvent::PreCompact,
        HookEvent::SessionEnd,
        HookEvent::TeammateIdle,
        HookEvent::TaskCompleted,
        HookEvent::WorktreeCreate,
        HookEvent::WorktreeRemove,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HookEvent::SessionStart => "SessionStart",
            HookEvent::UserPromptSubmit => "UserPromptSubmit",
            HookEvent::PreToolUse => "PreToolUse",
            HookEvent::PostToolUse => "PostToolUse",
            HookEvent::PostToolUseFailure => "PostToolUseFailure",
            HookEvent::Stop => "Stop",
            HookEvent::Notification => "Notification",
            HookEvent::SubagentStart => "SubagentStart",
            HookEvent::SubagentStop => "SubagentStop",
            HookEvent::PermissionRequest => "PermissionRequest",
            HookEvent::ConfigChange => "ConfigChange",
            HookEvent::PreCompact => "PreCompact",
            HookEvent::SessionEnd => "SessionEnd",
            HookEvent::TeammateIdle => "TeammateIdle",
            HookEvent::TaskCompleted => "TaskCompleted",
            HookEvent::WorktreeCreate => "WorktreeCreate",
            HookEvent::WorktreeRemove => "WorktreeRemove",
        }
    }

    /// Whether a prompt hook on this event can inject context, and how.
    pub fn prompt_compatibility(&self) -> PromptCompatibility {
        match self {
            HookEvent::SessionStart | HookEvent::UserPromptSubmit => {
                PromptCompatibility::Plaintext
            }
            HookEvent::PreToolUse
            | HookEvent::PostToolUse
            | HookEvent::PostToolUseFailure
            | HookEvent::Stop
            | HookEvent::PermissionRequest
            | HookEvent::SubagentStop
            | HookEvent::TaskCompleted => PromptCompatibility::Json,
            HookEvent::Notification
            | HookEvent::SubagentStart
            | HookEvent::ConfigChange
            | HookEvent::PreCompact
            | HookEvent::SessionEnd
            | HookEvent::TeammateIdle
            | HookEvent::WorktreeCreate
            | HookEvent::WorktreeRemove => PromptCompatibility::Incompatible,
        }
    }

    /// JSON shape the host sends on stdin to script hooks for this event.
    pub fn script_stdin_doc(&self) -> &'static str {
        match self {
            HookEvent::SessionStart => "{ session_id, cwd, source }",
            HookEvent::UserPromptSubmit => "{ prompt }",
            HookEvent::PreToolUse => "{ tool_name, tool_input }",
            HookEvent::PostToolUse => "{ tool_name, tool_input, tool_response }",
            HookEvent::PostToolUseFailure => "{ tool_name, tool_input, tool_error }",
            HookEvent::Stop => "{ stop_hook_active, last_assistant_message }",
            HookEvent::Notification => "{ message, notification_type }",
            HookEvent::SubagentStart => "{ agent_name, task }",
            HookEvent::SubagentStop => "{ agent_name, task, result }",
            HookEvent::PermissionRequest => "{ tool_name, permission_type }",
            HookEvent::ConfigChange => "{ key, old_value, new_value }",
            HookEvent::PreCompact => "{ message_count, token_count }",
            HookEvent::SessionEnd => "{}",
            HookEvent::TeammateIdle => "{ teammate_name }",
            HookEvent::TaskCompleted => "{ task_id, result }",
            HookEvent::WorktreeCreate => "{ worktree_path, branch }",
            HookEvent::WorktreeRemove => "{ worktree_path, branch }",
        }
    }

    /// What the host expects a script hook to write to stdout.
    pub fn script_stdout_doc(&self) -> &'static str {
        match self {
            HookEvent::SessionStart | HookEvent::UserPromptSubmit => {
                "stdout: text injected as context"
            }
            HookEvent::PreToolUse => {
                "stdout: JSON { \"hookSpecificOutput\": { \"permissionDecision\": \
                 \"allow\"|\"deny\"|\"ask\", \"additionalContext\": \"...\" } }"
            }
            HookEvent::Stop => {
                "stdout: JSON { \"decision\": \"stop\"|\"continue\", \"additionalContext\": \"...\" }"
            }
            HookEvent::PostToolUse
            | HookEvent::PostToolUseFailure
            | HookEvent::SubagentStop
            | HookEvent::PermissionRequest
            | HookEvent::TaskCompleted => "stdout: JSON { \"additionalContext\": \"...\" } (optional)",
            HookEvent::Notification
            | HookEvent::SubagentStart
            | HookEvent::ConfigChange
            | HookEvent::PreCompact
            | HookEvent::SessionEnd
            | HookEvent::TeammateIdle
            | HookEvent::WorktreeCreate
            | HookEvent::WorktreeRemove => {
                "stdout: ignored (side-effect only)\n# exit 0 = success, exit 2 = block with error"
            }
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookEvent {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookEvent::ALL
            .iter()
            .find(|e| e.as_str() == s)
            .copied()
            .ok_or_else(|| HookError::UnknownEvent(s.to_string()))
    }
}

/// How prompt content is delivered to the host for a given event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptCompatibility {
    /// Content is emitted to the host verbatim.
    Plaintext,
    /// Content must be wrapped in an event-specific JSON envelope.
    Json,
    /// Event is side-effect only; prompt hooks are a hard error.
    Incompatible,
}

/// What backs a hook: a markdown prompt or a shell script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookKind {
    Prompt,
    Script,
}

impl HookKind {
    /// File extension (with leading dot) for hook files of this kind.
    pub fn file_extension(&self) -> &'static str {
        match self {
            HookKind::Prompt => ".md",
            HookKind::Script => ".sh",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HookKind::Prompt => "prompt",
            HookKind::Script => "script",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prompt" => Ok(HookKind::Prompt),
            "script" => Ok(HookKind::Script),
            other => Err(format!("unknown hook kind '{other}' (expected prompt or script)")),
        }
    }
}

/// Wrap prompt content in the JSON envelope the host expects for `event`.
///
/// PreToolUse uses the richer `hookSpecificOutput` envelope with a fixed
/// `permissionDecision: "ask"`; every other json-class event uses the flat
/// `additionalContext` form.
pub fn wrap_prompt_as_json(event: HookEvent, content: &str) -> String {
    let value = match event {
        HookEvent::PreToolUse => serde_json::json!({
            "hookSpecificOutput": {
                "hookEventName": "PreToolUse",
                "permissionDecision": "ask",
                "additionalContext": content,
            }
        }),
        _ => serde_json::json!({ "additionalContext": content }),
    };
    value.to_string()
}

/// Starter content for a new prompt hook file.
///
/// Json-class events carry an extra note so the author knows the content
/// will be auto-wrapped at run time rather than stored pre-wrapped.
pub fn prompt_template(name: &str, event: HookEvent) -> String {
    match event.prompt_compatibility() {
        PromptCompatibility::Json => format!(
            "# {name}\n\n<!-- This prompt will be wrapped in JSON and injected as \
             additionalContext on {event} -->\n\n"
        ),
        _ => format!("# {name}\n\n<!-- This prompt will be injected as context on {event} -->\n\n"),
    }
}

/// Starter content for a new script hook file.
///
/// Embeds the expected stdin shape and stdout contract for the event as
/// inline documentation, so a freshly opened editor shows the interface.
pub fn script_template(name: &str, event: HookEvent) -> String {
    format!(
        "#!/usr/bin/env bash\n# {name} - runs on {event}\n# stdin: {}\n# {}\nset -euo pipefail\n\n",
        event.script_stdin_doc(),
        event.script_stdout_doc(),
    )
}
