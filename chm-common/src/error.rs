//! Error taxonomy for hook management.
//!
//! Every error is terminal for the invoked command: the CLI reports it and
//! exits non-zero. There is no retry or recovery path anywhere in the tool.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while managing or running hooks.
#[derive(Debug, Error)]
pub enum HookError {
    /// Event name is not one of the recognized lifecycle events.
    #[error("unknown hook event '{0}'")]
    UnknownEvent(String),

    /// Prompt hooks cannot carry injected context for this event.
    #[error(
        "prompt hooks are not supported for \"{event}\": this event is side-effect \
         only and does not inject context into Claude. Use a script hook instead"
    )]
    PromptIncompatible { event: String },

    /// A hook with this `(event, name)` pair is already registered.
    #[error("hook \"{name}\" already exists for event \"{event}\"")]
    DuplicateHook { event: String, name: String },

    /// No hook with this `(event, name)` pair is registered.
    #[error("hook \"{name}\" not found for event \"{event}\"")]
    HookNotFound { event: String, name: String },

    /// Hook file extension maps to neither prompt nor script.
    #[error("unknown file extension: {0}")]
    UnknownExtension(String),

    /// The managed portion of the settings file has an unexpected shape.
    #[error("malformed settings file: {detail}")]
    MalformedSettings { detail: String },

    /// Home directory could not be determined for global scope.
    #[error("could not determine home directory")]
    HomeDirUnavailable,

    /// File could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store contents failed to parse or serialize as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HookError {
    /// Attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
