//! Command orchestration for the Claude Code Hook Manager CLI.
//!
//! Exposed as a library so the integration tests can drive the same code
//! paths as the binary against temp-directory store roots.

pub mod commands;
pub mod editor;
