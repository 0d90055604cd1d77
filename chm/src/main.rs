//! Claude Code Hook Manager - lifecycle hook CLI.
//!
//! Thin dispatch over the command modules: parse arguments, resolve the
//! store paths and environment configuration once, hand off. Script hooks
//! propagate their exit code through this process, so `main` maps command
//! results onto the process exit status explicitly.

#![forbid(unsafe_code)]

use anyhow::Result;
use chm::commands::{add, edit, list, quickstart, remove, run};
use chm_common::events::{HookEvent, HookKind};
use chm_common::{EnvConfig, HookPaths, Scope};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn parse_event(s: &str) -> Result<HookEvent, String> {
    s.parse().map_err(|e: chm_common::HookError| e.to_string())
}

fn parse_kind(s: &str) -> Result<HookKind, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "chm")]
#[command(author, version, about = "Claude Code Hook Manager")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a hook: create its file, record it, register it in settings
    Add {
        /// Lifecycle event (e.g. PreToolUse, SessionStart)
        #[arg(value_parser = parse_event)]
        event: HookEvent,
        /// Hook kind: prompt (.md) or script (.sh)
        #[arg(value_parser = parse_kind)]
        kind: HookKind,
        /// Hook name, unique per event
        name: String,
        /// Regex matcher for this hook
        #[arg(long)]
        matcher: Option<String>,
        /// Write content directly (skips $EDITOR)
        #[arg(long)]
        content: Option<String>,
        /// Target project-level settings
        #[arg(long)]
        project: bool,
    },
    /// Remove a hook and its settings registration
    Remove {
        #[arg(value_parser = parse_event)]
        event: HookEvent,
        name: String,
        /// Target project-level settings
        #[arg(long)]
        project: bool,
    },
    /// Open a hook file in $EDITOR
    Edit {
        #[arg(value_parser = parse_event)]
        event: HookEvent,
        name: String,
        /// Target project-level settings
        #[arg(long)]
        project: bool,
    },
    /// List registered hooks
    List {
        /// Only show hooks for this event
        #[arg(value_parser = parse_event)]
        event: Option<HookEvent>,
        /// Target project-level settings
        #[arg(long)]
        project: bool,
    },
    /// Run a hook file (internal; invoked by Claude Code)
    Run {
        /// Hook path relative to the hooks directory
        path: String,
    },
    /// Show usage guide for AI agents
    Quickstart,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr: `run` owns stdout for prompt output.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("CHM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = EnvConfig::from_env();

    let exit_code = match cli.command {
        Commands::Add {
            event,
            kind,
            name,
            matcher,
            content,
            project,
        } => {
            let paths = HookPaths::resolve(Scope::from_project_flag(project))?;
            add::add_hook(
                &paths,
                &config,
                event,
                kind,
                &name,
                matcher.as_deref(),
                content.as_deref(),
            )?;
            0
        }
        Commands::Remove {
            event,
            name,
            project,
        } => {
            let paths = HookPaths::resolve(Scope::from_project_flag(project))?;
            remove::remove_hook(&paths, event, &name)?;
            0
        }
        Commands::Edit {
            event,
            name,
            project,
        } => {
            let paths = HookPaths::resolve(Scope::from_project_flag(project))?;
            edit::edit_hook(&paths, &config, event, &name)?;
            0
        }
        Commands::List { event, project } => {
            let paths = HookPaths::resolve(Scope::from_project_flag(project))?;
            list::list_hooks(&paths, event)?;
            0
        }
        Commands::Run { path } => run::run_hook(&config, &path)?,
        Commands::Quickstart => {
            quickstart::quickstart();
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
