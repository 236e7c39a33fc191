//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// Hard failures (bad certification, unreadable workspace) are returned
    /// as errors. Partial load failures are reported through `ui` as warnings.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher that resolves relative workspace paths against
    /// `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Absolute workspace root for a `--opencontrol` value.
    pub fn workspace_root(&self, opencontrol: &Path) -> PathBuf {
        self.working_dir.join(opencontrol)
    }

    /// Dispatch a command and report a hard error through `ui`.
    ///
    /// An error is shown once and becomes a failure result with exit code 1.
    pub fn run(&self, cli: &Cli, ui: &mut dyn UserInterface) -> CommandResult {
        match self.dispatch(cli, ui) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!("Command failed: {}", e);
                ui.error(&e.to_string());
                CommandResult::failure(1)
            }
        }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Diff(args) => {
                let root = self.workspace_root(&args.workspace.opencontrol);
                super::diff::DiffCommand::new(&root, args.clone()).execute(ui)
            }
            Commands::Status(args) => {
                let root = self.workspace_root(&args.workspace.opencontrol);
                super::status::StatusCommand::new(&root, args.clone()).execute(ui)
            }
            Commands::List(args) => {
                let root = self.workspace_root(&args.workspace.opencontrol);
                super::list::ListCommand::new(&root, args.clone()).execute(ui)
            }
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}
