//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{DEFAULT_OPENCONTROL_DIR, OPENCONTROL_DIR_ENV};

/// Masonry - compliance gap analysis over OpenControl workspaces.
#[derive(Debug, Parser)]
#[command(name = "masonry")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show required controls that no component satisfies
    Diff(DiffArgs),

    /// List claims with a given implementation status
    Status(StatusArgs),

    /// List loaded components and standards
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Arguments shared by every command that loads a workspace.
#[derive(Debug, Clone, clap::Args)]
pub struct WorkspaceArgs {
    /// Certification to evaluate (a file stem under certifications/)
    pub certification: Option<String>,

    /// OpenControl workspace directory
    #[arg(
        short = 'o',
        long = "opencontrol",
        env = OPENCONTROL_DIR_ENV,
        default_value = DEFAULT_OPENCONTROL_DIR
    )]
    pub opencontrol: PathBuf,
}

impl WorkspaceArgs {
    /// The certification name, empty when none was given.
    pub fn certification_name(&self) -> &str {
        self.certification.as_deref().unwrap_or_default()
    }
}

/// Arguments for the `diff` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,

    /// Implementation status to look for
    #[arg(short = 'i', long, default_value = "partial")]
    pub implementation_status: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn diff_defaults() {
        let cli = Cli::try_parse_from(["masonry", "diff", "LATO"]).unwrap();
        let Commands::Diff(args) = cli.command else {
            panic!("expected diff");
        };
        assert_eq!(args.workspace.certification_name(), "LATO");
        assert_eq!(args.format, OutputFormat::Human);
    }

    #[test]
    fn diff_without_certification_parses() {
        let cli = Cli::try_parse_from(["masonry", "diff", "-o", "/tmp/oc"]).unwrap();
        let Commands::Diff(args) = cli.command else {
            panic!("expected diff");
        };
        assert_eq!(args.workspace.certification_name(), "");
        assert_eq!(args.workspace.opencontrol, PathBuf::from("/tmp/oc"));
    }

    #[test]
    fn status_defaults_to_partial() {
        let cli = Cli::try_parse_from(["masonry", "status", "LATO", "--format", "json"]).unwrap();
        let Commands::Status(args) = cli.command else {
            panic!("expected status");
        };
        assert_eq!(args.implementation_status, "partial");
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["masonry", "list", "LATO", "--quiet", "--no-color"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.no_color);
    }

    #[test]
    fn json_format_flag() {
        let cli = Cli::try_parse_from(["masonry", "diff", "LATO", "--format", "json"]).unwrap();
        let Commands::Diff(args) = cli.command else {
            panic!("expected diff");
        };
        assert_eq!(args.format, OutputFormat::Json);
    }
}
