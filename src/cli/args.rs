//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Generate iOS, Android and React resources from the master files
//! - `init`: Initialize lingo configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::Platform;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Master translations directory (overrides config file)
    #[arg(long, env = "LINGO_MASTER_ROOT")]
    pub master_root: Option<PathBuf>,

    /// Output directory, deleted and rebuilt on every run (overrides config file)
    #[arg(long, env = "LINGO_OUTPUT_ROOT")]
    pub output_root: Option<PathBuf>,

    /// Base language of the iOS catalogs and Android default resources (overrides config file)
    #[arg(long)]
    pub source_language: Option<String>,

    /// Platforms to generate (default: all)
    /// Can be specified multiple times: --target ios --target react
    #[arg(long = "target", value_enum)]
    pub targets: Vec<Platform>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub args: BuildArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate iOS, Android and React translation files from the master directory
    Build(BuildCommand),
    /// Initialize a new .lingorc.json configuration file
    Init,
}
