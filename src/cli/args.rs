//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: write dictionary files of translation pairs
//! - `check-word`: report pairs whose translation lacks an expected word
//! - `init`: create a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "jpug-doc-tool", author, version, about, long_about = None)]
pub struct Arguments {
    /// Config file (default: nearest .jpug-doc-tool.json, then one in the home directory)
    #[arg(long, global = true, env = "JPUG_DOC_TOOL_CONFIG")]
    pub config: Option<PathBuf>,

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::CheckWord(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the extraction commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Documentation directory holding the SGML sources
    #[arg(short = 'C', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// SGML files relative to the directory (default: every source file)
    pub files: Vec<String>,

    /// Read the documents themselves instead of their diff against the release tag
    #[arg(long)]
    pub para: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckWordCommand {
    /// English word or phrase to look for
    pub original: String,

    /// Japanese word expected in the translation
    pub translation: String,

    /// SGML files relative to the directory (default: every source file)
    pub files: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract English/Japanese pairs into dictionary files
    Extract(ExtractCommand),
    /// Report pairs whose original has a word but whose translation lacks the expected one
    CheckWord(CheckWordCommand),
    /// Initialize a new .jpug-doc-tool.json configuration file
    Init,
}
