//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs, list::ListArgs, register::RegisterArgs,
};
use crate::core::Config;

#[derive(Parser)]
#[command(name = "registrar")]
#[command(author, version, about = "Course Registration Program")]
#[command(
    long_about = "A console utility for registering students to courses. Enrollments are kept as a plain JSON file that can be inspected and versioned like any other text file. Run without a subcommand for the interactive menu."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Roster file (default: Enrollments.json, or `file` from config)
    #[arg(long, short = 'F', global = true)]
    pub file: Option<PathBuf>,

    /// Pretty-print the roster JSON when saving
    #[arg(long, global = true)]
    pub pretty: bool,
}

impl GlobalOpts {
    /// Resolve the roster path: flag beats env/config, config beats the default
    pub fn roster_path(&self, config: &Config) -> PathBuf {
        self.file.clone().unwrap_or_else(|| config.roster_path())
    }

    /// Resolve pretty-printing: the flag or the config key enables it
    pub fn pretty(&self, config: &Config) -> bool {
        self.pretty || config.pretty()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a student for a course without the menu
    Register(RegisterArgs),

    /// List current enrollments
    List(ListArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}
