//! `registrar list` - show current enrollments

use clap::ValueEnum;
use miette::{IntoDiagnostic, Result};

use crate::cli::{helpers, output, GlobalOpts};
use crate::core::Config;

/// Output format for `list`
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListFormat {
    /// One student per line, between separator rules
    #[default]
    Plain,
    /// JSON array, same shape as the roster file
    Json,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "plain")]
    pub format: ListFormat,

    /// Show only the number of enrollments
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let path = global.roster_path(&config);

    let students = helpers::load_or_empty(&path);

    if args.count {
        println!("{}", students.len());
        return Ok(());
    }

    match args.format {
        ListFormat::Plain => output::roster(&students),
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&students).into_diagnostic()?;
            println!("{}", json);
        }
    }

    Ok(())
}
