//! `registrar register` - flag-driven registration
//!
//! The non-interactive counterpart of menu choice 1: validate, append
//! and save in one shot, for scripting and tests.

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{helpers, GlobalOpts};
use crate::core::{store, Config};
use crate::entities::Student;

#[derive(clap::Args, Debug)]
pub struct RegisterArgs {
    /// Student's first name (letters only)
    #[arg(long, short = 'f')]
    pub first: String,

    /// Student's last name (letters only)
    #[arg(long, short = 'l')]
    pub last: String,

    /// Course name (free-form, may be omitted)
    #[arg(long, short = 'c', default_value = "")]
    pub course: String,
}

pub fn run(args: RegisterArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let path = global.roster_path(&config);

    let student = Student::new(args.first, args.last, args.course).into_diagnostic()?;

    let mut students = helpers::load_or_empty(&path);
    students.push(student.clone());
    store::save(&path, &students, global.pretty(&config)).into_diagnostic()?;

    println!("{} Registered {}", style("✓").green(), student);
    Ok(())
}
