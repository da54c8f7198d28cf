//! Interactive registration menu
//!
//! Running `registrar` without a subcommand lands here: a numbered
//! menu loop over one in-memory roster. The roster is loaded once up
//! front and written back on demand.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use miette::Result;

use crate::cli::{helpers, output, GlobalOpts};
use crate::core::Config;
use crate::entities::Student;

const MENU: &str = "\
---- Course Registration Program ----
  Select from the following menu:
    1. Register a Student for a Course.
    2. Show current data.
    3. Save data to a file.
    4. Exit the program.
-----------------------------------------";

/// One round of menu input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Register,
    Show,
    Save,
    Exit,
}

impl std::str::FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuChoice::Register),
            "2" => Ok(MenuChoice::Show),
            "3" => Ok(MenuChoice::Save),
            "4" => Ok(MenuChoice::Exit),
            _ => Err("Please, choose only 1, 2, 3, or 4".to_string()),
        }
    }
}

/// Run the interactive menu loop
pub fn run(global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let path = global.roster_path(&config);
    let pretty = global.pretty(&config);
    let theme = ColorfulTheme::default();

    let mut students = helpers::load_or_empty(&path);

    loop {
        println!();
        println!("{}", style(MENU).cyan());

        let choice = match prompt(&theme, "Enter your menu choice number") {
            // An empty read means the input stream is gone (or the user
            // entered nothing); leave the loop either way.
            None => break,
            Some(choice) if choice.is_empty() => break,
            Some(choice) => choice,
        };

        let choice = match choice.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(hint) => {
                output::error(&hint, None);
                continue;
            }
        };

        match choice {
            MenuChoice::Register => register_student(&theme, &mut students),
            MenuChoice::Show => output::roster(&students),
            MenuChoice::Save => {
                if helpers::try_save(&path, &students, pretty) {
                    output::roster(&students);
                }
            }
            MenuChoice::Exit => break,
        }
    }

    println!("Program Ended");
    Ok(())
}

/// Prompt for one line of input; `None` when the stream is unusable
fn prompt(theme: &ColorfulTheme, label: &str) -> Option<String> {
    Input::<String>::with_theme(theme)
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .ok()
}

/// Menu choice 1: collect a record, validate, append on success.
///
/// Invalid input is reported and the record discarded; the menu does
/// not re-prompt.
fn register_student(theme: &ColorfulTheme, students: &mut Vec<Student>) {
    let Some(first_name) = prompt(theme, "Enter the student's first name") else {
        return;
    };
    let Some(last_name) = prompt(theme, "Enter the student's last name") else {
        return;
    };
    let Some(course_name) = prompt(theme, "Enter the course name") else {
        return;
    };

    match Student::new(first_name, last_name, course_name) {
        Ok(student) => {
            println!("{} Registered {}", style("✓").green(), student);
            students.push(student);
        }
        Err(err) => output::error("Invalid input.", Some(&err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::Register);
        assert_eq!("2".parse::<MenuChoice>().unwrap(), MenuChoice::Show);
        assert_eq!("3".parse::<MenuChoice>().unwrap(), MenuChoice::Save);
        assert_eq!("4".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_menu_choice_rejects_everything_else() {
        for input in ["0", "5", "42", "one", " 1", "1 ", ""] {
            let err = input.parse::<MenuChoice>().unwrap_err();
            assert_eq!(err, "Please, choose only 1, 2, 3, or 4");
        }
    }
}
