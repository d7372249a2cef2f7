//! Line command parsing for the interactive roster shell.
//!
//! Record fields are separated by `|`, mirroring the four form inputs
//! (`id|name|birthdate|salary_rate`).

use roster_core::{AddEmployeeRequest, EmployeeEdit};
use std::error::Error;
use std::fmt::{Display, Formatter};

const FIELD_SEPARATOR: char = '|';

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddEmployeeRequest),
    Edit { id: String, edit: EmployeeEdit },
    Remove(String),
    Find(String),
    List,
    Search(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    UnknownCommand(String),
    /// Wrong number of `|`-separated fields or missing argument.
    Usage(&'static str),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownCommand(name) => {
                write!(f, "unknown command `{name}`; type `help` for usage")
            }
            Self::Usage(usage) => write!(f, "usage: {usage}"),
        }
    }
}

impl Error for CommandError {}

pub const USAGE: &[&str] = &[
    "add <id>|<name>|<birthdate>|<salary rate>",
    "edit <id>|<name>|<birthdate>|<salary rate>   (blank fields stay unchanged)",
    "remove <id>",
    "find <id>",
    "list",
    "search [text]",
    "help",
    "quit",
];

/// Parses one input line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_start();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (line.trim_end(), ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::Empty),
        "add" => {
            let [id, name, birthdate, salary_rate] = split_fields(rest, USAGE[0])?;
            Ok(Command::Add(AddEmployeeRequest::new(
                id,
                name,
                birthdate,
                salary_rate,
            )))
        }
        "edit" => {
            let [id, name, birthdate, salary_rate] = split_fields(rest, USAGE[1])?;
            Ok(Command::Edit {
                id,
                edit: EmployeeEdit {
                    name: supplied(name),
                    birthdate: supplied(birthdate),
                    salary_rate: supplied(salary_rate),
                },
            })
        }
        "remove" | "rm" => Ok(Command::Remove(required_arg(rest, USAGE[2])?)),
        "find" => Ok(Command::Find(required_arg(rest, USAGE[3])?)),
        "list" | "ls" => Ok(Command::List),
        // Search text is kept verbatim apart from the line ending.
        "search" => Ok(Command::Search(
            rest.trim_end_matches(['\r', '\n']).to_string(),
        )),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

fn split_fields(rest: &str, usage: &'static str) -> Result<[String; 4], CommandError> {
    let fields = rest
        .trim_end_matches(['\r', '\n'])
        .split(FIELD_SEPARATOR)
        .map(str::to_string)
        .collect::<Vec<_>>();
    <[String; 4]>::try_from(fields).map_err(|_| CommandError::Usage(usage))
}

fn required_arg(rest: &str, usage: &'static str) -> Result<String, CommandError> {
    let value = rest.trim();
    if value.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    Ok(value.to_string())
}

fn supplied(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, CommandError};
    use roster_core::{AddEmployeeRequest, EmployeeEdit};

    #[test]
    fn parses_add_with_four_fields() {
        let command = parse_command("add E1|Ada Lovelace|1990-01-01|50.0").unwrap();
        assert_eq!(
            command,
            Command::Add(AddEmployeeRequest::new(
                "E1",
                "Ada Lovelace",
                "1990-01-01",
                "50.0"
            ))
        );
    }

    #[test]
    fn add_with_wrong_field_count_is_usage_error() {
        let err = parse_command("add E1|Ada").unwrap_err();
        assert!(matches!(err, CommandError::Usage(_)));
    }

    #[test]
    fn edit_blank_fields_are_not_supplied() {
        let command = parse_command("EDIT E1|| |60").unwrap();
        assert_eq!(
            command,
            Command::Edit {
                id: "E1".to_string(),
                edit: EmployeeEdit::new().salary_rate("60"),
            }
        );
    }

    #[test]
    fn search_without_text_lists_everything() {
        assert_eq!(parse_command("search").unwrap(), Command::Search(String::new()));
        assert_eq!(
            parse_command("search ada").unwrap(),
            Command::Search("ada".to_string())
        );
    }

    #[test]
    fn rejects_blank_and_unknown_commands() {
        assert_eq!(parse_command("   ").unwrap_err(), CommandError::Empty);
        assert!(matches!(
            parse_command("promote E1").unwrap_err(),
            CommandError::UnknownCommand(_)
        ));
        assert!(matches!(
            parse_command("remove").unwrap_err(),
            CommandError::Usage(_)
        ));
    }
}
