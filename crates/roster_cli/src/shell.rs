//! Interactive shell: executes parsed commands against one roster session
//! and renders results as a text table.

use crate::command::{parse_command, Command, CommandError, USAGE};
use roster_core::{Employee, RegistryError, RosterRow, RosterService};
use std::io::{self, BufRead, Write};

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Reads commands from `input` until EOF or `quit`.
pub fn run(
    service: &mut RosterService,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{}", service.department())?;
    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(command) => {
                if execute(service, command, out)? == Flow::Quit {
                    break;
                }
            }
            Err(CommandError::Empty) => {}
            Err(err) => writeln!(out, "error[usage]: {err}")?,
        }
    }
    out.flush()
}

/// Executes one command and writes its rendering to `out`.
pub fn execute(
    service: &mut RosterService,
    command: Command,
    out: &mut impl Write,
) -> io::Result<Flow> {
    match command {
        Command::Add(request) => match service.add_employee(&request) {
            Ok(created) => writeln!(out, "added {}", created.id())?,
            Err(err) => write_error(out, &err)?,
        },
        Command::Edit { id, edit } => match service.edit_employee(&id, &edit) {
            Ok(updated) => writeln!(out, "updated {}", updated.id())?,
            Err(err) => write_error(out, &err)?,
        },
        Command::Remove(id) => {
            if service.remove_employee(&id) {
                writeln!(out, "removed {}", id.trim())?;
            } else {
                writeln!(out, "no employee removed")?;
            }
        }
        Command::Find(id) => match service.find_employee(&id) {
            Ok(employee) => write_employee(out, employee)?,
            Err(err) => write_error(out, &err)?,
        },
        Command::List => write_table(out, &service.list_rows())?,
        Command::Search(query) => write_table(out, &service.search_rows(&query))?,
        Command::Help => {
            for usage in USAGE {
                writeln!(out, "  {usage}")?;
            }
        }
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn write_error(out: &mut impl Write, err: &RegistryError) -> io::Result<()> {
    writeln!(out, "error[{}]: {err}", err.kind())
}

fn write_employee(out: &mut impl Write, employee: &Employee) -> io::Result<()> {
    writeln!(out, "{employee}")
}

/// Renders rows under the `Ordinal / ID / Name / Birthday / Salary rate` header.
pub fn write_table(out: &mut impl Write, rows: &[RosterRow]) -> io::Result<()> {
    let id_width = column_width("ID", rows.iter().map(|row| row.id.chars().count()));
    let name_width = column_width("Name", rows.iter().map(|row| row.name.chars().count()));

    writeln!(
        out,
        "{:<8} {:<id_width$} {:<name_width$} {:<10} Salary rate",
        "Ordinal", "ID", "Name", "Birthday"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<8} {:<id_width$} {:<name_width$} {:<10} {}",
            row.ordinal, row.id, row.name, row.birthdate, row.salary_rate
        )?;
    }
    if rows.is_empty() {
        writeln!(out, "(no employees)")?;
    }
    Ok(())
}

fn column_width(header: &str, values: impl Iterator<Item = usize>) -> usize {
    values.fold(header.len(), usize::max)
}
