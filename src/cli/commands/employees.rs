use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::source::{JsonFileSource, PunchSource};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Cell, Table};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Employees { source } = cmd {
        let employees = JsonFileSource::new(expand_tilde(source)).employees();

        if employees.is_empty() {
            warning("No employees found.");
            return Ok(());
        }

        let mut table = Table::new(&["ID", "Name"]);
        for e in employees {
            table.add_row(vec![Cell::plain(e.id.to_string()), Cell::plain(e.name)]);
        }
        print!("{}", table.render(false));
    }
    Ok(())
}
