use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, Table};

use super::Context;
use crate::catalog;
use crate::cli::Output;
use crate::engine::compute_command;
use crate::selection::detect_initial_manager;

pub fn run(ctx: &Context, name: Option<&str>) -> Result<()> {
    let Some(name) = name else {
        list();
        return Ok(());
    };

    let scenario = catalog::find(name)
        .ok_or_else(|| anyhow::anyhow!("Unknown scenario '{}'", name))?;

    Output::header(scenario.name);
    println!("{}", scenario.description);
    println!();

    let selected = detect_initial_manager(
        &scenario.managers,
        None,
        &scenario.overrides,
        &scenario.package,
        scenario.options.registry,
    );
    let prefix = scenario.prefix.unwrap_or(ctx.prefix.as_str());

    for manager in &scenario.managers {
        let command = compute_command(
            manager.id(),
            &scenario.package,
            &scenario.options,
            &scenario.managers,
            Some(&scenario.overrides),
        );
        let is_selected = selected.as_deref() == Some(manager.id());
        Output::tab(manager.name(), is_selected, prefix, &command);
    }

    Ok(())
}

fn list() {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        Cell::new("Scenario").add_attribute(Attribute::Bold),
        Cell::new("Description").add_attribute(Attribute::Bold),
    ]);

    for scenario in catalog::scenarios() {
        table.add_row(vec![
            Cell::new(scenario.name).fg(Color::Cyan),
            Cell::new(scenario.description),
        ]);
    }

    println!("{}", table);
}
