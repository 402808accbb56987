use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use owo_colors::OwoColorize;

use super::Context;
use crate::engine::compute_command;
use crate::managers::BUILTIN_IDS;
use crate::options::InstallOptions;

const SAMPLE_PACKAGE: &str = "example";

pub fn run(ctx: &Context) -> Result<()> {
    let managers = ctx.config.managers.resolve()?;

    println!();
    println!("{}", "Package Managers".bright_cyan().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Id").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
            Cell::new("Command").add_attribute(Attribute::Bold),
        ]);

    let options = InstallOptions::new();
    for manager in &managers {
        let is_builtin = BUILTIN_IDS.contains(&manager.id())
            && !ctx.config.managers.custom.iter().any(|c| c.id == manager.id());
        let source = if is_builtin { "built-in" } else { "config" };

        let command = compute_command(
            manager.id(),
            SAMPLE_PACKAGE,
            &options,
            &managers,
            Some(&ctx.config.commands),
        );
        let command_cell = if ctx.config.commands.get(manager.id()).is_some_and(|c| !c.is_empty()) {
            Cell::new(format!("{} (custom)", command)).fg(Color::Yellow)
        } else {
            Cell::new(command)
        };

        table.add_row(vec![
            Cell::new(manager.id()).fg(Color::Cyan),
            Cell::new(manager.name()),
            Cell::new(source),
            command_cell,
        ]);
    }

    println!("{}", table);
    Ok(())
}
