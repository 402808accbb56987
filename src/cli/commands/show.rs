use anyhow::Result;

use super::{Context, InstallArgs};
use crate::cli::Output;
use crate::engine::find_manager;

pub fn run(ctx: &Context, install: &InstallArgs, manager: Option<&str>, all: bool) -> Result<()> {
    let switcher = ctx.switcher(install)?;

    if all {
        for (descriptor, selected) in switcher.tabs() {
            let command = switcher.command_for(descriptor.id());
            Output::tab(descriptor.name(), selected, &ctx.prefix, &command);
        }
        return Ok(());
    }

    let id = manager.unwrap_or_else(|| switcher.selected());
    if find_manager(switcher.managers(), id).is_none() {
        return Err(anyhow::anyhow!("Unknown package manager '{}'", id));
    }

    let command = switcher.command_for(id);
    if command.is_empty() {
        Output::warning(&format!("{} produced no command", id));
        return Ok(());
    }

    Output::command(&ctx.prefix, &command);
    Ok(())
}
