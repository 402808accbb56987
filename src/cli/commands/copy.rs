use anyhow::Result;

use super::{Context, InstallArgs};
use crate::cli::Output;
use crate::clipboard::SystemClipboard;
use crate::engine::find_manager;
use crate::selection::Switcher;

pub async fn run(ctx: &Context, install: &InstallArgs, manager: Option<&str>) -> Result<()> {
    let switcher = ctx.switcher(install)?;

    // Copying another tab leaves the remembered selection alone.
    let id = manager.unwrap_or_else(|| switcher.selected());
    if find_manager(switcher.managers(), id).is_none() {
        return Err(anyhow::anyhow!("Unknown package manager '{}'", id));
    }

    copy_manager(&switcher, id).await
}

pub(super) async fn copy_selected(switcher: &Switcher) -> Result<()> {
    copy_manager(switcher, switcher.selected()).await
}

async fn copy_manager(switcher: &Switcher, manager_id: &str) -> Result<()> {
    let clipboard = SystemClipboard::detect()?;
    let copied = switcher.copy_for(manager_id, &clipboard).await?;

    log::debug!("copied via {}", clipboard.program());
    Output::success(&format!(
        "Copied {} command: {}",
        copied.manager_id, copied.command
    ));
    Ok(())
}
