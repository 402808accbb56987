use anyhow::Result;

use super::Context;
use crate::cli::Output;
use crate::engine::find_manager;
use crate::storage::{FileStore, SelectionStore, StorageKind};

pub fn run(ctx: &Context, manager: &str) -> Result<()> {
    let managers = ctx.config.managers.resolve()?;
    let Some(descriptor) = find_manager(&managers, manager) else {
        return Err(anyhow::anyhow!("Unknown package manager '{}'", manager));
    };

    // Always written to the durable store; it is only read back when enabled.
    let store = FileStore::open_default()?;
    store.save(&ctx.storage_key, descriptor.id())?;

    Output::success(&format!(
        "Preferred package manager set to {}",
        descriptor.name()
    ));
    if ctx.storage != StorageKind::Local {
        Output::info("Enable it with --storage local or storage.kind = \"local\" in the config");
    }
    Ok(())
}
