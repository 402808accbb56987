use anyhow::Result;
use inquire::InquireError;

use super::{copy, Context, InstallArgs};
use crate::cli::{Output, Prompt};

pub async fn run(ctx: &Context, install: &InstallArgs, also_copy: bool) -> Result<()> {
    let mut switcher = ctx.switcher(install)?;

    let names: Vec<&str> = switcher.managers().iter().map(|m| m.name()).collect();
    let current = switcher
        .tabs()
        .position(|(_, selected)| selected)
        .unwrap_or(0);

    let index = match Prompt::select("Package manager:", names, current) {
        Ok(i) => i,
        Err(e) => {
            // Esc and Ctrl-C just leave the selection as it was.
            let cancelled = matches!(
                e.downcast_ref::<InquireError>(),
                Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
            );
            return if cancelled { Ok(()) } else { Err(e) };
        }
    };

    let id = switcher.managers()[index].id().to_string();
    switcher.select(&id)?;

    Output::command(&ctx.prefix, &switcher.command());

    if also_copy {
        copy::copy_selected(&switcher).await?;
    }

    Ok(())
}
