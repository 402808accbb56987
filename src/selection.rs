//! Tab state for the manager switcher: which manager is selected, how the
//! first selection is chosen, and how changes are persisted.

use crate::clipboard::{Clipboard, ClipboardError};
use crate::engine::{compute_command, find_manager, CustomCommands};
use crate::managers::ManagerDescriptor;
use crate::options::{InstallOptions, Registry};
use crate::storage::SelectionStore;

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("unknown package manager '{0}'")]
    UnknownManager(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("no command to copy for '{0}'")]
    EmptyCommand(String),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// What was copied, and from which tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Copied {
    pub command: String,
    pub manager_id: String,
}

/// Choose the initially selected manager.
///
/// Precedence: a stored selection naming an available manager, then the first
/// override key naming one, then (for a non-empty package) `deno` when the
/// package mentions `jsr:` or the registry is JSR, then `npm`, then the first
/// manager in the list.
pub fn detect_initial_manager(
    managers: &[ManagerDescriptor],
    stored: Option<&str>,
    overrides: &CustomCommands,
    package: &str,
    registry: Option<Registry>,
) -> Option<String> {
    let available = |id: &str| find_manager(managers, id).map(|m| m.id().to_string());

    if let Some(id) = stored.and_then(available) {
        return Some(id);
    }

    if let Some(id) = overrides.ids().find_map(available) {
        return Some(id);
    }

    if !package.is_empty() {
        if package.contains("jsr:") || registry == Some(Registry::Jsr) {
            if let Some(id) = available("deno") {
                return Some(id);
            }
        }
        if let Some(id) = available("npm") {
            return Some(id);
        }
    }

    managers.first().map(|m| m.id().to_string())
}

/// A set of manager tabs over one install request.
pub struct Switcher {
    managers: Vec<ManagerDescriptor>,
    package: String,
    options: InstallOptions,
    overrides: CustomCommands,
    store: Box<dyn SelectionStore>,
    storage_key: String,
    selected: String,
}

impl Switcher {
    /// Returns `None` when there are no managers to show.
    pub fn new(
        managers: Vec<ManagerDescriptor>,
        package: impl Into<String>,
        options: InstallOptions,
        overrides: CustomCommands,
        store: Box<dyn SelectionStore>,
        storage_key: impl Into<String>,
    ) -> Option<Self> {
        let package = package.into();
        let storage_key = storage_key.into();

        let stored = match store.load(&storage_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("failed to read stored manager selection: {}", e);
                None
            }
        };

        let selected = detect_initial_manager(
            &managers,
            stored.as_deref(),
            &overrides,
            &package,
            options.registry,
        )?;
        log::debug!("initial package manager: {}", selected);

        // The detected tab is remembered just like one chosen explicitly.
        if let Err(e) = store.save(&storage_key, &selected) {
            log::warn!("failed to persist manager selection: {}", e);
        }

        Some(Self {
            managers,
            package,
            options,
            overrides,
            store,
            storage_key,
            selected,
        })
    }

    pub fn managers(&self) -> &[ManagerDescriptor] {
        &self.managers
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn selected_manager(&self) -> Option<&ManagerDescriptor> {
        find_manager(&self.managers, &self.selected)
    }

    /// Each manager paired with whether it is the selected tab.
    pub fn tabs(&self) -> impl Iterator<Item = (&ManagerDescriptor, bool)> {
        self.managers
            .iter()
            .map(move |m| (m, m.id() == self.selected))
    }

    pub fn command_for(&self, manager_id: &str) -> String {
        compute_command(
            manager_id,
            &self.package,
            &self.options,
            &self.managers,
            Some(&self.overrides),
        )
    }

    /// Command for the selected tab.
    pub fn command(&self) -> String {
        self.command_for(&self.selected)
    }

    /// Switch tabs and remember the choice. Storage failures are logged, not
    /// returned; the switch itself still happens.
    pub fn select(&mut self, manager_id: &str) -> Result<&ManagerDescriptor, SelectionError> {
        let manager = find_manager(&self.managers, manager_id)
            .ok_or_else(|| SelectionError::UnknownManager(manager_id.to_string()))?;

        self.selected = manager.id().to_string();
        if let Err(e) = self.store.save(&self.storage_key, &self.selected) {
            log::warn!("failed to persist manager selection: {}", e);
        }

        Ok(manager)
    }

    /// Copy the selected tab's command.
    pub async fn copy(&self, clipboard: &dyn Clipboard) -> Result<Copied, CopyError> {
        self.copy_for(&self.selected, clipboard).await
    }

    /// Copy another tab's command without switching to it.
    pub async fn copy_for(
        &self,
        manager_id: &str,
        clipboard: &dyn Clipboard,
    ) -> Result<Copied, CopyError> {
        let command = self.command_for(manager_id);
        if command.is_empty() {
            return Err(CopyError::EmptyCommand(manager_id.to_string()));
        }

        clipboard.write_text(&command).await?;
        Ok(Copied {
            command,
            manager_id: manager_id.to_string(),
        })
    }
}
