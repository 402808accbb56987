use crate::engine::CustomCommands;
use crate::managers::{builtin, default_managers, ManagerDescriptor, TemplateManager};
use crate::storage::{StorageKind, DEFAULT_STORAGE_KEY};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    /// Literal commands that replace the generated ones, keyed by manager id.
    #[serde(default, skip_serializing_if = "CustomCommands::is_empty")]
    pub commands: CustomCommands,
    #[serde(default)]
    pub managers: ManagersConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub kind: StorageKind,
    #[serde(default = "default_storage_key")]
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagersConfig {
    /// Built-in manager ids to show, in tab order. Empty means all of them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order: Vec<String>,
    /// Extra managers appended after the built-ins.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom: Vec<TemplateManager>,
}

fn default_prefix() -> String {
    "$".to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            kind: StorageKind::default(),
            key: default_storage_key(),
        }
    }
}

impl ManagersConfig {
    /// Resolve the configured tab list.
    pub fn resolve(&self) -> Result<Vec<ManagerDescriptor>> {
        let mut managers = if self.order.is_empty() {
            default_managers()
        } else {
            self.order
                .iter()
                .map(|id| {
                    builtin(id).ok_or_else(|| {
                        anyhow::anyhow!("Unknown built-in package manager '{}' in managers.order", id)
                    })
                })
                .collect::<Result<Vec<_>>>()?
        };

        managers.extend(self.custom.iter().cloned().map(TemplateManager::into_descriptor));
        Ok(managers)
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let home =
            home::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".install-command"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load the config file, or defaults when it doesn't exist yet.
    pub fn load_or_default() -> Result<Self> {
        if !Self::config_path()?.exists() {
            log::debug!("no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load()
    }

    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
