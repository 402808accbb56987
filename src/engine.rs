//! Command generation: resolve a manager, apply overrides, format the command.
//!
//! Everything here is a pure function of its inputs. An unknown manager id
//! yields an empty string rather than an error; callers decide whether to
//! surface that.

use crate::managers::ManagerDescriptor;
use crate::options::InstallOptions;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Literal commands that replace the computed one for specific managers.
///
/// Keeps insertion order: initial tab detection picks the first override
/// whose id names an available manager.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomCommands {
    entries: Vec<(String, String)>,
}

impl CustomCommands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an override. Replacing keeps the original position.
    pub fn insert(&mut self, manager_id: impl Into<String>, command: impl Into<String>) {
        let manager_id = manager_id.into();
        let command = command.into();
        match self.entries.iter_mut().find(|(id, _)| *id == manager_id) {
            Some(entry) => entry.1 = command,
            None => self.entries.push((manager_id, command)),
        }
    }

    pub fn get(&self, manager_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| id == manager_id)
            .map(|(_, cmd)| cmd.as_str())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, cmd)| (id.as_str(), cmd.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlay `other` on top of `self`; entries in `other` win.
    pub fn merged(mut self, other: &CustomCommands) -> Self {
        for (id, cmd) in other.iter() {
            self.insert(id, cmd);
        }
        self
    }
}

impl<K, V> FromIterator<(K, V)> for CustomCommands
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut commands = CustomCommands::new();
        for (id, cmd) in iter {
            commands.insert(id, cmd);
        }
        commands
    }
}

impl Serialize for CustomCommands {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, cmd) in &self.entries {
            map.serialize_entry(id, cmd)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CustomCommands {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CommandsVisitor;

        impl<'de> Visitor<'de> for CommandsVisitor {
            type Value = CustomCommands;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a table of manager ids to commands")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut commands = CustomCommands::new();
                while let Some((id, cmd)) = access.next_entry::<String, String>()? {
                    commands.insert(id, cmd);
                }
                Ok(commands)
            }
        }

        deserializer.deserialize_map(CommandsVisitor)
    }
}

/// One install request: which packages, how, and for which manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub package: String,
    pub options: InstallOptions,
    pub manager: String,
}

impl CommandRequest {
    pub fn new(
        manager: impl Into<String>,
        package: impl Into<String>,
        options: InstallOptions,
    ) -> Self {
        Self {
            package: package.into(),
            options,
            manager: manager.into(),
        }
    }

    pub fn compute(
        &self,
        managers: &[ManagerDescriptor],
        overrides: Option<&CustomCommands>,
    ) -> String {
        compute_command(
            &self.manager,
            &self.package,
            &self.options,
            managers,
            overrides,
        )
    }
}

/// First descriptor with the given id.
pub fn find_manager<'a>(
    managers: &'a [ManagerDescriptor],
    manager_id: &str,
) -> Option<&'a ManagerDescriptor> {
    managers.iter().find(|m| m.id() == manager_id)
}

/// Produce the command line for `manager_id`.
///
/// Returns an empty string when no descriptor has that id. A non-empty
/// override for the resolved id is returned verbatim and `options` are
/// ignored for that manager.
pub fn compute_command(
    manager_id: &str,
    package: &str,
    options: &InstallOptions,
    managers: &[ManagerDescriptor],
    overrides: Option<&CustomCommands>,
) -> String {
    let Some(manager) = find_manager(managers, manager_id) else {
        log::debug!("no package manager registered for '{}'", manager_id);
        return String::new();
    };

    if let Some(custom) = overrides
        .and_then(|o| o.get(manager.id()))
        .filter(|c| !c.is_empty())
    {
        return custom.to_string();
    }

    manager.command(package, options)
}
