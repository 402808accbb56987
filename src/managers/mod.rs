pub mod bun;
pub mod deno;
pub mod manager;
pub mod npm;
pub mod pnpm;
pub mod template;
pub mod yarn;

pub use bun::BunManager;
pub use deno::DenoManager;
pub use manager::{CommandFormatter, ManagerDescriptor};
pub use npm::NpmManager;
pub use pnpm::PnpmManager;
pub use template::TemplateManager;
pub use yarn::YarnManager;

/// Ids of the built-in managers, in tab order.
pub const BUILTIN_IDS: [&str; 5] = ["npm", "yarn", "pnpm", "bun", "deno"];

/// The built-in managers: npm, Yarn, pnpm, Bun and Deno, in that order.
pub fn default_managers() -> Vec<ManagerDescriptor> {
    vec![
        ManagerDescriptor::new("npm", "npm", NpmManager::new()),
        ManagerDescriptor::new("yarn", "Yarn", YarnManager::new()),
        ManagerDescriptor::new("pnpm", "pnpm", PnpmManager::new()),
        ManagerDescriptor::new("bun", "Bun", BunManager::new()),
        ManagerDescriptor::new("deno", "Deno", DenoManager::new()),
    ]
}

/// Look up a built-in manager by id.
pub fn builtin(id: &str) -> Option<ManagerDescriptor> {
    default_managers().into_iter().find(|m| m.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_matches_ids() {
        let ids: Vec<String> = default_managers()
            .iter()
            .map(|m| m.id().to_string())
            .collect();
        assert_eq!(ids, BUILTIN_IDS);
    }

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(builtin("bun").map(|m| m.name().to_string()), Some("Bun".into()));
        assert!(builtin("cargo").is_none());
    }
}
