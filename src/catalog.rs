//! Preset scenarios that show off the generator: one entry per documented
//! use case, rendered across every tab by `install-command catalog`.

use crate::engine::CustomCommands;
use crate::managers::{builtin, default_managers, ManagerDescriptor};
use crate::options::{InstallOptions, Registry};

const PACKAGE: &str = "react-install-command";

pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub package: String,
    pub options: InstallOptions,
    pub overrides: CustomCommands,
    pub managers: Vec<ManagerDescriptor>,
    pub prefix: Option<&'static str>,
}

impl Scenario {
    fn new(name: &'static str, description: &'static str, package: &str) -> Self {
        Self {
            name,
            description,
            package: package.to_string(),
            options: InstallOptions::new(),
            overrides: CustomCommands::new(),
            managers: default_managers(),
            prefix: None,
        }
    }

    fn options(mut self, options: InstallOptions) -> Self {
        self.options = options;
        self
    }

    fn overrides(mut self, overrides: CustomCommands) -> Self {
        self.overrides = overrides;
        self
    }

    fn managers(mut self, managers: Vec<ManagerDescriptor>) -> Self {
        self.managers = managers;
        self
    }

    fn prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = Some(prefix);
        self
    }
}

fn builtins(ids: &[&str]) -> Vec<ManagerDescriptor> {
    ids.iter().filter_map(|id| builtin(id)).collect()
}

/// Two hand-written managers with deliberately reduced flag support.
fn limited_managers() -> Vec<ManagerDescriptor> {
    vec![
        ManagerDescriptor::new("npm", "npm", |pkg: &str, options: &InstallOptions| {
            let verb = match (options.dev, options.shorthand) {
                (true, true) => "i -D",
                (true, false) => "install -D",
                (false, true) => "i",
                (false, false) => "install",
            };
            format!("npm {} {}", verb, pkg)
        }),
        ManagerDescriptor::new("yarn", "Yarn", |pkg: &str, options: &InstallOptions| {
            format!("yarn add {} {}", if options.dev { "-D" } else { "" }, pkg)
        }),
    ]
}

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("basic", "Plain install of a single package.", PACKAGE),
        Scenario::new("dev-dependency", "Install as a dev dependency.", PACKAGE)
            .options(InstallOptions::new().dev()),
        Scenario::new("peer-dependency", "Install as a peer dependency.", PACKAGE)
            .options(InstallOptions::new().peer()),
        Scenario::new("optional-dependency", "Install as an optional dependency.", PACKAGE)
            .options(InstallOptions::new().optional()),
        Scenario::new("global-install", "Install globally.", PACKAGE)
            .options(InstallOptions::new().global()),
        Scenario::new("shorthand", "Use terse verbs and flags where supported.", PACKAGE)
            .options(InstallOptions::new().shorthand()),
        Scenario::new("specific-version", "Pin a version range.", PACKAGE)
            .options(InstallOptions::new().with_version("^2.0.0")),
        Scenario::new("specific-tag", "Install a dist-tag.", PACKAGE)
            .options(InstallOptions::new().with_tag("beta")),
        Scenario::new(
            "complex-installation",
            "Dev dependency, shorthand and a version range together.",
            PACKAGE,
        )
        .options(
            InstallOptions::new()
                .dev()
                .shorthand()
                .with_version("^2.0.0"),
        ),
        Scenario::new(
            "custom-default-manager",
            "Reordered manager list: pnpm first.",
            "react",
        )
        .managers(builtins(&["pnpm", "npm", "yarn"])),
        Scenario::new(
            "multiple-packages",
            "Several packages in one request.",
            "react react-dom @types/react @types/react-dom",
        ),
        Scenario::new(
            "custom-commands",
            "Literal commands replace the generated ones.",
            "",
        )
        .overrides(
            [
                ("npm", "npm create vite@latest my-app"),
                ("yarn", "yarn create vite my-app"),
                ("pnpm", "pnpm create vite my-app"),
            ]
            .into_iter()
            .collect(),
        ),
        Scenario::new(
            "limited-managers",
            "Caller-supplied managers with their own formatting.",
            "express",
        )
        .managers(limited_managers()),
        Scenario::new("custom-prefix", "A different prompt symbol.", PACKAGE).prefix(">"),
        Scenario::new(
            "deno-jsr-package",
            "A JSR package; Deno is selected automatically.",
            "@std/path",
        )
        .options(InstallOptions::new().with_registry(Registry::Jsr)),
        Scenario::new(
            "deno-npm-package",
            "An npm package installed through Deno.",
            "react",
        )
        .options(InstallOptions::new().with_registry(Registry::Npm)),
        Scenario::new(
            "deno-multiple-packages",
            "Mixed JSR and npm packages in one Deno command.",
            "jsr:@std/path jsr:@std/assert npm:chalk",
        ),
        Scenario::new(
            "combined-features",
            "Dev dependency, version range, shorthand and a custom prefix.",
            PACKAGE,
        )
        .options(
            InstallOptions::new()
                .dev()
                .with_version("^1.0.0")
                .shorthand(),
        )
        .prefix("→"),
    ]
}

pub fn find(name: &str) -> Option<Scenario> {
    scenarios().into_iter().find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::detect_initial_manager;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let all = scenarios();
        let names: HashSet<&str> = all.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_custom_commands_scenario() {
        let scenario = find("custom-commands").unwrap();
        let selected = detect_initial_manager(
            &scenario.managers,
            None,
            &scenario.overrides,
            &scenario.package,
            scenario.options.registry,
        );
        assert_eq!(selected.as_deref(), Some("npm"));
        assert_eq!(
            scenario.overrides.get("pnpm"),
            Some("pnpm create vite my-app")
        );
    }

    #[test]
    fn test_jsr_scenario_selects_deno() {
        let scenario = find("deno-jsr-package").unwrap();
        let selected = detect_initial_manager(
            &scenario.managers,
            None,
            &scenario.overrides,
            &scenario.package,
            scenario.options.registry,
        );
        assert_eq!(selected.as_deref(), Some("deno"));
    }

    #[test]
    fn test_limited_managers() {
        let managers = limited_managers();
        let options = InstallOptions::new().dev().shorthand();
        assert_eq!(managers[0].command("express", &options), "npm i -D express");
        assert_eq!(managers[1].command("express", &options), "yarn add -D express");
    }

    #[test]
    fn test_custom_default_manager_order() {
        let scenario = find("custom-default-manager").unwrap();
        let ids: Vec<&str> = scenario.managers.iter().map(|m| m.id()).collect();
        assert_eq!(ids, ["pnpm", "npm", "yarn"]);
    }

    #[test]
    fn test_unknown_scenario() {
        assert!(find("thick-tab-indicator").is_none());
    }
}
