mod catalog;
mod config;
mod copy;
mod managers;
mod pick;
mod select;
mod show;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::engine::CustomCommands;
use crate::options::{InstallOptions, Registry};
use crate::selection::Switcher;
use crate::storage::StorageKind;

#[derive(Parser)]
#[command(name = "install-command")]
#[command(about = "Generate install commands for every package manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Where to remember the selected package manager
    #[arg(long, global = true, value_parser = parse_storage)]
    pub storage: Option<StorageKind>,

    /// Key the selection is stored under
    #[arg(long, global = true)]
    pub storage_key: Option<String>,

    /// Symbol printed before each command
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the install command
    Show {
        #[command(flatten)]
        install: InstallArgs,

        /// Package manager to show (defaults to the detected one)
        #[arg(short, long)]
        manager: Option<String>,

        /// Show every package manager
        #[arg(long, conflicts_with = "manager")]
        all: bool,
    },

    /// Copy the install command to the clipboard
    Copy {
        #[command(flatten)]
        install: InstallArgs,

        /// Package manager to copy for (defaults to the detected one)
        #[arg(short, long)]
        manager: Option<String>,
    },

    /// Choose a package manager interactively
    Pick {
        #[command(flatten)]
        install: InstallArgs,

        /// Also copy the chosen command
        #[arg(long)]
        copy: bool,
    },

    /// Remember a preferred package manager
    Select {
        /// Package manager id (e.g. pnpm)
        manager: String,
    },

    /// List available package managers
    Managers,

    /// Browse preset scenarios
    Catalog {
        /// Scenario to render (lists all if not specified)
        name: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Get config value
    Get { key: String },
    /// Set config value
    Set { key: String, value: String },
}

#[derive(Args, Debug, Clone, Default)]
pub struct InstallArgs {
    /// Package name(s); several are joined with spaces
    pub packages: Vec<String>,

    /// Install as a dev dependency
    #[arg(short = 'D', long)]
    pub dev: bool,

    /// Install as a peer dependency
    #[arg(long)]
    pub peer: bool,

    /// Install as an optional dependency
    #[arg(long)]
    pub optional: bool,

    /// Install globally
    #[arg(short, long)]
    pub global: bool,

    /// Use shorthand verbs and flags (e.g. `npm i`)
    #[arg(long)]
    pub shorthand: bool,

    /// Version range (e.g. ^2.0.0); wins over --tag
    #[arg(long = "range", visible_alias = "pkg-version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Dist-tag (e.g. beta)
    #[arg(long)]
    pub tag: Option<String>,

    /// Registry for unprefixed Deno packages (npm or jsr)
    #[arg(long, value_parser = parse_registry)]
    pub registry: Option<Registry>,

    /// Replace a manager's command (repeatable)
    #[arg(long = "command", value_name = "ID=COMMAND", value_parser = parse_override)]
    pub commands: Vec<(String, String)>,
}

impl InstallArgs {
    pub fn package(&self) -> String {
        self.packages.join(" ")
    }

    pub fn options(&self) -> InstallOptions {
        InstallOptions {
            dev: self.dev,
            peer: self.peer,
            optional: self.optional,
            global: self.global,
            shorthand: self.shorthand,
            version: self.version.clone(),
            tag: self.tag.clone(),
            registry: self.registry,
        }
    }

    pub fn overrides(&self) -> CustomCommands {
        self.commands.iter().cloned().collect()
    }
}

fn parse_storage(s: &str) -> Result<StorageKind, String> {
    match s {
        "none" => Ok(StorageKind::None),
        "session" => Ok(StorageKind::Session),
        "local" => Ok(StorageKind::Local),
        other => Err(format!(
            "unknown storage '{}' (expected none, session or local)",
            other
        )),
    }
}

fn parse_registry(s: &str) -> Result<Registry, String> {
    s.parse::<Registry>().map_err(|e| e.to_string())
}

fn parse_override(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((id, cmd)) if !id.trim().is_empty() => {
            Ok((id.trim().to_string(), cmd.to_string()))
        }
        _ => Err(format!("expected ID=COMMAND, got '{}'", s)),
    }
}

/// Settings resolved from the config file and global flags.
pub(crate) struct Context {
    pub config: Config,
    pub storage: StorageKind,
    pub storage_key: String,
    pub prefix: String,
}

impl Context {
    /// Build the tab switcher for one install request.
    pub fn switcher(&self, install: &InstallArgs) -> Result<Switcher> {
        let managers = self.config.managers.resolve()?;
        let overrides = self.config.commands.clone().merged(&install.overrides());
        let store = self.storage.open()?;

        Switcher::new(
            managers,
            install.package(),
            install.options(),
            overrides,
            store,
            self.storage_key.clone(),
        )
        .ok_or_else(|| anyhow::anyhow!("No package managers configured"))
    }
}

impl Cli {
    fn context(&self) -> Result<Context> {
        let config = Config::load_or_default()?;
        let storage = self.storage.unwrap_or(config.storage.kind);
        let storage_key = self
            .storage_key
            .clone()
            .unwrap_or_else(|| config.storage.key.clone());
        let prefix = self
            .prefix
            .clone()
            .unwrap_or_else(|| config.display.prefix.clone());

        Ok(Context {
            config,
            storage,
            storage_key,
            prefix,
        })
    }

    pub async fn run(&self) -> Result<()> {
        let ctx = self.context()?;

        match &self.command {
            Commands::Show {
                install,
                manager,
                all,
            } => show::run(&ctx, install, manager.as_deref(), *all),
            Commands::Copy { install, manager } => {
                copy::run(&ctx, install, manager.as_deref()).await
            }
            Commands::Pick { install, copy } => pick::run(&ctx, install, *copy).await,
            Commands::Select { manager } => select::run(&ctx, manager),
            Commands::Managers => managers::run(&ctx),
            Commands::Catalog { name } => catalog::run(&ctx, name.as_deref()),
            Commands::Config { action } => match action {
                ConfigAction::Path => config::path(),
                ConfigAction::Show => config::show(&ctx),
                ConfigAction::Get { key } => config::get(&ctx, key),
                ConfigAction::Set { key, value } => config::set(key, value),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override() {
        assert_eq!(
            parse_override("npm=npm create vite@latest x").unwrap(),
            ("npm".to_string(), "npm create vite@latest x".to_string())
        );
        assert!(parse_override("npm create vite").is_err());
        assert!(parse_override("=npm").is_err());
    }

    #[test]
    fn test_install_args_to_options() {
        let cli = Cli::try_parse_from([
            "install-command",
            "show",
            "react",
            "react-dom",
            "-D",
            "-g",
            "--range",
            "^18",
            "--tag",
            "next",
            "--registry",
            "jsr",
            "--command",
            "yarn=yarn create x",
        ])
        .unwrap();

        let Commands::Show { install, .. } = cli.command else {
            panic!("expected show");
        };
        assert_eq!(install.package(), "react react-dom");
        let options = install.options();
        assert!(options.dev && options.global && !options.peer);
        assert_eq!(options.version.as_deref(), Some("^18"));
        assert_eq!(options.tag.as_deref(), Some("next"));
        assert_eq!(options.registry, Some(Registry::Jsr));
        assert_eq!(install.overrides().get("yarn"), Some("yarn create x"));
    }

    #[test]
    fn test_global_storage_flag() {
        let cli =
            Cli::try_parse_from(["install-command", "select", "pnpm", "--storage", "session"])
                .unwrap();
        assert_eq!(cli.storage, Some(StorageKind::Session));
    }

    #[test]
    fn test_manager_conflicts_with_all() {
        assert!(
            Cli::try_parse_from(["install-command", "show", "foo", "-m", "npm", "--all"]).is_err()
        );
    }
}
