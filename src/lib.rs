pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod engine;
pub mod managers;
pub mod options;
pub mod selection;
pub mod storage;

pub use config::Config;
pub use engine::{compute_command, CommandRequest, CustomCommands};
pub use managers::{default_managers, CommandFormatter, ManagerDescriptor};
pub use options::{InstallOptions, Registry};
pub use selection::{detect_initial_manager, Switcher};
