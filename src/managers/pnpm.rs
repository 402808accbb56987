use super::manager::{verb_with_flags, CommandFormatter};
use crate::options::InstallOptions;

pub struct PnpmManager;

impl PnpmManager {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PnpmManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFormatter for PnpmManager {
    fn format(&self, package: &str, options: &InstallOptions) -> String {
        let invocation = verb_with_flags(
            "add",
            &[
                options.global.then_some("-g"),
                options.dev.then_some("-D"),
                options.peer.then_some("-P"),
                options.optional.then_some("-O"),
            ],
        );

        format!("pnpm {} {}", invocation, options.versioned(package))
    }
}
