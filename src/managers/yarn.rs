use super::manager::CommandFormatter;
use crate::options::InstallOptions;

pub struct YarnManager;

impl YarnManager {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YarnManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFormatter for YarnManager {
    fn format(&self, package: &str, options: &InstallOptions) -> String {
        // `global` has to come before `add`, so the verb lives in the word list.
        let words: Vec<&str> = [
            options.global.then_some("global"),
            Some("add"),
            options.dev.then_some("--dev"),
            options.peer.then_some("--peer"),
            options.optional.then_some("--optional"),
        ]
        .into_iter()
        .flatten()
        .collect();

        format!("yarn {} {}", words.join(" "), options.versioned(package))
    }
}
