use super::manager::{verb_with_flags, CommandFormatter};
use crate::options::InstallOptions;

pub struct BunManager;

impl BunManager {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BunManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFormatter for BunManager {
    fn format(&self, package: &str, options: &InstallOptions) -> String {
        let invocation = verb_with_flags(
            "add",
            &[
                options.global.then_some("-g"),
                options.dev.then_some("-d"),
                options.peer.then_some("--peer"),
                options.optional.then_some("--optional"),
            ],
        );

        format!("bun {} {}", invocation, options.versioned(package))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bun(package: &str, options: InstallOptions) -> String {
        BunManager::new().format(package, &options)
    }

    #[test]
    fn test_bare_add() {
        assert_eq!(bun("foo", InstallOptions::new()), "bun add foo");
    }

    #[test]
    fn test_flags() {
        assert_eq!(
            bun("foo", InstallOptions::new().dev().global()),
            "bun add -g -d foo"
        );
        assert_eq!(
            bun("foo", InstallOptions::new().peer().optional()),
            "bun add --peer --optional foo"
        );
    }
}
