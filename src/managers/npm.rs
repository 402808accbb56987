use super::manager::{verb_with_flags, CommandFormatter};
use crate::options::InstallOptions;

pub struct NpmManager;

impl NpmManager {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NpmManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFormatter for NpmManager {
    fn format(&self, package: &str, options: &InstallOptions) -> String {
        let verb = if options.shorthand { "i" } else { "install" };
        let dev = if options.shorthand { "-D" } else { "--save-dev" };

        let invocation = verb_with_flags(
            verb,
            &[
                options.dev.then_some(dev),
                options.peer.then_some("--save-peer"),
                options.optional.then_some("--save-optional"),
                options.global.then_some("-g"),
            ],
        );

        format!("npm {} {}", invocation, options.versioned(package))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn npm(package: &str, options: InstallOptions) -> String {
        NpmManager::new().format(package, &options)
    }

    #[test]
    fn test_bare_install() {
        assert_eq!(npm("foo", InstallOptions::new()), "npm install foo");
    }

    #[test]
    fn test_shorthand() {
        assert_eq!(npm("foo", InstallOptions::new().shorthand()), "npm i foo");
        assert_eq!(
            npm("foo", InstallOptions::new().shorthand().dev()),
            "npm i -D foo"
        );
    }

    #[test]
    fn test_flag_order() {
        assert_eq!(
            npm("foo", InstallOptions::new().global().dev()),
            "npm install --save-dev -g foo"
        );
        assert_eq!(
            npm(
                "foo",
                InstallOptions::new().dev().peer().optional().global()
            ),
            "npm install --save-dev --save-peer --save-optional -g foo"
        );
    }

    #[test]
    fn test_multiple_packages_not_split() {
        assert_eq!(
            npm("react react-dom", InstallOptions::new().with_version("^18")),
            "npm install react react-dom@^18"
        );
    }

    #[test]
    fn test_empty_package() {
        assert_eq!(npm("", InstallOptions::new()), "npm install ");
    }
}
