use super::manager::CommandFormatter;
use crate::options::{InstallOptions, Registry};

const PREFIXES: [&str; 2] = ["jsr:", "npm:"];

pub struct DenoManager;

impl DenoManager {
    pub fn new() -> Self {
        Self
    }

    /// Give a bare package a registry prefix. Explicit prefixes are kept.
    fn qualify(token: &str, registry: Option<Registry>) -> String {
        if PREFIXES.iter().any(|p| token.starts_with(p)) {
            return token.to_string();
        }
        let registry = registry.unwrap_or(Registry::Npm);
        format!("{}:{}", registry, token)
    }
}

impl Default for DenoManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFormatter for DenoManager {
    fn format(&self, package: &str, options: &InstallOptions) -> String {
        let mut tokens: Vec<&str> = package.split_whitespace().collect();
        if tokens.is_empty() {
            tokens.push("");
        }

        let packages: Vec<String> = tokens
            .into_iter()
            .map(|token| options.versioned(&Self::qualify(token, options.registry)))
            .collect();

        format!("deno add {}", packages.join(" "))
    }
}
