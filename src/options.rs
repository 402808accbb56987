use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Package registry a manager resolves against. Only the Deno dialect uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Registry {
    Npm,
    Jsr,
}

impl Registry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Registry::Npm => "npm",
            Registry::Jsr => "jsr",
        }
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Registry {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npm" => Ok(Registry::Npm),
            "jsr" => Ok(Registry::Jsr),
            other => Err(anyhow::anyhow!(
                "unknown registry '{}' (expected npm or jsr)",
                other
            )),
        }
    }
}

/// Flags and values describing how a package should be installed.
///
/// The fields are independent; nothing checks that e.g. `dev` and `peer`
/// are mutually exclusive. Each dialect decides which ones it honors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallOptions {
    pub dev: bool,
    pub peer: bool,
    pub optional: bool,
    pub global: bool,
    pub shorthand: bool,
    /// Version range such as `^2.0.0`. Takes precedence over `tag`.
    pub version: Option<String>,
    /// Dist-tag such as `beta` or `next`.
    pub tag: Option<String>,
    pub registry: Option<Registry>,
}

impl InstallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dev(mut self) -> Self {
        self.dev = true;
        self
    }

    pub fn peer(mut self) -> Self {
        self.peer = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn global(mut self) -> Self {
        self.global = true;
        self
    }

    pub fn shorthand(mut self) -> Self {
        self.shorthand = true;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// The `@...` suffix to append to a package: version if set, else tag.
    /// Empty strings count as unset.
    pub fn version_spec(&self) -> Option<&str> {
        fn non_empty(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }
        non_empty(&self.version).or_else(|| non_empty(&self.tag))
    }

    /// Append the version/tag suffix to a package token.
    pub fn versioned(&self, package: &str) -> String {
        match self.version_spec() {
            Some(spec) => format!("{}@{}", package, spec),
            None => package.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_wins_over_tag() {
        let options = InstallOptions::new().with_version("1.2.3").with_tag("beta");
        assert_eq!(options.versioned("foo"), "foo@1.2.3");
    }

    #[test]
    fn test_tag_used_without_version() {
        let options = InstallOptions::new().with_tag("beta");
        assert_eq!(options.versioned("foo"), "foo@beta");
    }

    #[test]
    fn test_empty_version_falls_back_to_tag() {
        let options = InstallOptions::new().with_version("").with_tag("next");
        assert_eq!(options.version_spec(), Some("next"));
    }

    #[test]
    fn test_no_suffix() {
        assert_eq!(InstallOptions::new().versioned("foo"), "foo");
    }

    #[test]
    fn test_registry_from_str() {
        assert_eq!("jsr".parse::<Registry>().unwrap(), Registry::Jsr);
        assert!("pypi".parse::<Registry>().is_err());
    }
}
