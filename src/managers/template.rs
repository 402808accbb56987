use super::manager::{verb_with_flags, CommandFormatter, ManagerDescriptor};
use crate::options::InstallOptions;
use serde::{Deserialize, Serialize};

/// A manager declared in the config file rather than compiled in.
///
/// Renders `<program> <verb>[ <flags>] <package[@version|@tag]>` with flags
/// in dev, peer, optional, global order. Flags left unset are never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateManager {
    pub id: String,
    pub name: String,
    pub program: String,
    pub verb: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shorthand_verb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_flag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shorthand_dev_flag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_flag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_flag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_flag: Option<String>,
}

impl TemplateManager {
    pub fn into_descriptor(self) -> ManagerDescriptor {
        let id = self.id.clone();
        let name = self.name.clone();
        ManagerDescriptor::new(id, name, self)
    }
}

impl CommandFormatter for TemplateManager {
    fn format(&self, package: &str, options: &InstallOptions) -> String {
        let verb = match (&self.shorthand_verb, options.shorthand) {
            (Some(short), true) => short.as_str(),
            _ => self.verb.as_str(),
        };
        let dev = match (&self.shorthand_dev_flag, options.shorthand) {
            (Some(short), true) => Some(short.as_str()),
            _ => self.dev_flag.as_deref(),
        };

        let invocation = verb_with_flags(
            verb,
            &[
                dev.filter(|_| options.dev),
                self.peer_flag.as_deref().filter(|_| options.peer),
                self.optional_flag.as_deref().filter(|_| options.optional),
                self.global_flag.as_deref().filter(|_| options.global),
            ],
        );

        format!(
            "{} {} {}",
            self.program,
            invocation,
            options.versioned(package)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ni() -> TemplateManager {
        TemplateManager {
            id: "ni".to_string(),
            name: "ni".to_string(),
            program: "ni".to_string(),
            verb: "add".to_string(),
            shorthand_verb: Some("a".to_string()),
            dev_flag: Some("--dev".to_string()),
            shorthand_dev_flag: Some("-D".to_string()),
            peer_flag: None,
            optional_flag: None,
            global_flag: Some("-g".to_string()),
        }
    }

    #[test]
    fn test_template_basic() {
        assert_eq!(ni().format("foo", &InstallOptions::new()), "ni add foo");
    }

    #[test]
    fn test_template_flags_and_shorthand() {
        let options = InstallOptions::new().dev().global().shorthand();
        assert_eq!(ni().format("foo", &options), "ni a -D -g foo");
    }

    #[test]
    fn test_template_skips_undeclared_flags() {
        let options = InstallOptions::new().peer().optional().with_tag("next");
        assert_eq!(ni().format("foo", &options), "ni add foo@next");
    }

    #[test]
    fn test_into_descriptor() {
        let descriptor = ni().into_descriptor();
        assert_eq!(descriptor.id(), "ni");
        assert_eq!(
            descriptor.command("foo", &InstallOptions::new().dev()),
            "ni add --dev foo"
        );
    }
}
