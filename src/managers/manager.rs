use crate::options::InstallOptions;
use std::fmt;
use std::sync::Arc;

/// Turns a package string plus options into a command line for one dialect.
pub trait CommandFormatter: Send + Sync {
    fn format(&self, package: &str, options: &InstallOptions) -> String;
}

impl<F> CommandFormatter for F
where
    F: Fn(&str, &InstallOptions) -> String + Send + Sync,
{
    fn format(&self, package: &str, options: &InstallOptions) -> String {
        self(package, options)
    }
}

/// A selectable package manager: id, display name and formatting strategy.
#[derive(Clone)]
pub struct ManagerDescriptor {
    id: String,
    name: String,
    formatter: Arc<dyn CommandFormatter>,
}

impl ManagerDescriptor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        formatter: impl CommandFormatter + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            formatter: Arc::new(formatter),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command(&self, package: &str, options: &InstallOptions) -> String {
        self.formatter.format(package, options)
    }
}

impl fmt::Debug for ManagerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagerDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Join a verb with the active flags, leaving no trailing space when none are set.
pub(crate) fn verb_with_flags(verb: &str, flags: &[Option<&str>]) -> String {
    let active: Vec<&str> = flags.iter().flatten().copied().collect();
    if active.is_empty() {
        verb.to_string()
    } else {
        format!("{} {}", verb, active.join(" "))
    }
}
