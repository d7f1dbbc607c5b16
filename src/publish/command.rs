use std::collections::BTreeMap;
use std::fmt;

use crate::domain::DocsTarget;

/// A rendered publish invocation.
///
/// Holds the shell command line produced from the configured template, plus
/// the same values as `DOCS_*` environment variables for scripts that prefer
/// reading them from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishCommand {
    line: String,
    env: BTreeMap<String, String>,
}

impl PublishCommand {
    /// Render `template`, substituting `{remote}`, `{version}` and `{alias}`.
    ///
    /// An empty alias renders as an empty value.
    pub fn render(template: &str, remote: &str, branch: &str, target: &DocsTarget) -> Self {
        let line = template
            .replace("{remote}", remote)
            .replace("{version}", &target.version)
            .replace("{alias}", &target.alias);

        let mut env = BTreeMap::new();
        env.insert("DOCS_REMOTE".to_string(), remote.to_string());
        env.insert("DOCS_VERSION".to_string(), target.version.clone());
        env.insert("DOCS_ALIAS".to_string(), target.alias.clone());
        env.insert("DOCS_BRANCH".to_string(), branch.to_string());

        PublishCommand { line, env }
    }

    /// The command line handed to the shell
    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Environment variables set for the command
    pub fn env_vars(&self) -> &BTreeMap<String, String> {
        &self.env
    }
}

impl fmt::Display for PublishCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}
