use std::collections::BTreeSet;

/// Branch name that tracks the development docs channel by default
pub const DEFAULT_DEV_BRANCH: &str = "main";

/// The set of branches whose docs are published to the `dev` channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevBranches {
    names: BTreeSet<String>,
}

impl DevBranches {
    /// Create a set from branch names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DevBranches {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if the branch publishes to the development channel
    pub fn contains(&self, branch: &str) -> bool {
        self.names.contains(branch)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for DevBranches {
    fn default() -> Self {
        DevBranches::new([DEFAULT_DEV_BRANCH])
    }
}
