use crate::error::Result;
use crate::git::Checkout;

/// In-memory checkout for testing without a repository
#[derive(Debug, Clone, Default)]
pub struct MockCheckout {
    remote_branches: Vec<String>,
    active: Option<String>,
}

impl MockCheckout {
    /// Create a detached checkout with no remote branches
    pub fn new() -> Self {
        MockCheckout::default()
    }

    /// Create a checkout with `branch` checked out
    pub fn on_branch(branch: impl Into<String>) -> Self {
        MockCheckout {
            remote_branches: Vec::new(),
            active: Some(branch.into()),
        }
    }

    /// Add a remote-tracking branch, e.g. `origin/1.4.x`
    pub fn with_remote_branch(mut self, name: impl Into<String>) -> Self {
        self.remote_branches.push(name.into());
        self
    }

    /// Add several remote-tracking branches
    pub fn with_remote_branches<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remote_branches.extend(names.into_iter().map(Into::into));
        self
    }
}

impl Checkout for MockCheckout {
    fn remote_branch_names(&self) -> Result<Vec<String>> {
        Ok(self.remote_branches.clone())
    }

    fn active_branch(&self) -> Result<Option<String>> {
        Ok(self.active.clone())
    }
}
