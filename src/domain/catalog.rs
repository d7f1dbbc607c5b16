//! Release catalog - the ordered set of release lines known on a remote

use regex::Regex;

use crate::domain::release::ReleaseId;
use crate::error::{DocsChannelError, Result};

/// Recognizes remote-tracking release branches such as `origin/0.13.x`.
///
/// The whole reference name must match; `refs/remotes/` may prefix it.
#[derive(Debug, Clone)]
pub struct ReleaseBranchMatcher {
    pattern: Regex,
}

impl ReleaseBranchMatcher {
    /// Build a matcher for release branches on the given remote
    pub fn for_remote(remote: &str) -> Result<Self> {
        if remote.is_empty() {
            return Err(DocsChannelError::config("Catalog remote name is empty"));
        }

        let pattern = Regex::new(&format!(
            r"^(?:refs/remotes/)?{}/(\d+\.\d+\.x)$",
            regex::escape(remote)
        ))
        .map_err(|e| {
            DocsChannelError::config(format!("Invalid remote name '{}': {}", remote, e))
        })?;

        Ok(ReleaseBranchMatcher { pattern })
    }

    /// Extract the release line from a remote reference name, if it is one
    pub fn release_of(&self, ref_name: &str) -> Option<ReleaseId> {
        let captures = self.pattern.captures(ref_name)?;
        ReleaseId::parse_branch(captures.get(1)?.as_str())
    }
}

/// Release lines sorted newest first, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseCatalog {
    releases: Vec<ReleaseId>,
}

impl ReleaseCatalog {
    /// Build a catalog from remote reference names.
    ///
    /// References that are not release branches of the matcher's remote are
    /// skipped.
    pub fn build<I, S>(refs: I, matcher: &ReleaseBranchMatcher) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_releases(
            refs.into_iter()
                .filter_map(|name| matcher.release_of(name.as_ref())),
        )
    }

    /// Build a catalog from already parsed release ids
    pub fn from_releases<I>(releases: I) -> Self
    where
        I: IntoIterator<Item = ReleaseId>,
    {
        let mut releases: Vec<ReleaseId> = releases.into_iter().collect();
        releases.sort_unstable_by(|a, b| b.cmp(a));
        releases.dedup();

        ReleaseCatalog { releases }
    }

    /// The most recent release line
    pub fn newest(&self) -> Option<&ReleaseId> {
        self.releases.first()
    }

    /// Find the catalog entry whose branch is exactly `branch`
    ///
    /// Returns its position (0 is newest) together with the release id.
    pub fn position_of_branch(&self, branch: &str) -> Option<(usize, &ReleaseId)> {
        self.releases
            .iter()
            .enumerate()
            .find(|(_, release)| release.branch_name() == branch)
    }

    pub fn releases(&self) -> &[ReleaseId] {
        &self.releases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReleaseId> {
        self.releases.iter()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReleaseCatalog {
    type Item = &'a ReleaseId;
    type IntoIter = std::slice::Iter<'a, ReleaseId>;

    fn into_iter(self) -> Self::IntoIter {
        self.releases.iter()
    }
}
