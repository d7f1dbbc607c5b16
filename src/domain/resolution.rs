//! Branch to docs channel resolution
//!
//! Decides which documentation version a checkout publishes to, and whether
//! that version also becomes the `latest` redirect target.

use serde::Serialize;

use crate::domain::branch::DevBranches;
use crate::domain::catalog::ReleaseCatalog;
use crate::domain::release::ReleaseId;

/// Version label of the rolling development channel
pub const DEV_VERSION: &str = "dev";

/// Alias given to the newest release line
pub const LATEST_ALIAS: &str = "latest";

/// Outcome of resolving a branch against the release catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Branch is a development branch; publish to `dev`
    Development,
    /// Branch is a cataloged release line; `latest` only for the newest one
    Release { release: ReleaseId, latest: bool },
    /// Branch maps to no channel; nothing is published
    Unresolved,
}

/// The version and alias handed to the publish step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocsTarget {
    pub version: String,
    /// Empty when no alias applies
    pub alias: String,
}

/// Serializable view of a resolution, `null` fields when unresolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    pub version: Option<String>,
    pub alias: Option<String>,
}

impl Resolution {
    /// The publish target, or `None` when the build should be skipped
    pub fn target(&self) -> Option<DocsTarget> {
        match self {
            Resolution::Development => Some(DocsTarget {
                version: DEV_VERSION.to_string(),
                alias: String::new(),
            }),
            Resolution::Release { release, latest } => Some(DocsTarget {
                version: release.to_string(),
                alias: if *latest {
                    LATEST_ALIAS.to_string()
                } else {
                    String::new()
                },
            }),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Resolution::Unresolved)
    }

    pub fn report(&self) -> ResolutionReport {
        match self.target() {
            Some(target) => ResolutionReport {
                version: Some(target.version),
                alias: Some(target.alias),
            },
            None => ResolutionReport {
                version: None,
                alias: None,
            },
        }
    }
}

/// Resolve the active branch to a docs channel.
///
/// Development branches win over everything else. A release branch gets its
/// version only when it is in the catalog, and the `latest` alias only when it
/// is the catalog's newest entry. Anything else is unresolved.
pub fn resolve(
    active_branch: &str,
    catalog: &ReleaseCatalog,
    dev_branches: &DevBranches,
) -> Resolution {
    if dev_branches.contains(active_branch) {
        return Resolution::Development;
    }

    match catalog.position_of_branch(active_branch) {
        Some((index, release)) => Resolution::Release {
            release: release.clone(),
            latest: index == 0,
        },
        None => Resolution::Unresolved,
    }
}
