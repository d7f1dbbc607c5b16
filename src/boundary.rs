use std::fmt;

/// Reasons a docs build is not published.
/// These are informational and never make the run fail.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// HEAD is detached and no branch was given on the command line
    DetachedHead,
    /// Branch looks like a release line but the remote has no such branch
    ReleaseNotOnRemote { branch: String, remote: String },
    /// Branch maps to neither the dev channel nor a release line
    UnresolvedBranch { branch: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::DetachedHead => write!(
                f,
                "HEAD is detached, pass --branch to choose a docs version; skip docs generation"
            ),
            BoundaryWarning::ReleaseNotOnRemote { branch, remote } => write!(
                f,
                "Release branch '{}' was not found on remote '{}', skip docs generation",
                branch, remote
            ),
            BoundaryWarning::UnresolvedBranch { branch } => write!(
                f,
                "Can't get version from current branch '{}', skip docs generation",
                branch
            ),
        }
    }
}
