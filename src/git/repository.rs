use git2::{BranchType, ErrorCode, Repository as Git2Repo};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{DocsChannelError, Result};
use crate::git::Checkout;

/// Wrapper around git2::Repository with the checkout interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            DocsChannelError::repository(format!(
                "Not in a git repository ({}): {}",
                path.display(),
                e.message()
            ))
        })?;

        debug!(git_dir = %repo.path().display(), "opened repository");
        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Branch name HEAD points at before the first commit exists
    fn unborn_branch(&self) -> Result<Option<String>> {
        let head = self.repo.find_reference("HEAD")?;
        Ok(head
            .symbolic_target()
            .and_then(|target| target.strip_prefix("refs/heads/"))
            .map(str::to_string))
    }
}

impl Checkout for Git2Repository {
    fn remote_branch_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in self.repo.branches(Some(BranchType::Remote))? {
            let (branch, _) = entry?;
            // Non UTF-8 names cannot be release branches.
            if let Ok(Some(name)) = branch.name() {
                names.push(name.to_string());
            }
        }

        debug!(count = names.len(), "listed remote branches");
        Ok(names)
    }

    fn active_branch(&self) -> Result<Option<String>> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().map(str::to_string)),
            Ok(_) => Ok(None),
            Err(e) if e.code() == ErrorCode::UnbornBranch => self.unborn_branch(),
            Err(e) => Err(e.into()),
        }
    }

    fn workdir(&self) -> Option<PathBuf> {
        self.repo.workdir().map(Path::to_path_buf)
    }
}
