//! Git access abstraction layer
//!
//! Routing a docs build only needs two facts from version control: the
//! remote-tracking branch names, and the branch currently checked out. The
//! [Checkout] trait exposes exactly those, so the catalog and resolver can be
//! exercised against in-memory fixtures.
//!
//! - [repository::Git2Repository]: a real checkout read through the `git2` crate
//! - [mock::MockCheckout]: an in-memory checkout for tests and self-checks
//!
//! ```rust
//! # use docs_channel::git::Checkout;
//! # fn example<C: Checkout>(checkout: &C) -> docs_channel::Result<()> {
//! let refs = checkout.remote_branch_names()?;
//! if let Some(branch) = checkout.active_branch()? {
//!     println!("{} is checked out, {} remote branches", branch, refs.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockCheckout;
pub use repository::Git2Repository;

use std::path::PathBuf;

use crate::error::Result;

/// Read-only view of a version-control checkout
pub trait Checkout {
    /// List remote-tracking branch names, e.g. `origin/0.13.x`
    ///
    /// The order is unspecified.
    fn remote_branch_names(&self) -> Result<Vec<String>>;

    /// Name of the checked-out branch, e.g. `0.13.x`
    ///
    /// # Returns
    /// * `Ok(Some(name))` - HEAD points at a local branch (possibly unborn)
    /// * `Ok(None)` - HEAD is detached
    /// * `Err` - If HEAD cannot be read
    fn active_branch(&self) -> Result<Option<String>>;

    /// Root of the working tree, where the publish command runs
    ///
    /// `None` means the current directory.
    fn workdir(&self) -> Option<PathBuf> {
        None
    }
}
