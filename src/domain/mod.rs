//! Domain logic - pure routing rules independent of git operations

pub mod branch;
pub mod catalog;
pub mod release;
pub mod resolution;

pub use branch::DevBranches;
pub use catalog::{ReleaseBranchMatcher, ReleaseCatalog};
pub use release::ReleaseId;
pub use resolution::{resolve, DocsTarget, Resolution, ResolutionReport};
