//! Publish workflow orchestration
//!
//! Wires a [Checkout] to the catalog and resolver, then hands the resolved
//! target to a [CommandRunner]. Kept apart from `main.rs` so the whole flow
//! runs against in-memory fixtures.

use tracing::debug;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{
    resolve, DocsTarget, ReleaseBranchMatcher, ReleaseCatalog, ReleaseId, Resolution,
};
use crate::error::Result;
use crate::git::Checkout;
use crate::publish::{CommandRunner, PublishCommand};

/// Arguments for the publish workflow
///
/// Mirrors the CLI flags that affect publishing, without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishWorkflowArgs {
    /// Remote substituted into the publish command
    pub remote: String,

    /// Branch to resolve instead of the checked-out one
    pub branch: Option<String>,

    /// Print the command instead of running it
    pub dry_run: bool,
}

/// What resolution found for a checkout
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutResolution {
    /// The branch that was resolved; `None` for a detached HEAD
    pub branch: Option<String>,
    pub catalog: ReleaseCatalog,
    pub resolution: Resolution,
}

impl CheckoutResolution {
    /// Why nothing is published for an unresolved checkout
    pub fn skip_reason(&self, catalog_remote: &str) -> BoundaryWarning {
        match &self.branch {
            None => BoundaryWarning::DetachedHead,
            Some(branch) if ReleaseId::parse_branch(branch).is_some() => {
                BoundaryWarning::ReleaseNotOnRemote {
                    branch: branch.clone(),
                    remote: catalog_remote.to_string(),
                }
            }
            Some(branch) => BoundaryWarning::UnresolvedBranch {
                branch: branch.clone(),
            },
        }
    }
}

/// Result of a completed publish workflow
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// Nothing to publish for this checkout
    Skipped(BoundaryWarning),

    /// Dry run: the command that would have been run
    DryRun {
        target: DocsTarget,
        command: PublishCommand,
    },

    /// The publish command ran and succeeded
    Published {
        target: DocsTarget,
        command: PublishCommand,
    },
}

/// Read the checkout and resolve its docs channel.
///
/// # Arguments
///
/// * `checkout` - Source of remote branch names and the active branch
/// * `config` - Dev branches and catalog remote
/// * `branch_override` - Resolve this branch instead of HEAD
pub fn resolve_checkout<C: Checkout>(
    checkout: &C,
    config: &Config,
    branch_override: Option<&str>,
) -> Result<CheckoutResolution> {
    let branch = match branch_override {
        Some(branch) => Some(branch.to_string()),
        None => checkout.active_branch()?,
    };

    let matcher = ReleaseBranchMatcher::for_remote(&config.catalog.remote)?;
    let catalog = ReleaseCatalog::build(checkout.remote_branch_names()?, &matcher);
    debug!(
        remote = %config.catalog.remote,
        releases = ?catalog.iter().map(ReleaseId::as_str).collect::<Vec<_>>(),
        "built release catalog"
    );

    let resolution = match &branch {
        Some(name) => resolve(name, &catalog, &config.dev_branch_set()),
        None => Resolution::Unresolved,
    };
    debug!(branch = ?branch, resolution = ?resolution, "resolved docs channel");

    Ok(CheckoutResolution {
        branch,
        catalog,
        resolution,
    })
}

/// Main publish workflow
///
/// 1. Resolve the checkout's branch against the release catalog
/// 2. Skip quietly when no channel applies
/// 3. Render the publish command
/// 4. Print it (dry run) or run it
///
/// # Returns
///
/// The outcome, or an error when the checkout cannot be read or the publish
/// command fails
pub fn run_publish_workflow<C: Checkout, R: CommandRunner>(
    checkout: &C,
    runner: &R,
    config: &Config,
    args: &PublishWorkflowArgs,
) -> Result<WorkflowOutcome> {
    let resolved = resolve_checkout(checkout, config, args.branch.as_deref())?;

    let target = match resolved.resolution.target() {
        Some(target) => target,
        None => {
            return Ok(WorkflowOutcome::Skipped(
                resolved.skip_reason(&config.catalog.remote),
            ))
        }
    };

    // A detached HEAD never resolves, so a target implies a branch.
    let branch = resolved.branch.as_deref().unwrap_or_default();
    let command = PublishCommand::render(&config.publish.command, &args.remote, branch, &target);

    if args.dry_run {
        return Ok(WorkflowOutcome::DryRun { target, command });
    }

    runner.run(&command, checkout.workdir().as_deref())?;
    Ok(WorkflowOutcome::Published { target, command })
}
