//! Built-in checks run by `docs-channel --test`.
//!
//! They exercise the catalog, the resolver and the dry-run workflow against
//! in-memory fixtures, so they run in any directory, repository or not.

use crate::cli::{run_publish_workflow, PublishWorkflowArgs, WorkflowOutcome};
use crate::config::Config;
use crate::domain::{resolve, DevBranches, ReleaseBranchMatcher, ReleaseCatalog};
use crate::error::{DocsChannelError, Result};
use crate::git::MockCheckout;
use crate::publish::{CommandRunner, PublishCommand};
use std::path::Path;

/// Result of one self-check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub name: &'static str,
    /// `None` on success, the mismatch otherwise
    pub failure: Option<String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

type CheckFn = fn() -> std::result::Result<(), String>;

const CHECKS: &[(&str, CheckFn)] = &[
    ("dev branch resolves to dev", check_dev_branch),
    ("release branches resolve to their line", check_release_branches),
    ("only the newest release is latest", check_single_latest),
    ("uncataloged branch is skipped", check_uncataloged_branch),
    ("multi-digit components sort numerically", check_numeric_order),
    ("foreign and malformed refs are ignored", check_malformed_refs),
    ("duplicate refs collapse", check_duplicates),
    ("dry run never runs the publish command", check_dry_run),
];

/// Run every self-check, in a fixed order
pub fn run_self_checks() -> Vec<CheckOutcome> {
    CHECKS
        .iter()
        .map(|&(name, check)| CheckOutcome {
            name,
            failure: check().err(),
        })
        .collect()
}

fn origin_catalog(refs: &[&str]) -> std::result::Result<ReleaseCatalog, String> {
    let matcher = ReleaseBranchMatcher::for_remote("origin").map_err(|e| e.to_string())?;
    Ok(ReleaseCatalog::build(refs.iter().copied(), &matcher))
}

fn expect_resolution(
    branch: &str,
    catalog: &ReleaseCatalog,
    expected: (Option<&str>, Option<&str>),
) -> std::result::Result<(), String> {
    let report = resolve(branch, catalog, &DevBranches::default()).report();
    let actual = (report.version.as_deref(), report.alias.as_deref());
    if actual == expected {
        Ok(())
    } else {
        Err(format!(
            "branch '{}': expected {:?}, got {:?}",
            branch, expected, actual
        ))
    }
}

fn expect_order(catalog: &ReleaseCatalog, expected: &[&str]) -> std::result::Result<(), String> {
    let actual: Vec<&str> = catalog.iter().map(|r| r.as_str()).collect();
    if actual == expected {
        Ok(())
    } else {
        Err(format!("expected catalog {:?}, got {:?}", expected, actual))
    }
}

fn check_dev_branch() -> std::result::Result<(), String> {
    expect_resolution("main", &ReleaseCatalog::default(), (Some("dev"), Some("")))?;
    expect_resolution(
        "main",
        &origin_catalog(&["origin/1.4.x"])?,
        (Some("dev"), Some("")),
    )
}

fn check_release_branches() -> std::result::Result<(), String> {
    let catalog = origin_catalog(&["origin/1.4.x", "origin/0.13.x"])?;
    expect_resolution("0.13.x", &catalog, (Some("0.13"), Some("")))?;
    expect_resolution("1.4.x", &catalog, (Some("1.4"), Some("latest")))
}

fn check_single_latest() -> std::result::Result<(), String> {
    let catalog = origin_catalog(&["origin/0.9.x", "origin/1.0.x", "origin/0.10.x"])?;
    let dev = DevBranches::default();
    let latest: Vec<String> = catalog
        .iter()
        .map(|release| resolve(&release.branch_name(), &catalog, &dev))
        .filter_map(|resolution| resolution.target())
        .filter(|target| target.alias == "latest")
        .map(|target| target.version)
        .collect();

    if latest == ["1.0"] {
        Ok(())
    } else {
        Err(format!("expected only 1.0 to be latest, got {:?}", latest))
    }
}

fn check_uncataloged_branch() -> std::result::Result<(), String> {
    expect_resolution("0.1.x", &ReleaseCatalog::default(), (None, None))?;
    expect_resolution(
        "feature/docs",
        &origin_catalog(&["origin/1.4.x"])?,
        (None, None),
    )
}

fn check_numeric_order() -> std::result::Result<(), String> {
    let catalog = origin_catalog(&["origin/2.9.x", "origin/10.0.x", "origin/2.10.x"])?;
    expect_order(&catalog, &["10.0", "2.10", "2.9"])
}

fn check_malformed_refs() -> std::result::Result<(), String> {
    let catalog = origin_catalog(&[
        "origin/feature-x",
        "origin/v2",
        "origin/HEAD",
        "upstream/3.0.x",
        "origin/1.2.x",
    ])?;
    expect_order(&catalog, &["1.2"])
}

fn check_duplicates() -> std::result::Result<(), String> {
    let catalog = origin_catalog(&["origin/1.2.x", "refs/remotes/origin/1.2.x"])?;
    expect_order(&catalog, &["1.2"])
}

/// Runner that fails if it is ever called
struct RefusingRunner;

impl CommandRunner for RefusingRunner {
    fn run(&self, command: &PublishCommand, _workdir: Option<&Path>) -> Result<()> {
        Err(DocsChannelError::Publish {
            command: command.to_string(),
            code: 1,
        })
    }
}

fn check_dry_run() -> std::result::Result<(), String> {
    let checkout = MockCheckout::on_branch("1.4.x").with_remote_branch("origin/1.4.x");
    let args = PublishWorkflowArgs {
        remote: "origin".to_string(),
        branch: None,
        dry_run: true,
    };

    match run_publish_workflow(&checkout, &RefusingRunner, &Config::default(), &args) {
        Ok(WorkflowOutcome::DryRun { command, .. }) => {
            let expected =
                "task docs:publish DOCS_REMOTE=origin DOCS_VERSION=1.4 DOCS_ALIAS=latest";
            if command.as_str() == expected {
                Ok(())
            } else {
                Err(format!("unexpected command '{}'", command))
            }
        }
        Ok(other) => Err(format!("expected a dry run, got {:?}", other)),
        Err(e) => Err(e.to_string()),
    }
}
