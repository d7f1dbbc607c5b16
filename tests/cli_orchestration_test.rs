use std::cell::RefCell;
use std::path::Path;

use docs_channel::boundary::BoundaryWarning;
use docs_channel::cli::orchestration::{
    resolve_checkout, run_publish_workflow, PublishWorkflowArgs, WorkflowOutcome,
};
use docs_channel::config::Config;
use docs_channel::domain::{DocsTarget, Resolution};
use docs_channel::error::{DocsChannelError, Result};
use docs_channel::git::MockCheckout;
use docs_channel::publish::{CommandRunner, PublishCommand};

/// Records every command instead of running it
#[derive(Default)]
struct RecordingRunner {
    commands: RefCell<Vec<String>>,
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &PublishCommand, _workdir: Option<&Path>) -> Result<()> {
        self.commands.borrow_mut().push(command.to_string());
        Ok(())
    }
}

/// Behaves like a publish command exiting with the given code
struct FailingRunner(i32);

impl CommandRunner for FailingRunner {
    fn run(&self, command: &PublishCommand, _workdir: Option<&Path>) -> Result<()> {
        Err(DocsChannelError::Publish {
            command: command.to_string(),
            code: self.0,
        })
    }
}

fn args(dry_run: bool) -> PublishWorkflowArgs {
    PublishWorkflowArgs {
        remote: "origin".to_string(),
        branch: None,
        dry_run,
    }
}

fn release_checkout(branch: &str) -> MockCheckout {
    MockCheckout::on_branch(branch).with_remote_branches([
        "origin/HEAD",
        "origin/main",
        "origin/0.13.x",
        "origin/1.4.x",
        "origin/feature-x",
    ])
}

#[test]
fn test_newest_release_publishes_with_latest_alias() {
    let runner = RecordingRunner::default();
    let outcome = run_publish_workflow(
        &release_checkout("1.4.x"),
        &runner,
        &Config::default(),
        &args(false),
    )
    .unwrap();

    assert_eq!(
        runner.commands.borrow().as_slice(),
        ["task docs:publish DOCS_REMOTE=origin DOCS_VERSION=1.4 DOCS_ALIAS=latest"]
    );
    match outcome {
        WorkflowOutcome::Published { target, .. } => assert_eq!(
            target,
            DocsTarget {
                version: "1.4".to_string(),
                alias: "latest".to_string(),
            }
        ),
        other => panic!("expected a publish, got {:?}", other),
    }
}

#[test]
fn test_older_release_publishes_without_alias() {
    let runner = RecordingRunner::default();
    run_publish_workflow(
        &release_checkout("0.13.x"),
        &runner,
        &Config::default(),
        &args(false),
    )
    .unwrap();

    assert_eq!(
        runner.commands.borrow().as_slice(),
        ["task docs:publish DOCS_REMOTE=origin DOCS_VERSION=0.13 DOCS_ALIAS="]
    );
}

#[test]
fn test_dev_branch_publishes_dev() {
    let runner = RecordingRunner::default();
    run_publish_workflow(
        &release_checkout("main"),
        &runner,
        &Config::default(),
        &args(false),
    )
    .unwrap();

    assert_eq!(
        runner.commands.borrow().as_slice(),
        ["task docs:publish DOCS_REMOTE=origin DOCS_VERSION=dev DOCS_ALIAS="]
    );
}

#[test]
fn test_topic_branch_is_skipped_without_running() {
    let runner = RecordingRunner::default();
    let outcome = run_publish_workflow(
        &release_checkout("feature-x"),
        &runner,
        &Config::default(),
        &args(false),
    )
    .unwrap();

    assert_eq!(
        outcome,
        WorkflowOutcome::Skipped(BoundaryWarning::UnresolvedBranch {
            branch: "feature-x".to_string()
        })
    );
    assert!(runner.commands.borrow().is_empty());
}

#[test]
fn test_unpushed_release_branch_is_skipped() {
    let runner = RecordingRunner::default();
    let outcome = run_publish_workflow(
        &release_checkout("2.0.x"),
        &runner,
        &Config::default(),
        &args(false),
    )
    .unwrap();

    assert_eq!(
        outcome,
        WorkflowOutcome::Skipped(BoundaryWarning::ReleaseNotOnRemote {
            branch: "2.0.x".to_string(),
            remote: "origin".to_string(),
        })
    );
    assert!(runner.commands.borrow().is_empty());
}

#[test]
fn test_detached_head_is_skipped() {
    let checkout = MockCheckout::new().with_remote_branch("origin/1.4.x");
    let runner = RecordingRunner::default();
    let outcome =
        run_publish_workflow(&checkout, &runner, &Config::default(), &args(false)).unwrap();

    assert_eq!(outcome, WorkflowOutcome::Skipped(BoundaryWarning::DetachedHead));
    assert!(runner.commands.borrow().is_empty());
}

#[test]
fn test_branch_override_wins_over_head() {
    let checkout = MockCheckout::new().with_remote_branch("origin/1.4.x");
    let runner = RecordingRunner::default();
    let workflow_args = PublishWorkflowArgs {
        branch: Some("1.4.x".to_string()),
        ..args(false)
    };

    run_publish_workflow(&checkout, &runner, &Config::default(), &workflow_args).unwrap();
    assert_eq!(runner.commands.borrow().len(), 1);
}

#[test]
fn test_dry_run_does_not_run_command() {
    let runner = RecordingRunner::default();
    let outcome = run_publish_workflow(
        &release_checkout("1.4.x"),
        &runner,
        &Config::default(),
        &args(true),
    )
    .unwrap();

    match outcome {
        WorkflowOutcome::DryRun { command, .. } => assert_eq!(
            command.as_str(),
            "task docs:publish DOCS_REMOTE=origin DOCS_VERSION=1.4 DOCS_ALIAS=latest"
        ),
        other => panic!("expected a dry run, got {:?}", other),
    }
    assert!(runner.commands.borrow().is_empty());
}

#[test]
fn test_push_remote_is_separate_from_catalog_remote() {
    let runner = RecordingRunner::default();
    let workflow_args = PublishWorkflowArgs {
        remote: "docs-site".to_string(),
        ..args(false)
    };

    run_publish_workflow(
        &release_checkout("1.4.x"),
        &runner,
        &Config::default(),
        &workflow_args,
    )
    .unwrap();

    assert_eq!(
        runner.commands.borrow().as_slice(),
        ["task docs:publish DOCS_REMOTE=docs-site DOCS_VERSION=1.4 DOCS_ALIAS=latest"]
    );
}

#[test]
fn test_publish_failure_carries_exit_code() {
    let err = run_publish_workflow(
        &release_checkout("1.4.x"),
        &FailingRunner(3),
        &Config::default(),
        &args(false),
    )
    .unwrap_err();

    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_skip_never_fails_even_with_failing_runner() {
    let outcome = run_publish_workflow(
        &release_checkout("docs/typo"),
        &FailingRunner(2),
        &Config::default(),
        &args(false),
    );
    assert!(matches!(outcome, Ok(WorkflowOutcome::Skipped(_))));
}

#[test]
fn test_custom_config_changes_catalog_remote_and_dev_branches() {
    let mut config = Config::default();
    config.dev_branches = vec!["develop".to_string()];
    config.catalog.remote = "upstream".to_string();

    let checkout = MockCheckout::on_branch("3.1.x")
        .with_remote_branches(["origin/9.9.x", "upstream/3.1.x", "upstream/3.0.x"]);
    let resolved = resolve_checkout(&checkout, &config, None).unwrap();

    assert_eq!(
        resolved
            .catalog
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>(),
        vec!["3.1", "3.0"]
    );
    assert!(matches!(
        resolved.resolution,
        Resolution::Release { latest: true, .. }
    ));

    let dev = resolve_checkout(&checkout, &config, Some("develop")).unwrap();
    assert_eq!(dev.resolution, Resolution::Development);

    let main = resolve_checkout(&checkout, &config, Some("main")).unwrap();
    assert_eq!(main.resolution, Resolution::Unresolved);
}
