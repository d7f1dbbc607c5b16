use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

use docs_channel::cli::{resolve_checkout, run_publish_workflow, PublishWorkflowArgs};
use docs_channel::config;
use docs_channel::git::Git2Repository;
use docs_channel::publish::ShellRunner;
use docs_channel::selftest;
use docs_channel::ui;

#[derive(clap::Parser)]
#[command(
    name = "docs-channel",
    about = "Decide which versioned docs channel a checkout publishes to"
)]
struct Args {
    #[arg(long, help = "Run the built-in self-checks and exit")]
    test: bool,

    #[arg(long, help = "Print the publish command instead of running it")]
    dry: bool,

    #[arg(long, help = "The git remote where to push (default from config: origin)")]
    remote: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Resolve this branch instead of the checked-out one")]
    branch: Option<String>,

    #[arg(long, help = "Path inside the repository [default: .]")]
    repo: Option<PathBuf>,

    #[arg(long, help = "Print the resolved version and alias as JSON and exit")]
    json: bool,

    #[arg(long, help = "Log debug details to stderr")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if args.version {
        println!("docs-channel {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.test {
        let outcomes = selftest::run_self_checks();
        if !ui::display_self_check_report(&outcomes) {
            std::process::exit(1);
        }
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let repo_path = args.repo.unwrap_or_else(|| PathBuf::from("."));
    let checkout = match Git2Repository::open(&repo_path) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    };

    if args.json {
        let resolved = match resolve_checkout(&checkout, &config, args.branch.as_deref()) {
            Ok(resolved) => resolved,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(e.exit_code());
            }
        };
        return ui::display_json_report(&resolved.resolution.report());
    }

    let workflow_args = PublishWorkflowArgs {
        remote: args
            .remote
            .unwrap_or_else(|| config.publish.remote.clone()),
        branch: args.branch,
        dry_run: args.dry,
    };

    match run_publish_workflow(&checkout, &ShellRunner, &config, &workflow_args) {
        Ok(outcome) => ui::display_outcome(&outcome),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
