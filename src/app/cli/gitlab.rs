use std::path::Path;

use clap::Args;

use crate::app::AppContext;
use crate::app::commands::gitlab::{
    DeleteStatus, GitlabOutcome, RemovalOutcome, ReportSinks, execute,
};
use crate::app::config::{load_config, resolve_config_path};
use crate::domain::{AppError, GitlabOptions};
use crate::ports::{CardBoard, ClipboardWriter};
use crate::services::{ArboardClipboard, DialoguerConsole, HttpGitlabClient, HttpTrelloBoard};

#[derive(Debug, Args)]
pub struct GitlabArgs {
    /// Show merged branches only
    #[arg(short, long)]
    pub merged: bool,
    /// Show unmerged branches only
    #[arg(short, long)]
    pub unmerged: bool,
    /// Select branches interactively and delete them
    #[arg(short, long)]
    pub remove: bool,
    /// Copy the result to the clipboard
    #[arg(short, long)]
    pub copy: bool,
    /// Do not print the result
    #[arg(short, long)]
    pub silent: bool,
    /// Post the result to the configured Trello card
    #[arg(short, long)]
    pub trello: bool,
}

impl From<&GitlabArgs> for GitlabOptions {
    fn from(args: &GitlabArgs) -> Self {
        GitlabOptions {
            merged: args.merged,
            unmerged: args.unmerged,
            remove: args.remove,
            copy: args.copy,
            silent: args.silent,
            trello: args.trello,
        }
    }
}

pub fn run_gitlab(config_path: Option<&Path>, args: GitlabArgs) -> Result<i32, AppError> {
    let options = GitlabOptions::from(&args);
    let effective = options.effective();

    let path = resolve_config_path(config_path)?;
    let config = load_config(&path)?;
    log::debug!("loaded config from {}", path.display());

    let board = if effective.trello {
        Some(HttpTrelloBoard::new(config.require_trello()?)?)
    } else {
        None
    };
    let mut clipboard = ArboardClipboard::new();
    let sinks = ReportSinks {
        clipboard: if effective.copy {
            Some(&mut clipboard as &mut dyn ClipboardWriter)
        } else {
            None
        },
        board: board.as_ref().map(|board| board as &dyn CardBoard),
    };

    let gitlab = HttpGitlabClient::new(&config.gitlab)?;
    let ctx = AppContext::new(gitlab, config.gitlab.source());
    let mut console = DialoguerConsole::new();

    let outcome = execute(&ctx, options, &mut console, sinks)?;
    print_summary(&outcome);
    Ok(0)
}

fn print_summary(outcome: &GitlabOutcome) {
    let fetch_failures = match outcome {
        GitlabOutcome::Listing { failures, .. } | GitlabOutcome::Removal { failures, .. } => {
            *failures
        }
    };
    if fetch_failures > 0 {
        eprintln!("⚠️  {} fetch(es) failed; their projects are missing above", fetch_failures);
    }

    if let GitlabOutcome::Removal { outcome: RemovalOutcome::Completed(results), .. } = outcome {
        let deleted =
            results.iter().filter(|result| result.status == DeleteStatus::Deleted).count();
        println!("✅ Deleted {} of {} branch(es)", deleted, results.len());
        if deleted < results.len() {
            println!("\nWarnings:");
            for result in results {
                if let DeleteStatus::Failed(err) = &result.status {
                    println!("  {} / {}: {}", result.project_name, result.branch, err);
                }
            }
        }
    }
}
