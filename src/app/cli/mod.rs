//! CLI Adapter.

mod gitlab;

use std::path::PathBuf;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "holmes")]
#[command(version)]
#[command(
    about = "Inspect and clean up topic branches across GitLab projects",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to $HOLMES_CONFIG, then ~/.config/holmes/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List topic branches of the configured GitLab groups or projects
    #[clap(visible_alias = "gl")]
    Gitlab(gitlab::GitlabArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Gitlab(args) => gitlab::run_gitlab(cli.config.as_deref(), args),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
