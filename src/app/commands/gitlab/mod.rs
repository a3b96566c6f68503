//! The `gitlab` command: list topic branches or remove them interactively.

pub mod aggregate;
pub mod remove;

use crate::app::AppContext;
use crate::domain::{AppError, GitlabOptions, format_report};
use crate::ports::{CardBoard, ClipboardWriter, Console, GitlabClient};

pub use aggregate::{Aggregation, FetchFailure, aggregate};
pub use remove::{DeleteResult, DeleteStatus, PendingRemoval, RemovalOutcome};

/// Optional destinations for the listing report.
#[derive(Default)]
pub struct ReportSinks<'a> {
    pub clipboard: Option<&'a mut dyn ClipboardWriter>,
    pub board: Option<&'a dyn CardBoard>,
}

/// Where the listing report ended up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delivery {
    pub printed: bool,
    pub copied: bool,
    pub posted: bool,
}

#[derive(Debug)]
pub enum GitlabOutcome {
    Listing { report: String, delivery: Delivery, failures: usize },
    Removal { outcome: RemovalOutcome, failures: usize },
}

/// Run the command end to end.
///
/// Flag conflicts are reported before any request is made; the ignored flags
/// are dropped from `options`. Warnings, progress and fetch failures go to the
/// console status line, never into the report.
pub fn execute<G, C>(
    ctx: &AppContext<G>,
    options: GitlabOptions,
    console: &mut C,
    sinks: ReportSinks<'_>,
) -> Result<GitlabOutcome, AppError>
where
    G: GitlabClient,
    C: Console + ?Sized,
{
    for conflict in options.conflicts() {
        console.status(&format!("⚠️  {conflict}"));
    }
    let options = options.effective();
    let mode = options.filter_mode();

    let aggregation = aggregate(ctx.gitlab(), ctx.source(), mode, console)?;
    for failure in &aggregation.failures {
        console.status(&format!("❌ Could not get {}: {}", failure.subject, failure.error));
    }
    let failures = aggregation.failures.len();

    if options.remove {
        let outcome = remove::run(ctx.gitlab(), &aggregation.projects, mode, console)?;
        return Ok(GitlabOutcome::Removal { outcome, failures });
    }

    let report = format_report(&aggregation.projects, mode);
    let delivery = deliver_report(&report, &options, console, sinks)?;
    Ok(GitlabOutcome::Listing { report, delivery, failures })
}

/// Print, copy and post the report according to `options`.
pub fn deliver_report<C: Console + ?Sized>(
    report: &str,
    options: &GitlabOptions,
    console: &mut C,
    sinks: ReportSinks<'_>,
) -> Result<Delivery, AppError> {
    let mut delivery = Delivery::default();

    if !options.silent {
        console.notice(report.trim_end());
        delivery.printed = true;
    }

    if options.copy {
        let clipboard = sinks
            .clipboard
            .ok_or_else(|| AppError::ClipboardError("no clipboard available".to_string()))?;
        clipboard.write_text(report)?;
        console.notice("✅ Copied the result to the clipboard");
        delivery.copied = true;
    }

    if options.trello {
        let board = sinks
            .board
            .ok_or_else(|| AppError::config_error("--trello needs a [trello] section"))?;
        board.post_description(report)?;
        console.notice("✅ Posted the result to Trello");
        delivery.posted = true;
    }

    Ok(delivery)
}
