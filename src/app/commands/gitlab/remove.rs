//! Interactive branch removal: select per project, confirm once, delete.

use crate::domain::report::SEPARATOR;
use crate::domain::{AppError, Branch, FilterMode, Project, removable_branches};
use crate::ports::{Console, GitlabClient};

/// Branches chosen for deletion in one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemoval {
    pub project_id: u64,
    pub project_name: String,
    pub branches: Vec<Branch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    pub project_name: String,
    pub branch: String,
    pub status: DeleteStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteStatus {
    Deleted,
    Failed(String),
}

/// How the workflow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Nothing eligible or nothing picked; no confirmation was asked.
    NothingSelected,
    /// The operator declined; no delete request was sent.
    Cancelled,
    /// One result per selected branch, in selection order.
    Completed(Vec<DeleteResult>),
}

impl RemovalOutcome {
    pub fn failed_count(&self) -> usize {
        match self {
            RemovalOutcome::Completed(results) => results
                .iter()
                .filter(|result| matches!(result.status, DeleteStatus::Failed(_)))
                .count(),
            _ => 0,
        }
    }
}

pub fn run<G, C>(
    gitlab: &G,
    projects: &[Project],
    mode: FilterMode,
    console: &mut C,
) -> Result<RemovalOutcome, AppError>
where
    G: GitlabClient + ?Sized,
    C: Console + ?Sized,
{
    let pending = select_branches(projects, mode, console)?;
    if pending.is_empty() {
        console.notice("No branches selected");
        return Ok(RemovalOutcome::NothingSelected);
    }

    show_pending(&pending, console);
    if !console.confirm("Delete the branches listed above?")? {
        console.notice("Branch removal cancelled");
        return Ok(RemovalOutcome::Cancelled);
    }

    let results = delete_pending(gitlab, &pending, console);
    console.notice("Branch removal completed");
    Ok(RemovalOutcome::Completed(results))
}

/// Ask about each project in turn. Projects with nothing removable are skipped
/// without a prompt.
pub fn select_branches<C: Console + ?Sized>(
    projects: &[Project],
    mode: FilterMode,
    console: &mut C,
) -> Result<Vec<PendingRemoval>, AppError> {
    let mut pending = Vec::new();

    for project in projects {
        console.notice(SEPARATOR);
        console.notice(&format!("▼ {}", project.name));

        let eligible = removable_branches(&project.branches, mode);
        if eligible.is_empty() {
            console.notice(&format!("No removable branches in {}", project.name));
            continue;
        }

        let items: Vec<String> = eligible.iter().map(choice_label).collect();
        let prompt = format!("Select branches to delete from {} [{}]", project.name, mode.label());
        let chosen = console.multi_select(&prompt, &items)?;

        let branches: Vec<Branch> =
            chosen.into_iter().filter_map(|index| eligible.get(index).cloned()).collect();
        if !branches.is_empty() {
            pending.push(PendingRemoval {
                project_id: project.id,
                project_name: project.name.clone(),
                branches,
            });
        }
    }

    Ok(pending)
}

fn choice_label(branch: &Branch) -> String {
    format!("{} - {} ({})", branch.name, branch.author, branch.merge_status())
}

fn show_pending<C: Console + ?Sized>(pending: &[PendingRemoval], console: &mut C) {
    console.notice(SEPARATOR);
    console.notice("Branches to delete:");
    for removal in pending {
        console.notice(&format!("[{}]", removal.project_name));
        for branch in &removal.branches {
            console.notice(&format!("- {}", branch.name));
        }
    }
}

/// Best effort: every branch gets its own request regardless of earlier failures.
fn delete_pending<G, C>(gitlab: &G, pending: &[PendingRemoval], console: &mut C) -> Vec<DeleteResult>
where
    G: GitlabClient + ?Sized,
    C: Console + ?Sized,
{
    let mut results = Vec::new();

    for removal in pending {
        console.notice(&format!("[{}]", removal.project_name));
        for branch in &removal.branches {
            let status = match gitlab.delete_branch(removal.project_id, &branch.name) {
                Ok(()) => {
                    console.notice(&format!("✅ Deleted {}", branch.name));
                    DeleteStatus::Deleted
                }
                Err(err) => {
                    console.notice(&format!("❌ Failed to delete {}: {}", branch.name, err));
                    DeleteStatus::Failed(err.to_string())
                }
            };
            results.push(DeleteResult {
                project_name: removal.project_name.clone(),
                branch: branch.name.clone(),
                status,
            });
        }
    }

    results
}
