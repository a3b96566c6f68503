//! Walk groups → projects → branches.

use crate::domain::{AppError, FilterMode, Group, Project, ProjectSource, filter_branches};
use crate::ports::{Console, GitlabClient};

/// A fetch that failed without stopping the walk.
#[derive(Debug)]
pub struct FetchFailure {
    /// What was being fetched, e.g. `branches of svc`.
    pub subject: String,
    pub error: AppError,
}

/// Projects with their filtered branches, plus everything that could not be fetched.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub projects: Vec<Project>,
    pub failures: Vec<FetchFailure>,
}

/// Fetch projects and branches one request at a time, in listing order.
///
/// Only listing every group is fatal; a failing group or project is recorded
/// and skipped. Each fetched project is announced on the console status line.
pub fn aggregate<G, C>(
    gitlab: &G,
    source: &ProjectSource,
    mode: FilterMode,
    console: &mut C,
) -> Result<Aggregation, AppError>
where
    G: GitlabClient + ?Sized,
    C: Console + ?Sized,
{
    let mut aggregation = Aggregation::default();

    let projects = match source {
        ProjectSource::Projects(projects) => projects.clone(),
        ProjectSource::Groups(groups) => collect_projects(gitlab, groups, &mut aggregation),
        ProjectSource::AllGroups => {
            let groups = gitlab.list_groups()?;
            log::info!("found {} groups", groups.len());
            collect_projects(gitlab, &groups, &mut aggregation)
        }
    };

    for mut project in projects {
        match gitlab.list_branches(project.id) {
            Ok(branches) => {
                log::debug!("got {} branches of {}", branches.len(), project.name);
                console.status(&format!("Got branches of {}", project.name));
                project.branches = filter_branches(&branches, mode);
                aggregation.projects.push(project);
            }
            Err(error) => {
                log::warn!("skipping {}: {}", project.name, error);
                aggregation
                    .failures
                    .push(FetchFailure { subject: format!("branches of {}", project.name), error });
            }
        }
    }

    Ok(aggregation)
}

fn collect_projects<G: GitlabClient + ?Sized>(
    gitlab: &G,
    groups: &[Group],
    aggregation: &mut Aggregation,
) -> Vec<Project> {
    let mut projects = Vec::new();
    for group in groups {
        match gitlab.list_group_projects(group.id) {
            Ok(found) => projects.extend(found),
            Err(error) => {
                log::warn!("skipping {}: {}", group.label(), error);
                aggregation
                    .failures
                    .push(FetchFailure { subject: format!("projects of {}", group.label()), error });
            }
        }
    }
    projects
}
