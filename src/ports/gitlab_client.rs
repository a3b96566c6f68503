//! GitLab API client port definition.

use crate::domain::{AppError, Branch, Group, Project};

/// Port for the GitLab REST operations holmes needs.
///
/// Every call is a single request; implementations do not retry or paginate.
pub trait GitlabClient {
    /// Every group visible to the token.
    fn list_groups(&self) -> Result<Vec<Group>, AppError>;

    /// Projects belonging to one group, in API order.
    fn list_group_projects(&self, group_id: u64) -> Result<Vec<Project>, AppError>;

    /// Branches of one project, in API order.
    fn list_branches(&self, project_id: u64) -> Result<Vec<Branch>, AppError>;

    /// Delete one branch. `Ok(())` means the server accepted the deletion.
    fn delete_branch(&self, project_id: u64, branch: &str) -> Result<(), AppError>;
}
