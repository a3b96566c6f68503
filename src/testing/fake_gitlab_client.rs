use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Branch, Group, Project};
use crate::ports::GitlabClient;

/// In-memory GitLab with switchable failures and a log of delete requests.
#[derive(Clone, Default)]
pub struct FakeGitlabClient {
    pub groups: Vec<Group>,
    pub group_projects: HashMap<u64, Vec<Project>>,
    pub branches: HashMap<u64, Vec<Branch>>,
    pub failing_groups: HashSet<u64>,
    pub failing_projects: HashSet<u64>,
    pub failing_deletes: HashSet<String>,
    pub fail_group_listing: bool,
    pub deleted: Arc<Mutex<Vec<(u64, String)>>>,
}

impl FakeGitlabClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, id: u64, projects: Vec<Project>) -> Self {
        self.groups.push(Group::new(id));
        self.group_projects.insert(id, projects);
        self
    }

    pub fn with_branches(mut self, project_id: u64, branches: Vec<Branch>) -> Self {
        self.branches.insert(project_id, branches);
        self
    }

    pub fn failing_group(mut self, id: u64) -> Self {
        self.failing_groups.insert(id);
        self
    }

    pub fn failing_project(mut self, id: u64) -> Self {
        self.failing_projects.insert(id);
        self
    }

    pub fn failing_delete(mut self, branch: &str) -> Self {
        self.failing_deletes.insert(branch.to_string());
        self
    }

    pub fn get_deleted(&self) -> Vec<(u64, String)> {
        self.deleted.lock().unwrap().clone()
    }
}

impl GitlabClient for FakeGitlabClient {
    fn list_groups(&self) -> Result<Vec<Group>, AppError> {
        if self.fail_group_listing {
            return Err(AppError::Transport("connection refused".to_string()));
        }
        Ok(self.groups.clone())
    }

    fn list_group_projects(&self, group_id: u64) -> Result<Vec<Project>, AppError> {
        if self.failing_groups.contains(&group_id) {
            return Err(AppError::Api { status: 500, message: "500 Internal Server Error".into() });
        }
        Ok(self.group_projects.get(&group_id).cloned().unwrap_or_default())
    }

    fn list_branches(&self, project_id: u64) -> Result<Vec<Branch>, AppError> {
        if self.failing_projects.contains(&project_id) {
            return Err(AppError::Transport("timed out".to_string()));
        }
        Ok(self.branches.get(&project_id).cloned().unwrap_or_default())
    }

    fn delete_branch(&self, project_id: u64, branch: &str) -> Result<(), AppError> {
        self.deleted.lock().unwrap().push((project_id, branch.to_string()));
        if self.failing_deletes.contains(branch) {
            return Err(AppError::Api { status: 404, message: "404 Branch Not Found".into() });
        }
        Ok(())
    }
}
