//! Groups, projects and branches as seen by holmes.

/// A GitLab group. Only used to look up its projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: u64,
    pub name: Option<String>,
}

impl Group {
    pub fn new(id: u64) -> Self {
        Self { id, name: None }
    }

    /// Human label used in progress and failure messages.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("group {} ({})", name, self.id),
            None => format!("group {}", self.id),
        }
    }
}

/// A project together with the branches fetched for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub url: Option<String>,
    pub branches: Vec<Branch>,
}

impl Project {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), url: None, branches: Vec::new() }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_branches(mut self, branches: Vec<Branch>) -> Self {
        self.branches = branches;
        self
    }
}

/// A branch record.
///
/// `protected` is the canonical name for the hosting service's protection flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub merged: bool,
    pub protected: bool,
    pub author: String,
}

impl Branch {
    pub fn new(name: impl Into<String>, merged: bool, author: impl Into<String>) -> Self {
        Self { name: name.into(), merged, protected: false, author: author.into() }
    }

    pub fn protected(mut self) -> Self {
        self.protected = true;
        self
    }

    pub fn merge_status(&self) -> &'static str {
        if self.merged { "merged" } else { "unmerged" }
    }
}
