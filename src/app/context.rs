use crate::domain::ProjectSource;
use crate::ports::GitlabClient;

/// Application context holding dependencies for command execution.
pub struct AppContext<G: GitlabClient> {
    gitlab: G,
    source: ProjectSource,
}

impl<G: GitlabClient> AppContext<G> {
    /// Create a new application context.
    pub fn new(gitlab: G, source: ProjectSource) -> Self {
        Self { gitlab, source }
    }

    /// Get a reference to the GitLab client.
    pub fn gitlab(&self) -> &G {
        &self.gitlab
    }

    /// Where aggregation starts walking.
    pub fn source(&self) -> &ProjectSource {
        &self.source
    }
}
