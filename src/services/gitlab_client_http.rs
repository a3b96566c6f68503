//! GitLab API v4 client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{AppError, Branch, GitlabConfig, Group, Project};
use crate::ports::GitlabClient;

const PRIVATE_TOKEN: &str = "private_token";
const UNKNOWN_AUTHOR: &str = "unknown";

/// HTTP client for the GitLab REST API.
#[derive(Clone)]
pub struct HttpGitlabClient {
    token: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGitlabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitlabClient")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpGitlabClient {
    /// Create a client for the instance described by `config`.
    pub fn new(config: &GitlabConfig) -> Result<Self, AppError> {
        if config.accept_invalid_certs {
            log::warn!(
                "TLS certificate verification is disabled for {} (gitlab.accept_invalid_certs)",
                config.url
            );
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { token: config.token.clone(), api_url: config.api_url()?, client })
    }

    /// Build `<api_url>/<segments...>?private_token=...`.
    ///
    /// Each segment is percent-encoded on its own, so a branch named `feature/a`
    /// becomes `feature%2Fa` instead of two path components.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::config_error(format!("Cannot build a path on {}", self.api_url)))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut().append_pair(PRIVATE_TOKEN, &self.token);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, segments: &[&str], what: &str) -> Result<T, AppError> {
        let url = self.endpoint(segments)?;
        log::debug!("GET {}", url.path());

        let response = self.client.get(url).send().map_err(transport_error)?;
        let response = ensure_success(response)?;
        let body = response.text().map_err(transport_error)?;
        serde_json::from_str(&body).map_err(|e| AppError::parse_error(what, e))
    }
}

#[derive(Debug, Deserialize)]
struct ApiGroup {
    id: u64,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiProject {
    id: u64,
    name: String,
    #[serde(default)]
    web_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiBranch {
    name: String,
    #[serde(default)]
    merged: bool,
    #[serde(default)]
    protected: bool,
    #[serde(default)]
    commit: Option<ApiCommit>,
}

#[derive(Debug, Deserialize)]
struct ApiCommit {
    #[serde(default)]
    author_name: Option<String>,
}

/// GitLab reports failures as `{"message": ...}` or `{"error": ...}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

impl From<ApiBranch> for Branch {
    fn from(api: ApiBranch) -> Self {
        let author = api
            .commit
            .and_then(|commit| commit.author_name)
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
        Branch { name: api.name, merged: api.merged, protected: api.protected, author }
    }
}

impl GitlabClient for HttpGitlabClient {
    fn list_groups(&self) -> Result<Vec<Group>, AppError> {
        let groups: Vec<ApiGroup> = self.get_json(&["groups"], "group list")?;
        Ok(groups.into_iter().map(|g| Group { id: g.id, name: g.name }).collect())
    }

    fn list_group_projects(&self, group_id: u64) -> Result<Vec<Project>, AppError> {
        let id = group_id.to_string();
        let projects: Vec<ApiProject> =
            self.get_json(&["groups", &id, "projects"], "project list")?;
        Ok(projects
            .into_iter()
            .map(|p| Project { id: p.id, name: p.name, url: p.web_url, branches: Vec::new() })
            .collect())
    }

    fn list_branches(&self, project_id: u64) -> Result<Vec<Branch>, AppError> {
        let id = project_id.to_string();
        let branches: Vec<ApiBranch> =
            self.get_json(&["projects", &id, "repository", "branches"], "branch list")?;
        Ok(branches.into_iter().map(Branch::from).collect())
    }

    fn delete_branch(&self, project_id: u64, branch: &str) -> Result<(), AppError> {
        let id = project_id.to_string();
        let url = self.endpoint(&["projects", &id, "repository", "branches", branch])?;
        log::debug!("DELETE {}", url.path());

        let response = self.client.delete(url).send().map_err(transport_error)?;
        ensure_success(response)?;
        Ok(())
    }
}

/// The request URL carries `private_token`, so it is stripped from the message.
fn transport_error(err: reqwest::Error) -> AppError {
    AppError::Transport(err.without_url().to_string())
}

fn ensure_success(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(AppError::Api { status: status.as_u16(), message: error_message(&body, status) })
}

fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();
    let from_body = parsed.and_then(|b| match b.message {
        Some(serde_json::Value::String(message)) => Some(message),
        Some(other) => Some(other.to_string()),
        None => b.error,
    });

    // Non-JSON bodies (proxy error pages and the like) are not echoed.
    from_body
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string())
}
