//! Configuration models loaded from `config.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use super::branch::{Group, Project};
use super::error::AppError;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolmesConfig {
    pub gitlab: GitlabConfig,
    /// Required only for `--trello`.
    #[serde(default)]
    pub trello: Option<TrelloConfig>,
}

impl HolmesConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gitlab.validate()?;
        if let Some(trello) = &self.trello {
            trello.validate()?;
        }
        Ok(())
    }

    /// Trello settings, or an error naming the missing section.
    pub fn require_trello(&self) -> Result<&TrelloConfig, AppError> {
        self.trello.as_ref().ok_or_else(|| {
            AppError::InvalidConfig("--trello needs a [trello] section in the config".to_string())
        })
    }
}

/// GitLab connection and scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitlabConfig {
    /// Instance root, e.g. `https://gitlab.example.com`.
    pub url: Url,
    /// Personal access token, sent as `private_token`.
    #[serde(default)]
    pub token: String,
    /// Groups to walk. Empty means every group visible to the token.
    #[serde(default)]
    pub groups: Vec<u64>,
    /// Projects to inspect directly instead of walking groups.
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Skip TLS certificate verification. Only for instances with self-signed certs.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectEntry {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Where the aggregator starts walking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSource {
    AllGroups,
    Groups(Vec<Group>),
    Projects(Vec<Project>),
}

impl GitlabConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !matches!(self.url.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig(format!(
                "gitlab.url must be http or https, got '{}'",
                self.url
            )));
        }
        if self.token.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "gitlab.token is empty (set it or export HOLMES_GITLAB_TOKEN)".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if !self.groups.is_empty() && !self.projects.is_empty() {
            return Err(AppError::InvalidConfig(
                "set either gitlab.groups or gitlab.projects, not both".to_string(),
            ));
        }
        Ok(())
    }

    /// API root, `<url>/api/v4`.
    pub fn api_url(&self) -> Result<Url, AppError> {
        let base = self.url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/api/v4"))
            .map_err(|e| AppError::InvalidConfig(format!("gitlab.url: {e}")))
    }

    pub fn source(&self) -> ProjectSource {
        if !self.projects.is_empty() {
            return ProjectSource::Projects(
                self.projects
                    .iter()
                    .map(|entry| Project {
                        id: entry.id,
                        name: entry.name.clone(),
                        url: entry.url.clone(),
                        branches: Vec::new(),
                    })
                    .collect(),
            );
        }
        if !self.groups.is_empty() {
            return ProjectSource::Groups(self.groups.iter().copied().map(Group::new).collect());
        }
        ProjectSource::AllGroups
    }
}

/// Trello card that receives the report as its description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrelloConfig {
    pub key: String,
    pub token: String,
    pub card_id: String,
    #[serde(default = "default_trello_api_url")]
    pub api_url: Url,
}

impl TrelloConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [("key", &self.key), ("token", &self.token), ("card_id", &self.card_id)]
        {
            if value.trim().is_empty() {
                return Err(AppError::InvalidConfig(format!("trello.{field} is empty")));
            }
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_trello_api_url() -> Url {
    Url::parse("https://api.trello.com/1").expect("Default Trello API URL must be valid")
}

/// Parse and validate configuration content.
pub fn parse_config_content(content: &str) -> Result<HolmesConfig, AppError> {
    let config: HolmesConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
