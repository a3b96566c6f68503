pub mod branch;
pub mod config;
pub mod error;
pub mod filter;
pub mod options;
pub mod report;

pub use branch::{Branch, Group, Project};
pub use config::{
    GitlabConfig, HolmesConfig, ProjectEntry, ProjectSource, TrelloConfig, parse_config_content,
};
pub use error::AppError;
pub use filter::{FilterMode, filter_branches, removable_branches};
pub use options::{FlagConflict, GitlabOptions};
pub use report::format_report;
