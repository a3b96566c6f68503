//! holmes: list and clean up topic branches across GitLab groups and projects.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::commands::gitlab::{
    Aggregation, Delivery, DeleteResult, DeleteStatus, FetchFailure, GitlabOutcome,
    RemovalOutcome, ReportSinks,
};
pub use domain::{AppError, Branch, FilterMode, GitlabOptions, HolmesConfig, Project};
