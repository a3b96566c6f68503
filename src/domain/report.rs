//! Plain-text report of the aggregated branches.

use super::branch::{Branch, Project};
use super::filter::FilterMode;

pub const SEPARATOR: &str = "==================================================";

/// One line per branch, as it appears in reports and copied text.
pub fn branch_line(branch: &Branch) -> String {
    format!("- {} (Author: {})", branch.name, branch.author)
}

/// Render one block per project.
pub fn format_report(projects: &[Project], mode: FilterMode) -> String {
    let mut out = String::new();
    for project in projects {
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&format!("▼ {}\n", project.name));
        if let Some(url) = &project.url {
            out.push_str(url);
            out.push('\n');
        }
        out.push_str(&format!("\n[{}]\n", mode.label()));
        if project.branches.is_empty() {
            out.push_str("- (none)\n");
        }
        for branch in &project.branches {
            out.push_str(&branch_line(branch));
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
