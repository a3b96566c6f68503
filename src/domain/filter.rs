//! Merge-status filtering of branch lists.

use super::branch::Branch;

/// Which branches a run operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    Merged,
    Unmerged,
    #[default]
    All,
}

impl FilterMode {
    /// Derive the mode from the `--merged` / `--unmerged` flags.
    ///
    /// Setting both or neither means no filtering.
    pub fn from_flags(merged: bool, unmerged: bool) -> Self {
        match (merged, unmerged) {
            (true, false) => FilterMode::Merged,
            (false, true) => FilterMode::Unmerged,
            _ => FilterMode::All,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FilterMode::Merged => "Merged",
            FilterMode::Unmerged => "Unmerged",
            FilterMode::All => "All",
        }
    }

    /// Section label, e.g. `Merged branches`.
    pub fn label(&self) -> String {
        format!("{} branches", self.display_name())
    }

    pub fn matches(&self, branch: &Branch) -> bool {
        match self {
            FilterMode::Merged => branch.merged,
            FilterMode::Unmerged => !branch.merged,
            FilterMode::All => true,
        }
    }
}

/// Keep the branches matching `mode`, preserving their order.
pub fn filter_branches(branches: &[Branch], mode: FilterMode) -> Vec<Branch> {
    branches.iter().filter(|branch| mode.matches(branch)).cloned().collect()
}

/// Branches that may be offered for deletion: filtered first, protected ones dropped.
pub fn removable_branches(branches: &[Branch], mode: FilterMode) -> Vec<Branch> {
    filter_branches(branches, mode).into_iter().filter(|branch| !branch.protected).collect()
}
