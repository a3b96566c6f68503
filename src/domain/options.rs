//! Run options for the `gitlab` command.

use std::fmt;

use super::filter::FilterMode;

/// Boolean switches selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GitlabOptions {
    pub merged: bool,
    pub unmerged: bool,
    pub remove: bool,
    pub copy: bool,
    pub silent: bool,
    pub trello: bool,
}

impl GitlabOptions {
    pub fn filter_mode(&self) -> FilterMode {
        FilterMode::from_flags(self.merged, self.unmerged)
    }

    /// Flags that have no effect together with `--remove`.
    ///
    /// `--merged` / `--unmerged` are not listed: they narrow the deletion choices.
    pub fn conflicts(&self) -> Vec<FlagConflict> {
        if !self.remove {
            return Vec::new();
        }
        [
            (self.copy, FlagConflict::RemoveWithCopy),
            (self.silent, FlagConflict::RemoveWithSilent),
            (self.trello, FlagConflict::RemoveWithTrello),
        ]
        .into_iter()
        .filter_map(|(set, conflict)| set.then_some(conflict))
        .collect()
    }

    /// Options with every flag ignored by `--remove` cleared.
    pub fn effective(&self) -> Self {
        if !self.remove {
            return *self;
        }
        Self { copy: false, silent: false, trello: false, ..*self }
    }
}

/// A contradictory flag combination. Reported as a warning; the second flag is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagConflict {
    RemoveWithCopy,
    RemoveWithSilent,
    RemoveWithTrello,
}

impl fmt::Display for FlagConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = match self {
            FlagConflict::RemoveWithCopy => "--copy",
            FlagConflict::RemoveWithSilent => "--silent",
            FlagConflict::RemoveWithTrello => "--trello",
        };
        write!(f, "{flag} is ignored when --remove is set")
    }
}
