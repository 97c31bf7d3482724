//! Project record: the persisted / imported / exported unit of state.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use super::layout::{Account, Notation};

/// A named set of accounts plus the selected output notation.
///
/// This is both the autosave format (an array of these in `projects.json`)
/// and the import/export format (one per file). `language` is accepted as
/// an alias for `notation` so files exported by the original web tool load
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default = "next_project_id")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default, alias = "language")]
    pub notation: Notation,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: next_project_id(),
            name: name.into(),
            accounts: Vec::new(),
            notation: Notation::default(),
        }
    }

    /// Export file name: lowercased, whitespace runs collapsed to `-`,
    /// `.json` appended. Mirrors the original tool's download name.
    pub fn export_file_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 5);
        let mut in_whitespace = false;
        for ch in self.name.to_lowercase().chars() {
            if ch.is_whitespace() {
                if !in_whitespace {
                    out.push('-');
                }
                in_whitespace = true;
            } else {
                out.push(ch);
                in_whitespace = false;
            }
        }
        if out.is_empty() {
            out.push_str("untitled-project");
        }
        out.push_str(".json");
        out
    }
}

/// Millisecond timestamp, the original tool's `Date.now()` id scheme.
pub fn next_project_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/project.rs"]
mod tests;
