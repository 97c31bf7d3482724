//! Application state: the single explicit container the store mutates.

use super::layout::{Account, Notation};
use super::project::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Accounts,
    Sidebar,
    Prompt,
}

/// Which account-table column the selection sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountColumn {
    Name,
    Kind,
    DataLen,
}

impl AccountColumn {
    pub fn next(self) -> AccountColumn {
        match self {
            AccountColumn::Name => AccountColumn::Kind,
            AccountColumn::Kind => AccountColumn::DataLen,
            AccountColumn::DataLen => AccountColumn::Name,
        }
    }

    pub fn prev(self) -> AccountColumn {
        match self {
            AccountColumn::Name => AccountColumn::DataLen,
            AccountColumn::Kind => AccountColumn::Name,
            AccountColumn::DataLen => AccountColumn::Kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    ImportPath,
    ProjectName,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::ImportPath => "Import project (path)",
            PromptKind::ProjectName => "New project (name)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub kind: PromptKind,
    pub buffer: String,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: FocusTarget,
    pub selected_row: usize,
    pub selected_col: AccountColumn,
    /// In-place cell edit buffer; `Some` while a Name/DataLen cell is open.
    pub edit: Option<String>,
    pub sidebar_visible: bool,
    pub sidebar_selected: usize,
    pub prompt: Option<PromptState>,
    pub output_scroll: usize,
    pub status: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: FocusTarget::Accounts,
            selected_row: 0,
            selected_col: AccountColumn::Name,
            edit: None,
            sidebar_visible: false,
            sidebar_selected: 0,
            prompt: None,
            output_scroll: 0,
            status: None,
        }
    }
}

/// All application state. The layout engine itself is stateless; it reads
/// `accounts` and `notation` and nothing else.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub projects: Vec<Project>,
    /// Index into `projects` of the project the working copy belongs to.
    pub current: Option<usize>,
    /// Working copy the editor mutates; folded back into the current
    /// project when an autosave fires.
    pub accounts: Vec<Account>,
    pub notation: Notation,
    pub ui: UiState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.current.and_then(|i| self.projects.get(i))
    }

    /// Fold the working copy back into the current project. Returns true
    /// if the project content actually changed.
    pub fn snapshot_current(&mut self) -> bool {
        let Some(index) = self.current else {
            return false;
        };
        let Some(project) = self.projects.get_mut(index) else {
            return false;
        };
        let changed = project.accounts != self.accounts || project.notation != self.notation;
        project.accounts = self.accounts.clone();
        project.notation = self.notation;
        changed
    }

    /// Make `projects[index]` the working project, loading its contents.
    pub fn activate_project(&mut self, index: usize) -> bool {
        let Some(project) = self.projects.get(index) else {
            return false;
        };
        self.accounts = project.accounts.clone();
        self.notation = project.notation;
        self.current = Some(index);
        self.ui.selected_row = 0;
        self.ui.selected_col = AccountColumn::Name;
        self.ui.edit = None;
        self.ui.output_scroll = 0;
        true
    }

    pub fn selected_account(&self) -> Option<&Account> {
        self.accounts.get(self.ui.selected_row)
    }

    pub fn selected_account_mut(&mut self) -> Option<&mut Account> {
        self.accounts.get_mut(self.ui.selected_row)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.ui.status = Some(message.into());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
