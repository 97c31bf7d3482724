//! Reducer: applies `Action`s to `AppState`, answering with `Effect`s.

use std::path::PathBuf;

use super::layout::Account;
use super::project::Project;
use super::state::{AccountColumn, FocusTarget, PromptKind, PromptState};
use super::{Action, AppState, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed: changed,
        }
    }

    fn with_effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
            state_changed: true,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::AddAccount => {
                let name = format!("ACCOUNT{}", self.state.accounts.len() + 1);
                self.state
                    .accounts
                    .push(Account::new(name, super::AccountKind::System));
                self.state.ui.selected_row = self.state.accounts.len() - 1;
                self.state.ui.selected_col = AccountColumn::Name;
                DispatchResult::changed(true)
            }
            Action::RemoveSelected => {
                let row = self.state.ui.selected_row;
                if row >= self.state.accounts.len() {
                    return DispatchResult::changed(false);
                }
                self.state.accounts.remove(row);
                if self.state.ui.selected_row >= self.state.accounts.len() {
                    self.state.ui.selected_row = self.state.accounts.len().saturating_sub(1);
                }
                self.state.ui.edit = None;
                DispatchResult::changed(true)
            }
            Action::MoveSelection { delta } => {
                if self.state.accounts.is_empty() || self.state.ui.edit.is_some() {
                    return DispatchResult::changed(false);
                }
                let last = self.state.accounts.len() - 1;
                let row = self.state.ui.selected_row;
                let next = row
                    .saturating_add_signed(delta)
                    .min(last);
                self.state.ui.selected_row = next;
                DispatchResult::changed(next != row)
            }
            Action::MoveColumn { delta } => {
                if self.state.ui.edit.is_some() {
                    return DispatchResult::changed(false);
                }
                let col = self.state.ui.selected_col;
                self.state.ui.selected_col = if delta < 0 { col.prev() } else { col.next() };
                DispatchResult::changed(true)
            }
            Action::BeginEdit => {
                let col = self.state.ui.selected_col;
                // The kind cell has no free text; Enter cycles it.
                if col == AccountColumn::Kind {
                    return self.dispatch(Action::CycleKind);
                }
                let Some(account) = self.state.selected_account() else {
                    return DispatchResult::changed(false);
                };
                let buffer = match col {
                    AccountColumn::Name => account.name.clone(),
                    _ => account.data_len.to_string(),
                };
                self.state.ui.edit = Some(buffer);
                DispatchResult::changed(true)
            }
            Action::CycleKind => {
                let Some(account) = self.state.selected_account_mut() else {
                    return DispatchResult::changed(false);
                };
                account.kind = account.kind.cycle();
                // Changing the kind re-derives the data length.
                account.data_len = account.kind.default_data_len();
                DispatchResult::changed(true)
            }
            Action::InputChar(ch) => {
                if let Some(prompt) = self.state.ui.prompt.as_mut() {
                    prompt.buffer.push(ch);
                    return DispatchResult::changed(true);
                }
                if let Some(edit) = self.state.ui.edit.as_mut() {
                    edit.push(ch);
                    return DispatchResult::changed(true);
                }
                DispatchResult::changed(false)
            }
            Action::InputBackspace => {
                if let Some(prompt) = self.state.ui.prompt.as_mut() {
                    return DispatchResult::changed(prompt.buffer.pop().is_some());
                }
                if let Some(edit) = self.state.ui.edit.as_mut() {
                    return DispatchResult::changed(edit.pop().is_some());
                }
                DispatchResult::changed(false)
            }
            Action::Commit => self.commit(),
            Action::Cancel => self.cancel(),
            Action::SetNotation(notation) => {
                if self.state.notation == notation {
                    return DispatchResult::changed(false);
                }
                self.state.notation = notation;
                self.state.ui.output_scroll = 0;
                DispatchResult::changed(true)
            }
            Action::NextNotation => {
                self.state.notation = self.state.notation.cycle();
                self.state.ui.output_scroll = 0;
                DispatchResult::changed(true)
            }
            Action::ScrollOutput { delta } => {
                // 6 labels per account plus NUM_ACCOUNTS and the 3 trailers.
                let total = self.state.accounts.len() * 6 + 4;
                let prev = self.state.ui.output_scroll;
                let next = prev.saturating_add_signed(delta).min(total.saturating_sub(1));
                self.state.ui.output_scroll = next;
                DispatchResult::changed(next != prev)
            }
            Action::ToggleSidebar => {
                self.state.ui.sidebar_visible = !self.state.ui.sidebar_visible;
                self.state.ui.focus = if self.state.ui.sidebar_visible {
                    FocusTarget::Sidebar
                } else {
                    FocusTarget::Accounts
                };
                DispatchResult::changed(true)
            }
            Action::SidebarMoveSelection { delta } => {
                if self.state.projects.is_empty() {
                    return DispatchResult::changed(false);
                }
                let last = self.state.projects.len() - 1;
                let row = self.state.ui.sidebar_selected;
                let next = row.saturating_add_signed(delta).min(last);
                self.state.ui.sidebar_selected = next;
                DispatchResult::changed(next != row)
            }
            Action::SidebarActivate => {
                let index = self.state.ui.sidebar_selected;
                if index >= self.state.projects.len() {
                    return DispatchResult::changed(false);
                }
                // Keep edits to the previous project before switching.
                self.state.snapshot_current();
                self.state.activate_project(index);
                self.state.ui.sidebar_visible = false;
                self.state.ui.focus = FocusTarget::Accounts;
                let name = self.state.projects[index].name.clone();
                self.state.set_status(format!("opened project '{name}'"));
                DispatchResult::changed(true)
            }
            Action::OpenImportPrompt => {
                self.open_prompt(PromptKind::ImportPath);
                DispatchResult::changed(true)
            }
            Action::OpenProjectPrompt => {
                self.open_prompt(PromptKind::ProjectName);
                DispatchResult::changed(true)
            }
            Action::ExportProject => self.export_project(),
            Action::Autosave => self.autosave(),
            Action::ProjectsLoaded(projects) => {
                let count = projects.len();
                self.state.projects = projects;
                self.state.ui.sidebar_selected = 0;
                self.state
                    .set_status(format!("loaded {count} project(s)"));
                DispatchResult::changed(true)
            }
            Action::ProjectImported { path, project } => {
                self.state.projects.push(project);
                let index = self.state.projects.len() - 1;
                self.state.activate_project(index);
                self.state.ui.sidebar_visible = false;
                self.state.ui.focus = FocusTarget::Accounts;
                self.state
                    .set_status(format!("imported {}", path.display()));
                DispatchResult::changed(true)
            }
            Action::ImportFailed { path, error } => {
                self.state
                    .set_status(format!("import of {} failed: {error}", path.display()));
                DispatchResult::changed(true)
            }
            Action::StatusMessage(message) => {
                self.state.set_status(message);
                DispatchResult::changed(true)
            }
            Action::Tick => DispatchResult::changed(false),
        }
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        self.state.ui.prompt = Some(PromptState {
            kind,
            buffer: String::new(),
        });
        self.state.ui.focus = FocusTarget::Prompt;
    }

    fn close_prompt(&mut self) {
        self.state.ui.prompt = None;
        self.state.ui.focus = if self.state.ui.sidebar_visible {
            FocusTarget::Sidebar
        } else {
            FocusTarget::Accounts
        };
    }

    fn commit(&mut self) -> DispatchResult {
        if let Some(prompt) = self.state.ui.prompt.take() {
            self.close_prompt();
            let input = prompt.buffer.trim().to_string();
            if input.is_empty() {
                return DispatchResult::changed(true);
            }
            return match prompt.kind {
                PromptKind::ImportPath => {
                    self.state.set_status(format!("importing {input}..."));
                    DispatchResult::with_effect(Effect::ImportProject(PathBuf::from(input)))
                }
                PromptKind::ProjectName => {
                    // The new project adopts the current working account
                    // list, like naming an untitled project in the original.
                    let mut project = Project::new(input.clone());
                    project.accounts = self.state.accounts.clone();
                    project.notation = self.state.notation;
                    self.state.projects.push(project);
                    self.state.current = Some(self.state.projects.len() - 1);
                    self.state.set_status(format!("created project '{input}'"));
                    DispatchResult::changed(true)
                }
            };
        }

        if let Some(buffer) = self.state.ui.edit.take() {
            match self.state.ui.selected_col {
                // Accepted verbatim: label prefixes are never sanitized.
                AccountColumn::Name => {
                    if let Some(account) = self.state.selected_account_mut() {
                        account.name = buffer;
                    }
                }
                AccountColumn::DataLen => match buffer.trim().parse::<i64>() {
                    Ok(value) => {
                        if let Some(account) = self.state.selected_account_mut() {
                            account.data_len = value;
                        }
                    }
                    Err(_) => {
                        self.state
                            .set_status(format!("invalid data length '{buffer}'"));
                    }
                },
                AccountColumn::Kind => {}
            }
            return DispatchResult::changed(true);
        }

        DispatchResult::changed(false)
    }

    fn cancel(&mut self) -> DispatchResult {
        if self.state.ui.prompt.is_some() {
            self.close_prompt();
            return DispatchResult::changed(true);
        }
        if self.state.ui.edit.take().is_some() {
            return DispatchResult::changed(true);
        }
        if self.state.ui.sidebar_visible {
            self.state.ui.sidebar_visible = false;
            self.state.ui.focus = FocusTarget::Accounts;
            return DispatchResult::changed(true);
        }
        DispatchResult::changed(self.state.ui.status.take().is_some())
    }

    fn export_project(&mut self) -> DispatchResult {
        self.state.snapshot_current();
        let project = match self.state.current_project() {
            Some(project) => project.clone(),
            None => {
                let mut project = Project::new("Untitled Project");
                project.accounts = self.state.accounts.clone();
                project.notation = self.state.notation;
                project
            }
        };
        let path = PathBuf::from(project.export_file_name());
        self.state
            .set_status(format!("exporting to {}", path.display()));
        DispatchResult::with_effect(Effect::ExportProject { path, project })
    }

    fn autosave(&mut self) -> DispatchResult {
        if self.state.current.is_none() {
            return DispatchResult::changed(false);
        }
        self.state.snapshot_current();
        // Not a UI change: reporting one would re-arm the debounce.
        DispatchResult {
            effects: vec![Effect::SaveProjects(self.state.projects.clone())],
            state_changed: false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
