//! Workbench: input dispatch, effect execution, tick polling, rendering.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::theme::UiTheme;
use crate::kernel::{Action, AppState, Effect, FocusTarget, Notation, Store};
use crate::services::{storage, AsyncResult, AsyncRuntime};
use crate::views::{prompt, AccountsView, OffsetsView, SidebarView};

const HEADER_HEIGHT: u16 = 1;
const TABS_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const SIDEBAR_WIDTH: u16 = 30;

/// Debounce window between the last state change and the autosave write.
/// Every further change re-arms the deadline, cancelling the pending save.
pub const AUTOSAVE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

impl EventResult {
    pub fn is_quit(self) -> bool {
        self == EventResult::Quit
    }
}

pub struct Workbench {
    store: Store,
    accounts_view: AccountsView,
    offsets_view: OffsetsView,
    sidebar_view: SidebarView,
    runtime: AsyncRuntime,
    theme: UiTheme,
    projects_path: Option<PathBuf>,
    autosave_deadline: Option<Instant>,
}

impl Workbench {
    pub fn new(runtime: AsyncRuntime) -> Self {
        let projects_path = if cfg!(test) {
            None
        } else {
            match storage::ensure_projects_path() {
                Ok(path) => Some(path),
                Err(err) => {
                    tracing::warn!(%err, "no data directory; autosave disabled");
                    None
                }
            }
        };
        if let Some(path) = &projects_path {
            runtime.load_projects(path.clone());
        }

        Self {
            store: Store::new(AppState::new()),
            accounts_view: AccountsView::new(),
            offsets_view: OffsetsView::new(),
            sidebar_view: SidebarView::new(),
            runtime,
            theme: UiTheme::default(),
            projects_path,
            autosave_deadline: None,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Import a project file straight away (CLI argument path).
    pub fn import(&mut self, path: PathBuf) {
        self.dispatch(Action::StatusMessage(format!(
            "importing {}...",
            path.display()
        )));
        self.runtime.import_project(path);
    }

    fn dispatch(&mut self, action: Action) {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        if result.state_changed && self.store.state().current.is_some() {
            self.autosave_deadline = Some(Instant::now() + AUTOSAVE_DELAY);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::SaveProjects(projects) => match &self.projects_path {
                Some(path) => self.runtime.save_projects(path.clone(), projects),
                None => tracing::warn!("autosave skipped: no data directory"),
            },
            Effect::ImportProject(path) => self.runtime.import_project(path),
            Effect::ExportProject { path, project } => {
                self.runtime.export_project(path, project);
            }
        }
    }

    /// Per-frame housekeeping: drain async results, fire due autosaves.
    pub fn tick(&mut self) {
        while let Some(result) = self.runtime.try_recv() {
            self.handle_async(result);
        }
        self.poll_autosave();
    }

    fn poll_autosave(&mut self) {
        let Some(deadline) = self.autosave_deadline else {
            return;
        };
        if Instant::now() < deadline {
            return;
        }
        self.autosave_deadline = None;

        let result = self.store.dispatch(Action::Autosave);
        for effect in result.effects {
            self.run_effect(effect);
        }
    }

    fn handle_async(&mut self, result: AsyncResult) {
        match result {
            AsyncResult::ProjectsLoaded { result } => match result {
                Ok(projects) => {
                    tracing::info!(count = projects.len(), "projects loaded");
                    self.dispatch(Action::ProjectsLoaded(projects));
                }
                Err(err) => {
                    // Prior state stays untouched; the file is left alone.
                    tracing::warn!(%err, "failed to load projects");
                    self.dispatch(Action::StatusMessage(format!(
                        "could not load saved projects: {err}"
                    )));
                }
            },
            AsyncResult::ProjectsSaved { result } => match result {
                Ok(()) => tracing::debug!("projects saved"),
                Err(err) => {
                    tracing::warn!(%err, "autosave failed");
                    self.dispatch(Action::StatusMessage(format!("autosave failed: {err}")));
                }
            },
            AsyncResult::ProjectImported { path, result } => match result {
                Ok(project) => self.dispatch(Action::ProjectImported { path, project }),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "import failed");
                    self.dispatch(Action::ImportFailed { path, error });
                }
            },
            AsyncResult::ProjectExported { path, result } => match result {
                Ok(()) => {
                    self.dispatch(Action::StatusMessage(format!(
                        "exported {}",
                        path.display()
                    )));
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "export failed");
                    self.dispatch(Action::StatusMessage(format!("export failed: {err}")));
                }
            },
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        // Open prompt or cell edit captures text input first.
        let state = self.store.state();
        if state.ui.prompt.is_some() || state.ui.edit.is_some() {
            return match key.code {
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.dispatch(Action::InputChar(ch));
                    EventResult::Consumed
                }
                KeyCode::Backspace => {
                    self.dispatch(Action::InputBackspace);
                    EventResult::Consumed
                }
                KeyCode::Enter => {
                    self.dispatch(Action::Commit);
                    EventResult::Consumed
                }
                KeyCode::Esc => {
                    self.dispatch(Action::Cancel);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        if let Some(result) = self.handle_global_key(&key) {
            return result;
        }

        match self.store.state().ui.focus {
            FocusTarget::Sidebar => self.handle_sidebar_key(&key),
            FocusTarget::Accounts => self.handle_accounts_key(&key),
            // Prompt focus without an open prompt cannot occur; treat as
            // the account table.
            FocusTarget::Prompt => self.handle_accounts_key(&key),
        }
    }

    fn handle_global_key(&mut self, key: &KeyEvent) -> Option<EventResult> {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        let action = match key.code {
            KeyCode::Char('q') => return Some(EventResult::Quit),
            KeyCode::Char('b') => Action::ToggleSidebar,
            KeyCode::Char('e') => Action::ExportProject,
            KeyCode::Char('o') => Action::OpenImportPrompt,
            KeyCode::Char('n') => Action::OpenProjectPrompt,
            _ => return None,
        };
        self.dispatch(action);
        Some(EventResult::Consumed)
    }

    fn handle_sidebar_key(&mut self, key: &KeyEvent) -> EventResult {
        let action = match key.code {
            KeyCode::Up => Action::SidebarMoveSelection { delta: -1 },
            KeyCode::Down => Action::SidebarMoveSelection { delta: 1 },
            KeyCode::Enter => Action::SidebarActivate,
            KeyCode::Esc => Action::Cancel,
            _ => return EventResult::Ignored,
        };
        self.dispatch(action);
        EventResult::Consumed
    }

    fn handle_accounts_key(&mut self, key: &KeyEvent) -> EventResult {
        let action = match key.code {
            KeyCode::Char('a') => Action::AddAccount,
            KeyCode::Char('d') => Action::RemoveSelected,
            KeyCode::Char(' ') => Action::CycleKind,
            KeyCode::Char('1') => Action::SetNotation(Notation::Asm),
            KeyCode::Char('2') => Action::SetNotation(Notation::Rust),
            KeyCode::Char('3') => Action::SetNotation(Notation::C),
            KeyCode::Tab => Action::NextNotation,
            KeyCode::Up => Action::MoveSelection { delta: -1 },
            KeyCode::Down => Action::MoveSelection { delta: 1 },
            KeyCode::Left => Action::MoveColumn { delta: -1 },
            KeyCode::Right => Action::MoveColumn { delta: 1 },
            KeyCode::Enter => Action::BeginEdit,
            KeyCode::PageUp => Action::ScrollOutput { delta: -8 },
            KeyCode::PageDown => Action::ScrollOutput { delta: 8 },
            KeyCode::Esc => Action::Cancel,
            _ => return EventResult::Ignored,
        };
        self.dispatch(action);
        EventResult::Consumed
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.sidebar_view.contains(event.column, event.row) {
                    if self.store.state().ui.focus != FocusTarget::Sidebar {
                        self.dispatch(Action::ToggleSidebar);
                    }
                } else if self.accounts_view.contains(event.column, event.row)
                    && self.store.state().ui.focus == FocusTarget::Sidebar
                {
                    self.dispatch(Action::ToggleSidebar);
                }
            }
            MouseEventKind::ScrollUp if self.offsets_view.contains(event.column, event.row) => {
                self.dispatch(Action::ScrollOutput { delta: -3 });
            }
            MouseEventKind::ScrollDown if self.offsets_view.contains(event.column, event.row) => {
                self.dispatch(Action::ScrollOutput { delta: 3 });
            }
            _ => {}
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        self.render_header(frame, rows[0]);

        let state = self.store.state();
        let body = if state.ui.sidebar_visible {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(rows[1]);
            let focused = state.ui.focus == FocusTarget::Sidebar;
            self.sidebar_view
                .render(frame, cols[0], self.store.state(), &self.theme, focused);
            cols[1]
        } else {
            rows[1]
        };

        let state = self.store.state();
        let table_height = (state.accounts.len() as u16 + 3)
            .max(4)
            .min(body.height / 2);
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(table_height),
                Constraint::Length(TABS_HEIGHT),
                Constraint::Min(0),
            ])
            .split(body);

        let accounts_focused = state.ui.focus == FocusTarget::Accounts;
        self.accounts_view.render(
            frame,
            main[0],
            self.store.state(),
            &self.theme,
            accounts_focused,
        );
        self.offsets_view.render_tabs(
            frame,
            main[1],
            self.store.state().notation,
            &self.theme,
        );
        self.offsets_view
            .render(frame, main[2], self.store.state(), &self.theme);

        self.render_status(frame, rows[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let project = state
            .current_project()
            .map(|p| p.name.as_str())
            .unwrap_or("(no project)");
        let line = Line::from(vec![
            Span::styled(
                " svmcalc ",
                Style::default().fg(self.theme.header_fg),
            ),
            Span::styled(
                format!(" {project} "),
                Style::default().fg(self.theme.accent_fg),
            ),
            Span::styled(
                " ^B projects  ^Q quit",
                Style::default().fg(self.theme.muted_fg),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        if let Some(p) = &state.ui.prompt {
            prompt::render(frame, area, p, &self.theme);
            return;
        }
        let text = state.ui.status.clone().unwrap_or_else(|| {
            "a add  d delete  enter edit  space type  1/2/3 notation  ^E export".to_string()
        });
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default().fg(self.theme.muted_fg),
            ))),
            area,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/workbench.rs"]
mod tests;
