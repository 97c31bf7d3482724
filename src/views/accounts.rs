//! Account table view.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::theme::UiTheme;
use crate::kernel::{AccountColumn, AppState};

const NAME_WIDTH: usize = 24;
const KIND_WIDTH: usize = 12;

pub struct AccountsView {
    area: Option<Rect>,
}

impl AccountsView {
    pub fn new() -> Self {
        Self { area: None }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area
            .map(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
            .unwrap_or(false)
    }

    fn cell(
        text: String,
        width: usize,
        selected: bool,
        editing: bool,
        theme: &UiTheme,
    ) -> Span<'static> {
        let mut text = text;
        if editing {
            text.push('_');
        }
        if text.len() < width {
            text.push_str(&" ".repeat(width - text.len()));
        }
        let style = if selected {
            Style::default()
                .bg(theme.selected_bg)
                .fg(theme.selected_fg)
        } else {
            Style::default().fg(theme.text_fg)
        };
        Span::styled(text, style)
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        theme: &UiTheme,
        focused: bool,
    ) {
        self.area = Some(area);

        let border = if focused {
            theme.focus_border
        } else {
            theme.inactive_border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Accounts ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::with_capacity(state.accounts.len() + 1);
        lines.push(Line::from(Span::styled(
            format!(
                "{:<NAME_WIDTH$}{:<KIND_WIDTH$}{}",
                "NAME", "TYPE", "DATA LEN"
            ),
            Style::default().fg(theme.muted_fg),
        )));

        if state.accounts.is_empty() {
            lines.push(Line::from(Span::styled(
                "press 'a' to add an account".to_string(),
                Style::default().fg(theme.muted_fg),
            )));
        }

        for (row, account) in state.accounts.iter().enumerate() {
            let row_selected = focused && row == state.ui.selected_row;
            let col = state.ui.selected_col;
            let edit = state.ui.edit.as_ref();

            let name_editing = row_selected && col == AccountColumn::Name && edit.is_some();
            let len_editing = row_selected && col == AccountColumn::DataLen && edit.is_some();

            let name_text = if name_editing {
                edit.cloned().unwrap_or_default()
            } else {
                account.name.clone()
            };
            let len_text = if len_editing {
                edit.cloned().unwrap_or_default()
            } else {
                account.data_len.to_string()
            };

            lines.push(Line::from(vec![
                Self::cell(
                    name_text,
                    NAME_WIDTH,
                    row_selected && col == AccountColumn::Name,
                    name_editing,
                    theme,
                ),
                Self::cell(
                    account.kind.label().to_string(),
                    KIND_WIDTH,
                    row_selected && col == AccountColumn::Kind,
                    false,
                    theme,
                ),
                Self::cell(
                    len_text,
                    0,
                    row_selected && col == AccountColumn::DataLen,
                    len_editing,
                    theme,
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for AccountsView {
    fn default() -> Self {
        Self::new()
    }
}
