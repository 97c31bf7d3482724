//! Project sidebar.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::theme::UiTheme;
use crate::kernel::AppState;

pub struct SidebarView {
    area: Option<Rect>,
}

impl SidebarView {
    pub fn new() -> Self {
        Self { area: None }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area
            .map(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
            .unwrap_or(false)
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
            .title(" Projects ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::with_capacity(state.projects.len() + 2);
        if state.projects.is_empty() {
            lines.push(Line::from(Span::styled(
                "no saved projects".to_string(),
                Style::default().fg(theme.muted_fg),
            )));
        }
        for (i, project) in state.projects.iter().enumerate() {
            let active = state.current == Some(i);
            let marker = if active { "* " } else { "  " };
            let style = if focused && i == state.ui.sidebar_selected {
                Style::default()
                    .bg(theme.selected_bg)
                    .fg(theme.selected_fg)
            } else if active {
                Style::default().fg(theme.accent_fg)
            } else {
                Style::default().fg(theme.text_fg)
            };
            lines.push(Line::from(Span::styled(
                format!("{marker}{}", project.name),
                style,
            )));
        }
        lines.push(Line::from(Span::raw("")));
        lines.push(Line::from(Span::styled(
            "^N new  ^O import  ^E export".to_string(),
            Style::default().fg(theme.muted_fg),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for SidebarView {
    fn default() -> Self {
        Self::new()
    }
}
