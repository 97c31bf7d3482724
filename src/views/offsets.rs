//! Offsets output panel: notation tabs plus the rendered constant list.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::theme::UiTheme;
use crate::kernel::{compute_layout, render_entry, AppState, Notation};

pub struct OffsetsView {
    area: Option<Rect>,
}

impl OffsetsView {
    pub fn new() -> Self {
        Self { area: None }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area
            .map(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
            .unwrap_or(false)
    }

    pub fn render_tabs(&self, frame: &mut Frame, area: Rect, notation: Notation, theme: &UiTheme) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, tab) in Notation::TABS.iter().enumerate() {
            let style = if *tab == notation {
                Style::default()
                    .bg(theme.tab_active_bg)
                    .fg(theme.tab_active_fg)
            } else {
                Style::default().fg(theme.tab_inactive_fg)
            };
            spans.push(Span::styled(format!(" {} [{}] ", tab.label(), i + 1), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, theme: &UiTheme) {
        self.area = Some(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.inactive_border))
            .title(" Offsets ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Regenerated in full on every draw; the engine is cheap and pure.
        let entries = compute_layout(&state.accounts);
        let visible = inner.height as usize;
        let scroll = state
            .ui
            .output_scroll
            .min(entries.len().saturating_sub(visible));

        let lines: Vec<Line> = entries
            .iter()
            .skip(scroll)
            .take(visible)
            .map(|entry| {
                let text = render_entry(&entry.label, entry.offset, state.notation);
                Line::from(Span::styled(text, Style::default().fg(theme.text_fg)))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for OffsetsView {
    fn default() -> Self {
        Self::new()
    }
}
