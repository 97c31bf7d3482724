//! One-line input prompt, drawn over the status row while open.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::theme::UiTheme;
use crate::kernel::PromptState;

pub fn render(frame: &mut Frame, area: Rect, prompt: &PromptState, theme: &UiTheme) {
    let line = Line::from(vec![
        Span::styled(
            format!("{}: ", prompt.kind.title()),
            Style::default().fg(theme.accent_fg),
        ),
        Span::styled(
            format!("{}_", prompt.buffer),
            Style::default().fg(theme.text_fg),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
