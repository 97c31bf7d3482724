//! UI color theme. Fixed palette mirroring the original tool's dark scheme
//! (keyword purple, value amber, muted grays).

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub header_fg: Color,
    pub accent_fg: Color,
    pub text_fg: Color,
    pub muted_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,
    pub tab_inactive_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            inactive_border: Color::DarkGray,
            header_fg: Color::Cyan,
            accent_fg: Color::Yellow,
            text_fg: Color::Gray,
            muted_fg: Color::DarkGray,
            selected_bg: Color::DarkGray,
            selected_fg: Color::White,
            tab_active_bg: Color::DarkGray,
            tab_active_fg: Color::White,
            tab_inactive_fg: Color::DarkGray,
        }
    }
}
