use ratatui::style::{Color, Modifier, Style};

/// Colors used across the dashboard.
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub column_header: Style,
    pub selected_row: Style,
    pub label: Style,
    pub overlay_border: Color,
    pub status_ok: Color,
    pub status_err: Color,
    pub warning: Color,
    pub pill_key_fg: Color,
    pub pill_key_bg: Color,
    pub pill_desc_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            title: Style::default().add_modifier(Modifier::BOLD),
            text_primary: Color::Reset,
            text_secondary: Color::DarkGray,
            column_header: Style::default().fg(Color::Cyan),
            selected_row: Style::default().add_modifier(Modifier::REVERSED),
            label: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            overlay_border: Color::Gray,
            status_ok: Color::Green,
            status_err: Color::Red,
            warning: Color::Yellow,
            pill_key_fg: Color::Black,
            pill_key_bg: Color::Cyan,
            pill_desc_fg: Color::Reset,
        }
    }
}

impl Theme {
    pub fn outcome_color(&self, success: bool) -> Color {
        if success { self.status_ok } else { self.status_err }
    }
}
