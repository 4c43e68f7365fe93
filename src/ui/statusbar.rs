use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::theme::Theme;

const KEY_HINTS: [(&str, &str); 8] = [
    ("\u{2191}/\u{2193}", "Select"),
    ("Enter", "Details"),
    ("c", "CPU"),
    ("m", "Mem"),
    ("p", "PID"),
    ("k/K", "Kill"),
    ("+/-", "Speed"),
    ("q", "Quit"),
];

/// Key binding hints for the bottom row.
pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let spans: Vec<Span> = KEY_HINTS
        .iter()
        .flat_map(|(key, desc)| pill_spans(key, desc, theme))
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Last signal outcome, shown for a few seconds after its window closes.
pub fn render_status(frame: &mut Frame, area: Rect, message: Option<&str>, theme: &Theme) {
    let Some(msg) = message else {
        return;
    };
    let color = theme.outcome_color(msg.starts_with("Sent"));
    let line = Line::from(Span::styled(
        format!(" {msg}"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn pill_spans<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::raw(" "),
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(theme.pill_key_fg)
                .bg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {desc}"), Style::default().fg(theme.pill_desc_fg)),
    ]
}
