use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::RefreshInterval;
use crate::system::snapshot::SystemSample;
use crate::table::SortMode;
use crate::ui::theme::Theme;

pub fn title_text(interval: RefreshInterval, sort_mode: SortMode) -> String {
    format!(
        "proctop (press 'q' to quit)  Refresh: {}s  Sort: {}",
        interval.seconds(),
        sort_mode.label()
    )
}

pub fn metrics_text(system: &SystemSample) -> String {
    format!(
        "CPU: {:.2}%   Mem: {} KB total, {} KB used",
        system.cpu_percent_overall, system.memory_total_kb, system.memory_used_kb
    )
}

/// Title line on the first row of `area`, host metrics on the second.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    interval: RefreshInterval,
    sort_mode: SortMode,
    system: &SystemSample,
    theme: &Theme,
) {
    let lines = vec![
        Line::from(Span::styled(title_text(interval, sort_mode), theme.title)),
        Line::from(Span::styled(
            metrics_text(system),
            Style::default().fg(theme.text_primary),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
