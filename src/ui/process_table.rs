use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::format::{fit_width, format_cpu_time, truncate_unicode};
use crate::system::process::ProcessSample;
use crate::ui::theme::Theme;

/// Columns left of COMMAND: `No.`, PID, USER, CPU%, TIME+, MEM(KB) and the
/// single-space separators after each.
pub const PREFIX_WIDTH: usize = 4 + 1 + 6 + 1 + 8 + 1 + 7 + 1 + 8 + 1 + 8 + 1;

pub fn column_header() -> String {
    format!(
        "{:>4} {:>6} {:<8} {:>7} {:>8} {:>8} {}",
        "No.", "PID", "USER", "CPU%", "TIME+", "MEM(KB)", "COMMAND"
    )
}

/// One table line; `number` is the 1-based position in the sorted view.
/// The name is cut with an ellipsis to whatever `width` leaves it.
pub fn format_row(number: usize, process: &ProcessSample, width: usize) -> String {
    let name_budget = width.saturating_sub(PREFIX_WIDTH);
    format!(
        "{:>4} {:>6} {} {:>7.2} {:>8} {:>8} {}",
        number,
        process.pid,
        fit_width(&process.owner, 8),
        process.cpu_percent,
        format_cpu_time(process.cumulative_cpu_seconds),
        process.resident_memory_kb,
        truncate_unicode(&process.display_name, name_budget),
    )
}

pub struct TableView<'a> {
    pub rows: &'a [&'a ProcessSample],
    pub offset: usize,
    pub selected: usize,
}

/// Column header in `header_area`, the visible window of rows in
/// `body_area`. Body rows with no process are blanked.
pub fn render(
    frame: &mut Frame,
    header_area: Rect,
    body_area: Rect,
    view: &TableView<'_>,
    theme: &Theme,
) {
    let width = header_area.width as usize;
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            truncate_unicode(&column_header(), width),
            theme.column_header,
        ))),
        header_area,
    );

    frame.render_widget(Clear, body_area);

    let visible = body_area.height as usize;
    let width = body_area.width as usize;
    let lines: Vec<Line> = (0..visible)
        .map(|slot| {
            let index = view.offset + slot;
            match view.rows.get(index) {
                Some(process) => {
                    let text = fit_width(&format_row(index + 1, process, width), width);
                    let style = if index == view.selected {
                        theme.selected_row
                    } else {
                        Style::default().fg(theme.text_primary)
                    };
                    Line::from(Span::styled(text, style))
                }
                None => Line::from(" ".repeat(width)),
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), body_area);
}
