use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::DetailView;
use crate::format::{format_cpu_time, format_kb};
use crate::ui::centered_rect;
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, view: &DetailView, theme: &Theme) {
    let width = 80u16.min(area.width.saturating_sub(4));
    let height = 12u16.min(area.height.saturating_sub(4));
    let overlay = centered_rect(width, height, area);

    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            format!(" {} ", view.target.display_name),
            Style::default().add_modifier(Modifier::BOLD),
        ));

    let p = &view.target;
    let mut lines = vec![
        Line::from(vec![
            label("PID", theme),
            Span::raw(format!("{}  ", p.pid)),
            label("User", theme),
            Span::raw(p.owner.clone()),
        ]),
        Line::from(vec![label("Command", theme), Span::raw(p.command_or_name().to_string())]),
        Line::from(vec![
            label("CPU", theme),
            Span::raw(format!("{:.2}%  ", p.cpu_percent)),
            label("TIME+", theme),
            Span::raw(format!("{}  ", format_cpu_time(p.cumulative_cpu_seconds))),
            label("Mem", theme),
            Span::raw(format_kb(p.resident_memory_kb)),
        ]),
        Line::from(vec![
            label("Threads", theme),
            Span::raw(format!("{}  ", p.thread_count)),
            label("Nice", theme),
            Span::raw(p.nice_value.to_string()),
        ]),
        Line::default(),
    ];

    match &view.outcome {
        Some(outcome) => {
            lines.push(Line::from(Span::styled(
                format!(" {}", outcome.message()),
                Style::default()
                    .fg(theme.outcome_color(outcome.is_success()))
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(" Press any key to continue."));
        }
        None => lines.push(Line::from(Span::styled(
            " Press any key to close, 'k' to SIGTERM, 'K' to SIGKILL",
            Style::default().fg(theme.text_secondary),
        ))),
    }

    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn label(name: &str, theme: &Theme) -> Span<'static> {
    Span::styled(format!(" {name}: "), theme.label)
}
