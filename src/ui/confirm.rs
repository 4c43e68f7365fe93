use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::SignalPrompt;
use crate::ui::centered_rect;
use crate::ui::theme::Theme;

pub fn prompt_text(prompt: &SignalPrompt) -> String {
    format!(
        "Kill PID {} ({}) with {}? (y/N)",
        prompt.target.pid,
        prompt.target.display_name,
        prompt.kind.signal_name()
    )
}

pub fn render(frame: &mut Frame, area: Rect, prompt: &SignalPrompt, theme: &Theme) {
    let width = 64u16.min(area.width.saturating_sub(4));
    let height = 5u16.min(area.height.saturating_sub(2));
    let overlay = centered_rect(width, height, area);

    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.warning))
        .title(Span::styled(
            " Confirm ",
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        ));

    let lines = match &prompt.outcome {
        None => vec![Line::from(format!(" {}", prompt_text(prompt)))],
        Some(outcome) => vec![
            Line::from(Span::styled(
                format!(" {}", outcome.message()),
                Style::default()
                    .fg(theme.outcome_color(outcome.is_success()))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(" Press any key to continue."),
        ],
    };

    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);
    frame.render_widget(Paragraph::new(lines), inner);
}
