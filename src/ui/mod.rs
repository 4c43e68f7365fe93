pub mod confirm;
pub mod detail_panel;
pub mod header;
pub mod process_table;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

use crate::app::{App, Mode};
use crate::ui::process_table::TableView;
use crate::ui::theme::Theme;

/// Rows not available to process lines: title, metrics, status, column
/// header and footer.
pub const FIXED_OVERHEAD: u16 = 5;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let body = chunks[3];
    app.sync_viewport(body.height as usize);

    let theme = Theme::default();

    header::render(
        frame,
        chunks[0],
        app.refresh_interval,
        app.sort_mode,
        &app.snapshot.system,
        &theme,
    );
    statusbar::render_status(
        frame,
        chunks[1],
        app.status_text(),
        &theme,
    );

    let rows = app.sorted_processes();
    process_table::render(
        frame,
        chunks[2],
        body,
        &TableView {
            rows: &rows,
            offset: app.scroll_offset,
            selected: app.selected_index,
        },
        &theme,
    );
    statusbar::render_footer(frame, chunks[4], &theme);

    // Modal windows go last so they sit on top of the table.
    let area = frame.area();
    match &app.mode {
        Mode::ConfirmSignal(prompt) => confirm::render(frame, area, prompt, &theme),
        Mode::DetailView(view) => detail_panel::render(frame, area, view, &theme),
        Mode::Running | Mode::Stopped => {}
    }
}

pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [vert] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [horiz] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(vert);
    horiz
}
