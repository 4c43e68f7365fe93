use color_eyre::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::time::Instant;

use crate::app::App;
use crate::event::{Event, InputSource, POLL_SLICE, PollSchedule};
use crate::ui;

/// Drives capture → render → poll until the app stops.
///
/// Each cycle takes one snapshot, draws it, then polls input in
/// [`POLL_SLICE`] steps until the refresh interval is spent. While a
/// confirmation or detail view is open the loop blocks on the next key
/// instead, and the interval clock does not run. A status message that
/// runs out between refreshes is cleared at the end of its poll slice.
pub async fn run<B, I>(terminal: &mut Terminal<B>, app: &mut App, input: &mut I) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    I: InputSource,
{
    while app.is_running() {
        app.refresh_data();
        draw(terminal, app)?;

        // Interval changes made during this cycle apply to the next one.
        let mut schedule = PollSchedule::new(app.refresh_interval.as_duration(), POLL_SLICE);
        while app.is_running() {
            let event = if app.is_modal() {
                Some(input.wait().await?)
            } else {
                let Some(timeout) = schedule.next_timeout() else {
                    break;
                };
                let started = Instant::now();
                let event = input.poll(timeout).await?;
                schedule.advance(started.elapsed());
                event
            };

            match event {
                Some(Event::Key(key)) => {
                    let action = app.map_key(key);
                    app.dispatch(action);
                    if app.is_running() {
                        draw(terminal, app)?;
                    }
                }
                Some(Event::Resize) => draw(terminal, app)?,
                None => {
                    if app.expire_status() {
                        draw(terminal, app)?;
                    }
                }
            }
        }
    }

    Ok(())
}

fn draw<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    terminal.draw(|frame| ui::draw(frame, app))?;
    Ok(())
}
