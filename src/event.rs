use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;

/// Length of one input poll while waiting out the refresh interval.
pub const POLL_SLICE: Duration = Duration::from_millis(100);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Resize,
}

/// Keyboard and terminal events.
#[allow(async_fn_in_trait)]
pub trait InputSource {
    /// Waits at most `timeout` for an event; `None` when it elapsed quietly.
    async fn poll(&mut self, timeout: Duration) -> Result<Option<Event>>;

    /// Waits for the next event with no deadline.
    async fn wait(&mut self) -> Result<Event>;
}

/// Input read from the real terminal through crossterm's event stream.
pub struct CrosstermInput {
    reader: EventStream,
}

impl Default for CrosstermInput {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermInput {
    pub fn new() -> Self {
        Self {
            reader: EventStream::new(),
        }
    }
}

impl InputSource for CrosstermInput {
    async fn poll(&mut self, timeout: Duration) -> Result<Option<Event>> {
        match tokio::time::timeout(timeout, self.wait()).await {
            Ok(event) => event.map(Some),
            Err(_elapsed) => Ok(None),
        }
    }

    async fn wait(&mut self) -> Result<Event> {
        loop {
            let Some(event) = self.reader.next().await else {
                return Err(eyre!("terminal input stream closed"));
            };
            match event? {
                // Windows reports releases too; only presses count.
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Event::Key(key));
                }
                CrosstermEvent::Resize(_, _) => return Ok(Event::Resize),
                _ => {}
            }
        }
    }
}

/// Splits one refresh interval into fixed poll slices and tracks how much
/// of it has been spent.
#[derive(Debug, Clone, Copy)]
pub struct PollSchedule {
    budget: Duration,
    slice: Duration,
    elapsed: Duration,
}

impl PollSchedule {
    pub fn new(budget: Duration, slice: Duration) -> Self {
        Self {
            budget,
            slice,
            elapsed: Duration::ZERO,
        }
    }

    /// Timeout for the next poll, or `None` once the interval is used up.
    pub fn next_timeout(&self) -> Option<Duration> {
        let remaining = self.budget.checked_sub(self.elapsed)?;
        if remaining.is_zero() {
            None
        } else {
            Some(remaining.min(self.slice))
        }
    }

    pub fn advance(&mut self, spent: Duration) {
        self.elapsed = self.elapsed.saturating_add(spent);
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
