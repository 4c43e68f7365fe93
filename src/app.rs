use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::time::Instant;

use crate::action::{Action, Direction};
use crate::config::{Config, RefreshInterval};
use crate::system::collector::Collector;
use crate::system::kill::{KillResult, SignalKind, SignalSender, SysinfoSignaller};
use crate::system::platform::PlatformHost;
use crate::system::process::ProcessSample;
use crate::system::sampler::Sampler;
use crate::system::snapshot::Snapshot;
use crate::table::{SortMode, clamp_selection, scroll_offset, sort_processes};

const STATUS_TTL: Duration = Duration::from_secs(3);

/// A signal waiting for the operator's `y`, or its delivery outcome.
///
/// The target is copied out of the snapshot when the prompt opens, so later
/// refreshes and re-sorts cannot redirect the signal.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalPrompt {
    pub target: ProcessSample,
    pub kind: SignalKind,
    pub outcome: Option<KillResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub target: ProcessSample,
    pub outcome: Option<KillResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Running,
    ConfirmSignal(SignalPrompt),
    DetailView(DetailView),
    Stopped,
}

pub struct App {
    pub mode: Mode,
    pub sort_mode: SortMode,
    /// Position in the sorted view, not a pid.
    pub selected_index: usize,
    pub refresh_interval: RefreshInterval,
    pub scroll_offset: usize,
    pub snapshot: Snapshot,
    /// Last dismissed signal outcome and when it was dismissed, on the
    /// loop's clock.
    pub status_message: Option<(String, Instant)>,
    sampler: Sampler,
    signaller: Box<dyn SignalSender>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let sampler = Sampler::new(Box::new(Collector::new()), Box::new(PlatformHost));
        Self::with_sources(config, sampler, Box::new(SysinfoSignaller::new()))
    }

    pub fn with_sources(config: Config, sampler: Sampler, signaller: Box<dyn SignalSender>) -> Self {
        App {
            mode: Mode::Running,
            sort_mode: config.sort_mode,
            selected_index: 0,
            refresh_interval: config.refresh_interval,
            scroll_offset: 0,
            snapshot: Snapshot::default(),
            status_message: None,
            sampler,
            signaller,
        }
    }

    pub fn is_running(&self) -> bool {
        self.mode != Mode::Stopped
    }

    /// True while a sub-view is waiting on a keypress.
    pub fn is_modal(&self) -> bool {
        matches!(self.mode, Mode::ConfirmSignal(_) | Mode::DetailView(_))
    }

    pub fn refresh_data(&mut self) {
        let snapshot = self.sampler.capture();
        self.replace_snapshot(snapshot);
        self.expire_status();
    }

    /// The status line text while it is still fresh.
    pub fn status_text(&self) -> Option<&str> {
        match &self.status_message {
            Some((message, shown)) if shown.elapsed() < STATUS_TTL => Some(message.as_str()),
            _ => None,
        }
    }

    /// Drops a status message that has outlived its display time. Returns
    /// true when one was dropped, so the caller can redraw.
    pub fn expire_status(&mut self) -> bool {
        if self.status_message.is_some() && self.status_text().is_none() {
            self.status_message = None;
            true
        } else {
            false
        }
    }

    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.selected_index = clamp_selection(self.selected_index, self.snapshot.len());
    }

    pub fn sorted_processes(&self) -> Vec<&ProcessSample> {
        sort_processes(&self.snapshot, self.sort_mode)
    }

    pub fn selected_process(&self) -> Option<&ProcessSample> {
        self.sorted_processes().get(self.selected_index).copied()
    }

    /// Re-clamps the selection and scrolls so it is inside `visible_rows`.
    pub fn sync_viewport(&mut self, visible_rows: usize) {
        let len = self.snapshot.len();
        self.selected_index = clamp_selection(self.selected_index, len);
        self.scroll_offset = scroll_offset(self.scroll_offset, self.selected_index, visible_rows, len);
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match &self.mode {
            Mode::Running => Self::map_key_running(key),
            Mode::ConfirmSignal(prompt) => match prompt.outcome {
                Some(_) => Action::Dismiss,
                None => match key.code {
                    KeyCode::Char('y' | 'Y') => Action::ConfirmSignal,
                    _ => Action::CancelSignal,
                },
            },
            Mode::DetailView(view) => match view.outcome {
                Some(_) => Action::Dismiss,
                None => match key.code {
                    KeyCode::Char('k') => Action::SignalFromDetail(SignalKind::Terminate),
                    KeyCode::Char('K') => Action::SignalFromDetail(SignalKind::Kill),
                    _ => Action::Dismiss,
                },
            },
            Mode::Stopped => Action::None,
        }
    }

    fn map_key_running(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => Action::Navigate(Direction::Up),
            KeyCode::Down => Action::Navigate(Direction::Down),
            KeyCode::Enter => Action::OpenDetail,
            KeyCode::Char('q' | 'Q') => Action::Quit,
            KeyCode::Char('c' | 'C') => Action::SetSort(SortMode::Cpu),
            KeyCode::Char('m' | 'M') => Action::SetSort(SortMode::Memory),
            KeyCode::Char('p' | 'P') => Action::SetSort(SortMode::Pid),
            KeyCode::Char('+') => Action::IncreaseInterval,
            KeyCode::Char('-') => Action::DecreaseInterval,
            KeyCode::Char('k') => Action::RequestSignal(SignalKind::Terminate),
            KeyCode::Char('K') => Action::RequestSignal(SignalKind::Kill),
            _ => Action::None,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                tracing::info!("quit requested");
                self.mode = Mode::Stopped;
            }
            Action::Navigate(direction) => self.navigate(direction),
            Action::SetSort(mode) => {
                // Switching order starts over at the top.
                self.sort_mode = mode;
                self.selected_index = 0;
                self.scroll_offset = 0;
            }
            Action::IncreaseInterval => {
                self.refresh_interval = self.refresh_interval.increased();
            }
            Action::DecreaseInterval => {
                self.refresh_interval = self.refresh_interval.decreased();
            }
            Action::OpenDetail => {
                if let Some(target) = self.selected_process().cloned() {
                    self.mode = Mode::DetailView(DetailView {
                        target,
                        outcome: None,
                    });
                }
            }
            Action::RequestSignal(kind) => {
                if let Some(target) = self.selected_process().cloned() {
                    tracing::debug!(pid = target.pid, signal = kind.signal_name(), "awaiting confirmation");
                    self.mode = Mode::ConfirmSignal(SignalPrompt {
                        target,
                        kind,
                        outcome: None,
                    });
                }
            }
            Action::ConfirmSignal => {
                if let Mode::ConfirmSignal(prompt) = &mut self.mode
                    && prompt.outcome.is_none()
                {
                    prompt.outcome = Some(self.signaller.send(prompt.target.pid, prompt.kind));
                }
            }
            Action::CancelSignal => {
                if matches!(self.mode, Mode::ConfirmSignal(_)) {
                    self.mode = Mode::Running;
                }
            }
            Action::SignalFromDetail(kind) => {
                if let Mode::DetailView(view) = &mut self.mode
                    && view.outcome.is_none()
                {
                    view.outcome = Some(self.signaller.send(view.target.pid, kind));
                }
            }
            Action::Dismiss => self.dismiss(),
            Action::None => {}
        }
    }

    fn navigate(&mut self, direction: Direction) {
        let len = self.snapshot.len();
        self.selected_index = match direction {
            Direction::Up => self.selected_index.saturating_sub(1),
            Direction::Down if self.selected_index + 1 < len => self.selected_index + 1,
            Direction::Down => self.selected_index,
        };
        self.selected_index = clamp_selection(self.selected_index, len);
    }

    fn dismiss(&mut self) {
        let outcome = match &self.mode {
            Mode::ConfirmSignal(prompt) => prompt.outcome.as_ref(),
            Mode::DetailView(view) => view.outcome.as_ref(),
            Mode::Running | Mode::Stopped => return,
        };
        if let Some(result) = outcome {
            self.status_message = Some((result.message(), Instant::now()));
        }
        self.mode = Mode::Running;
    }
}
