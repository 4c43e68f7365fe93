use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proctop::app::App;
use proctop::config::Config;
use proctop::dashboard;
use proctop::event::{Event, InputSource};
use proctop::system::kill::{KillResult, SignalKind, SignalSender};
use proctop::system::sampler::Sampler;
use proctop::system::source::{CpuTicks, HostStatsReader, MemoryPages, ProcessEnumerator, RawProcess};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use tokio::time::Instant;

/// Counts captures and reports the same two processes every time.
struct CountingProcesses {
    captures: Rc<Cell<usize>>,
}

impl ProcessEnumerator for CountingProcesses {
    fn enumerate(&mut self) -> Vec<RawProcess> {
        self.captures.set(self.captures.get() + 1);
        [41, 42]
            .into_iter()
            .map(|pid| RawProcess {
                pid,
                owner: "tester".to_string(),
                display_name: format!("worker{pid}"),
                command_path: String::new(),
                resident_memory_kb: 10,
                cumulative_cpu_seconds: 0.0,
                thread_count: 1,
                nice_value: 0,
            })
            .collect()
    }
}

struct NoHost;

impl HostStatsReader for NoHost {
    fn cpu_ticks(&mut self) -> Option<CpuTicks> {
        None
    }

    fn memory_pages(&mut self) -> Option<MemoryPages> {
        None
    }

    fn memory_total_kb(&mut self) -> Option<u64> {
        None
    }
}

#[derive(Clone, Default)]
struct RecordingSignaller {
    sent: Rc<RefCell<Vec<(u32, SignalKind)>>>,
}

impl SignalSender for RecordingSignaller {
    fn send(&mut self, pid: u32, kind: SignalKind) -> KillResult {
        self.sent.borrow_mut().push((pid, kind));
        KillResult::Success(pid, kind.signal_name())
    }
}

/// Key presses delivered at fixed offsets from the start of the test.
struct ScriptedInput {
    events: VecDeque<(Instant, Event)>,
}

impl ScriptedInput {
    fn new(script: &[(u64, char)]) -> Self {
        let start = Instant::now();
        let events = script
            .iter()
            .map(|&(at_ms, c)| {
                (
                    start + Duration::from_millis(at_ms),
                    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
                )
            })
            .collect();
        Self { events }
    }
}

impl InputSource for ScriptedInput {
    async fn poll(&mut self, timeout: Duration) -> Result<Option<Event>> {
        let deadline = Instant::now() + timeout;
        match self.events.front() {
            Some(&(due, _)) if due <= deadline => {
                tokio::time::sleep_until(due).await;
                Ok(self.events.pop_front().map(|(_, event)| event))
            }
            _ => {
                tokio::time::sleep(timeout).await;
                Ok(None)
            }
        }
    }

    async fn wait(&mut self) -> Result<Event> {
        let (due, event) = self
            .events
            .pop_front()
            .ok_or_else(|| eyre!("input script exhausted"))?;
        tokio::time::sleep_until(due).await;
        Ok(event)
    }
}

struct Harness {
    app: App,
    captures: Rc<Cell<usize>>,
    signaller: RecordingSignaller,
}

fn harness(interval_seconds: i64) -> Harness {
    let captures = Rc::new(Cell::new(0));
    let signaller = RecordingSignaller::default();
    let sampler = Sampler::new(
        Box::new(CountingProcesses {
            captures: captures.clone(),
        }),
        Box::new(NoHost),
    );
    let config = Config::new(Some(interval_seconds), None, None);
    Harness {
        app: App::with_sources(config, sampler, Box::new(signaller.clone())),
        captures,
        signaller,
    }
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).unwrap()
}

#[tokio::test(start_paused = true)]
async fn quit_is_handled_within_one_poll_slice() {
    let mut h = harness(2);
    let mut input = ScriptedInput::new(&[(250, 'q')]);
    let start = Instant::now();

    dashboard::run(&mut terminal(), &mut h.app, &mut input).await.unwrap();

    assert!(!h.app.is_running());
    assert_eq!(start.elapsed(), Duration::from_millis(250));
    assert_eq!(h.captures.get(), 1);
}

#[tokio::test(start_paused = true)]
async fn snapshot_is_retaken_every_interval() {
    let mut h = harness(1);
    let mut input = ScriptedInput::new(&[(2_500, 'q')]);

    dashboard::run(&mut terminal(), &mut h.app, &mut input).await.unwrap();

    // Captures at 0s, 1s and 2s.
    assert_eq!(h.captures.get(), 3);
}

#[tokio::test(start_paused = true)]
async fn keys_do_not_restart_the_interval() {
    let mut h = harness(1);
    let mut input = ScriptedInput::new(&[(300, 'm'), (600, 'p'), (1_500, 'q')]);

    dashboard::run(&mut terminal(), &mut h.app, &mut input).await.unwrap();

    assert_eq!(h.captures.get(), 2);
    assert_eq!(h.app.sort_mode, proctop::table::SortMode::Pid);
}

#[tokio::test(start_paused = true)]
async fn confirmation_blocks_refresh_until_answered() {
    let mut h = harness(2);
    let mut input = ScriptedInput::new(&[(100, 'k'), (5_000, 'y'), (5_100, ' '), (5_200, 'q')]);

    dashboard::run(&mut terminal(), &mut h.app, &mut input).await.unwrap();

    assert_eq!(*h.signaller.sent.borrow(), vec![(41, SignalKind::Terminate)]);
    assert_eq!(h.captures.get(), 1);
    let (message, _) = h.app.status_message.clone().unwrap();
    assert_eq!(message, "Sent SIGTERM to PID 41");
}

fn status_row(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer.cell((x, 2)).unwrap().symbol().to_string())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn status_line_is_shown_while_fresh() {
    let mut h = harness(2);
    let mut input = ScriptedInput::new(&[(100, 'k'), (200, 'y'), (300, ' '), (3_000, 'q')]);
    let mut term = terminal();

    dashboard::run(&mut term, &mut h.app, &mut input).await.unwrap();

    // Last frame was the refresh at 2.2s, 1.9s after dismissal.
    assert!(status_row(&term).starts_with(" Sent SIGTERM to PID 41"), "{}", status_row(&term));
}

#[tokio::test(start_paused = true)]
async fn status_line_clears_between_refreshes() {
    let mut h = harness(30);
    let mut input = ScriptedInput::new(&[(100, 'k'), (200, 'y'), (300, ' '), (3_600, 'q')]);
    let mut term = terminal();

    dashboard::run(&mut term, &mut h.app, &mut input).await.unwrap();

    // One capture only: the expiry redraw came from the poll loop.
    assert_eq!(h.captures.get(), 1);
    assert!(h.app.status_message.is_none());
    assert!(status_row(&term).trim().is_empty(), "{}", status_row(&term));
}

#[tokio::test(start_paused = true)]
async fn interrupt_quits_from_a_modal() {
    let mut h = harness(2);
    let mut input = ScriptedInput {
        events: VecDeque::from([
            (
                Instant::now() + Duration::from_millis(100),
                Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            ),
            (
                Instant::now() + Duration::from_millis(200),
                Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ),
        ]),
    };

    dashboard::run(&mut terminal(), &mut h.app, &mut input).await.unwrap();

    assert!(!h.app.is_running());
    assert!(h.signaller.sent.borrow().is_empty());
}
