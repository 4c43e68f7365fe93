use std::io;

use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, Signal, System};

/// Termination request classes the dashboard can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// Graceful request (SIGTERM).
    Terminate,
    /// Forced kill (SIGKILL).
    Kill,
}

impl SignalKind {
    pub fn signal_name(self) -> &'static str {
        match self {
            SignalKind::Terminate => "SIGTERM",
            SignalKind::Kill => "SIGKILL",
        }
    }

    fn to_signal(self) -> Signal {
        match self {
            SignalKind::Terminate => Signal::Term,
            SignalKind::Kill => Signal::Kill,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillResult {
    Success(u32, &'static str),
    Failed(u32, String),
    NotFound(u32),
}

impl KillResult {
    pub fn is_success(&self) -> bool {
        matches!(self, KillResult::Success(..))
    }

    pub fn message(&self) -> String {
        match self {
            KillResult::Success(pid, signal) => format!("Sent {signal} to PID {pid}"),
            KillResult::Failed(_, err) => err.clone(),
            KillResult::NotFound(pid) => format!("Process {pid} not found"),
        }
    }
}

/// Delivers a signal of the given kind to one process.
pub trait SignalSender {
    fn send(&mut self, pid: u32, kind: SignalKind) -> KillResult;
}

pub fn kill_process(sys: &System, pid: u32, kind: SignalKind) -> KillResult {
    match sys.process(Pid::from_u32(pid)) {
        Some(process) => {
            let delivered = process.kill_with(kind.to_signal());
            resolve_delivery(pid, kind, delivered, || process.kill())
        }
        None => KillResult::NotFound(pid),
    }
}

/// Maps the outcome of `kill_with` to a [`KillResult`].
///
/// `None` means the platform cannot send `kind`; `force_kill` is then tried
/// and the result names the signal it actually sends.
fn resolve_delivery(
    pid: u32,
    kind: SignalKind,
    delivered: Option<bool>,
    force_kill: impl FnOnce() -> bool,
) -> KillResult {
    match delivered {
        Some(true) => KillResult::Success(pid, kind.signal_name()),
        Some(false) => KillResult::Failed(pid, failure_message(pid, kind, last_os_error())),
        None => {
            let forced = SignalKind::Kill;
            if force_kill() {
                KillResult::Success(pid, forced.signal_name())
            } else {
                KillResult::Failed(pid, failure_message(pid, forced, last_os_error()))
            }
        }
    }
}

fn failure_message(pid: u32, kind: SignalKind, cause: Option<io::Error>) -> String {
    let signal_name = kind.signal_name();
    match cause {
        Some(err) => format!("Failed to send {signal_name} to PID {pid}: {err}"),
        None => format!("Failed to send {signal_name} to PID {pid}"),
    }
}

/// errno left by the failed kill(2).
#[cfg(unix)]
fn last_os_error() -> Option<io::Error> {
    Some(io::Error::last_os_error())
}

#[cfg(not(unix))]
fn last_os_error() -> Option<io::Error> {
    None
}

/// Signal delivery through sysinfo. Looks the pid up fresh on every call so a
/// process that exited since the last snapshot reports `NotFound`.
pub struct SysinfoSignaller {
    sys: System,
}

impl Default for SysinfoSignaller {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoSignaller {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }
}

impl SignalSender for SysinfoSignaller {
    fn send(&mut self, pid: u32, kind: SignalKind) -> KillResult {
        let pids = [Pid::from_u32(pid)];
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&pids),
            true,
            ProcessRefreshKind::nothing(),
        );
        let result = kill_process(&self.sys, pid, kind);
        match &result {
            KillResult::Success(..) => {
                tracing::info!(pid, signal = kind.signal_name(), "signal delivered");
            }
            other => {
                tracing::warn!(pid, signal = kind.signal_name(), outcome = %other.message(), "signal not delivered");
            }
        }
        result
    }
}
