//! Ordering and windowing of the process list.
//!
//! Everything here is pure: the sorted view is rebuilt from a whole
//! [`Snapshot`] whenever it is needed and never maintained incrementally.

use std::cmp::Ordering;

use crate::system::process::ProcessSample;
use crate::system::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Cpu,
    Memory,
    Pid,
}

impl SortMode {
    pub fn label(self) -> &'static str {
        match self {
            SortMode::Cpu => "CPU",
            SortMode::Memory => "MEM",
            SortMode::Pid => "PID",
        }
    }

    /// Parses the `-s` flag; anything unrecognized falls back to pid order.
    pub fn from_flag(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "cpu" => SortMode::Cpu,
            "mem" | "memory" => SortMode::Memory,
            _ => SortMode::Pid,
        }
    }

    fn compare(self, a: &ProcessSample, b: &ProcessSample) -> Ordering {
        let primary = match self {
            SortMode::Cpu => b.cpu_percent.total_cmp(&a.cpu_percent),
            SortMode::Memory => b.resident_memory_kb.cmp(&a.resident_memory_kb),
            SortMode::Pid => Ordering::Equal,
        };
        primary.then(a.pid.cmp(&b.pid))
    }
}

/// The snapshot's processes in `mode` order; ties break by ascending pid.
pub fn sort_processes(snapshot: &Snapshot, mode: SortMode) -> Vec<&ProcessSample> {
    let mut rows: Vec<&ProcessSample> = snapshot.processes.iter().collect();
    rows.sort_by(|a, b| mode.compare(a, b));
    rows
}

/// Clamps a selection into `[0, len - 1]`, or 0 for an empty list.
pub fn clamp_selection(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}

/// First visible row so that `selected` stays on screen.
///
/// The window only moves when the selection would leave it: down to
/// `selected - visible + 1` below the fold, up to `selected` above it.
pub fn scroll_offset(current: usize, selected: usize, visible: usize, len: usize) -> usize {
    if visible == 0 || len == 0 {
        return 0;
    }
    let selected = clamp_selection(selected, len);
    let mut offset = current;
    if selected < offset {
        offset = selected;
    } else if selected >= offset + visible {
        offset = selected + 1 - visible;
    }
    // A list that shrank should not leave blank rows under a full window.
    offset.min(len.saturating_sub(visible))
}
