use std::collections::{HashMap, HashSet};
use std::time::Instant;

use super::process::ProcessSample;
use super::snapshot::{Snapshot, SystemSample};
use super::source::{CpuTicks, HostStatsReader, ProcessEnumerator, RawProcess};

/// Tick counters remembered from the previous capture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickBaseline {
    pub total: u64,
    pub idle: u64,
}

impl TickBaseline {
    pub fn from_ticks(ticks: &CpuTicks) -> Self {
        Self {
            total: ticks.total(),
            idle: ticks.idle,
        }
    }
}

/// Overall CPU usage between two tick readings.
///
/// Counters that went backwards (wrap or reset) yield 0 rather than a bogus
/// spike.
pub fn overall_cpu_percent(previous: TickBaseline, now: TickBaseline) -> f64 {
    let diff_total = now.total.saturating_sub(previous.total);
    let diff_idle = now.idle.saturating_sub(previous.idle);
    if diff_total == 0 {
        return 0.0;
    }
    let busy = 1.0 - (diff_idle as f64 / diff_total as f64);
    (100.0 * busy).clamp(0.0, 100.0)
}

/// Per-process CPU% from two cumulative CPU-time readings.
///
/// Not capped at 100: a process spread over several cores can exceed it.
pub fn process_cpu_percent(previous_seconds: f64, current_seconds: f64, wall_seconds: f64) -> f64 {
    if wall_seconds <= 0.0 || current_seconds < previous_seconds {
        return 0.0;
    }
    (current_seconds - previous_seconds) / wall_seconds * 100.0
}

/// Produces snapshots and owns the state that turns cumulative counters into
/// rates between successive captures.
pub struct Sampler {
    processes: Box<dyn ProcessEnumerator>,
    host: Box<dyn HostStatsReader>,
    baseline: Option<TickBaseline>,
    memory_total_kb: Option<u64>,
    cpu_times: HashMap<u32, f64>,
    last_capture: Option<Instant>,
}

impl Sampler {
    pub fn new(processes: Box<dyn ProcessEnumerator>, host: Box<dyn HostStatsReader>) -> Self {
        Self {
            processes,
            host,
            baseline: None,
            memory_total_kb: None,
            cpu_times: HashMap::new(),
            last_capture: None,
        }
    }

    /// Starts from a known tick baseline instead of the cold-start zero.
    pub fn with_baseline(mut self, baseline: TickBaseline) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn baseline(&self) -> Option<TickBaseline> {
        self.baseline
    }

    pub fn capture(&mut self) -> Snapshot {
        self.capture_at(Instant::now())
    }

    /// Captures a snapshot as if the wall clock read `now`.
    pub fn capture_at(&mut self, now: Instant) -> Snapshot {
        let _span = tracing::debug_span!("sampler.capture").entered();

        let system = SystemSample {
            cpu_percent_overall: self.sample_overall_cpu(),
            memory_total_kb: self.sample_memory_total(),
            memory_used_kb: self
                .host
                .memory_pages()
                .map(|pages| pages.used_kb())
                .unwrap_or(0),
        };

        let raw = self.processes.enumerate();
        let processes = self.derive_process_rates(raw, now);
        self.last_capture = Some(now);

        tracing::debug!(
            processes = processes.len(),
            cpu = system.cpu_percent_overall,
            memory_used_kb = system.memory_used_kb,
            "captured snapshot"
        );

        Snapshot::new(system, processes)
    }

    fn sample_overall_cpu(&mut self) -> f64 {
        let Some(ticks) = self.host.cpu_ticks() else {
            tracing::debug!("host cpu ticks unavailable this cycle");
            return 0.0;
        };
        let now = TickBaseline::from_ticks(&ticks);
        let percent = match self.baseline {
            Some(previous) => overall_cpu_percent(previous, now),
            None => 0.0,
        };
        self.baseline = Some(now);
        percent
    }

    fn sample_memory_total(&mut self) -> u64 {
        if let Some(total) = self.memory_total_kb {
            return total;
        }
        match self.host.memory_total_kb() {
            Some(total) => {
                self.memory_total_kb = Some(total);
                total
            }
            None => 0,
        }
    }

    fn derive_process_rates(&mut self, raw: Vec<RawProcess>, now: Instant) -> Vec<ProcessSample> {
        let wall_seconds = self
            .last_capture
            .map(|prev| now.saturating_duration_since(prev).as_secs_f64())
            .unwrap_or(0.0);

        let mut seen = HashSet::with_capacity(raw.len());
        let mut samples = Vec::with_capacity(raw.len());
        let mut cpu_times = HashMap::with_capacity(raw.len());

        for process in raw {
            if !seen.insert(process.pid) {
                continue;
            }
            let cpu_percent = match self.cpu_times.get(&process.pid) {
                Some(&previous) => {
                    process_cpu_percent(previous, process.cumulative_cpu_seconds, wall_seconds)
                }
                None => 0.0,
            };
            cpu_times.insert(process.pid, process.cumulative_cpu_seconds);
            samples.push(ProcessSample {
                pid: process.pid,
                owner: process.owner,
                display_name: process.display_name,
                command_path: process.command_path,
                resident_memory_kb: process.resident_memory_kb,
                cumulative_cpu_seconds: process.cumulative_cpu_seconds,
                cpu_percent,
                thread_count: process.thread_count,
                nice_value: process.nice_value,
            });
        }

        // Only pids alive in this capture carry over.
        self.cpu_times = cpu_times;
        samples
    }
}
