use super::process::ProcessSample;

/// Host-wide figures captured alongside the process list.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SystemSample {
    pub cpu_percent_overall: f64,
    pub memory_total_kb: u64,
    pub memory_used_kb: u64,
}

/// A host sample plus every process sample taken in the same capture.
///
/// Snapshots are never mutated after the sampler hands them out; the
/// dashboard swaps in a whole new one each cycle.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub system: SystemSample,
    pub processes: Vec<ProcessSample>,
}

impl Snapshot {
    pub fn new(system: SystemSample, processes: Vec<ProcessSample>) -> Self {
        Self { system, processes }
    }

    pub fn process(&self, pid: u32) -> Option<&ProcessSample> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
