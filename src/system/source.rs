//! Collaborator interfaces the sampler reads from.
//!
//! Production implementations live in [`super::collector`] and
//! [`super::platform`]; tests substitute scripted ones.

/// Cumulative host CPU tick counters, summed over all cores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuTicks {
    pub user: u64,
    pub system: u64,
    pub idle: u64,
    pub nice: u64,
}

impl CpuTicks {
    pub fn total(&self) -> u64 {
        self.user
            .saturating_add(self.system)
            .saturating_add(self.idle)
            .saturating_add(self.nice)
    }
}

/// Page counters used to derive resident host memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryPages {
    pub active: u64,
    pub inactive: u64,
    pub wired: u64,
    pub page_size: u64,
}

impl MemoryPages {
    pub fn used_kb(&self) -> u64 {
        let pages = self
            .active
            .saturating_add(self.inactive)
            .saturating_add(self.wired);
        pages.saturating_mul(self.page_size) / 1024
    }
}

/// Per-process counters as read from the OS, before any rate is derived.
#[derive(Clone, Debug, PartialEq)]
pub struct RawProcess {
    pub pid: u32,
    pub owner: String,
    pub display_name: String,
    pub command_path: String,
    pub resident_memory_kb: u64,
    pub cumulative_cpu_seconds: f64,
    pub thread_count: u32,
    pub nice_value: i32,
}

/// Lists the live processes at the moment of the call.
///
/// A process that exits between enumeration and its detail read is left out of
/// the result rather than reported as an error.
pub trait ProcessEnumerator {
    fn enumerate(&mut self) -> Vec<RawProcess>;
}

/// Reads host-wide counters. `None` means the read failed for this cycle.
pub trait HostStatsReader {
    fn cpu_ticks(&mut self) -> Option<CpuTicks>;
    fn memory_pages(&mut self) -> Option<MemoryPages>;
    fn memory_total_kb(&mut self) -> Option<u64>;
}
