use super::source::{CpuTicks, HostStatsReader, MemoryPages};

/// Scheduling figures read per process that sysinfo does not expose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchedStats {
    pub thread_count: u32,
    pub nice_value: i32,
}

pub trait PlatformExtensions {
    fn host_cpu_ticks() -> Option<CpuTicks>;
    fn host_memory_pages() -> Option<MemoryPages>;
    fn host_memory_total_kb() -> Option<u64>;
    fn process_sched(pid: u32) -> Option<SchedStats>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;
#[cfg(target_os = "windows")]
use windows as platform_impl;

pub fn host_cpu_ticks() -> Option<CpuTicks> {
    platform_impl::Platform::host_cpu_ticks()
}

pub fn host_memory_pages() -> Option<MemoryPages> {
    platform_impl::Platform::host_memory_pages()
}

pub fn host_memory_total_kb() -> Option<u64> {
    platform_impl::Platform::host_memory_total_kb()
}

pub fn process_sched(pid: u32) -> Option<SchedStats> {
    platform_impl::Platform::process_sched(pid)
}

/// Host counters read straight from the running OS.
#[derive(Debug, Default)]
pub struct PlatformHost;

impl HostStatsReader for PlatformHost {
    fn cpu_ticks(&mut self) -> Option<CpuTicks> {
        host_cpu_ticks()
    }

    fn memory_pages(&mut self) -> Option<MemoryPages> {
        host_memory_pages()
    }

    fn memory_total_kb(&mut self) -> Option<u64> {
        host_memory_total_kb()
    }
}
