use super::{PlatformExtensions, SchedStats};
use crate::system::source::{CpuTicks, MemoryPages};

pub struct Platform;

impl PlatformExtensions for Platform {
    fn host_cpu_ticks() -> Option<CpuTicks> {
        let contents = std::fs::read_to_string("/proc/stat").ok()?;
        parse_cpu_ticks(&contents)
    }

    fn host_memory_pages() -> Option<MemoryPages> {
        let contents = std::fs::read_to_string("/proc/meminfo").ok()?;
        parse_memory_pages(&contents)
    }

    fn host_memory_total_kb() -> Option<u64> {
        let contents = std::fs::read_to_string("/proc/meminfo").ok()?;
        meminfo_kb(&contents, "MemTotal:")
    }

    fn process_sched(pid: u32) -> Option<SchedStats> {
        let path = format!("/proc/{pid}/stat");
        let contents = std::fs::read_to_string(path).ok()?;
        parse_sched_stats(&contents)
    }
}

/// Parses the aggregate `cpu` line: `cpu user nice system idle iowait ...`.
fn parse_cpu_ticks(stat: &str) -> Option<CpuTicks> {
    let line = stat.lines().find(|l| l.starts_with("cpu "))?;
    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map(|v| v.parse().ok())
        .collect::<Option<_>>()?;
    Some(CpuTicks {
        user: *fields.first()?,
        nice: *fields.get(1)?,
        system: *fields.get(2)?,
        idle: *fields.get(3)?,
    })
}

/// meminfo reports KiB, so each KiB is treated as a 1024-byte page.
/// Unevictable memory stands in for wired pages.
fn parse_memory_pages(meminfo: &str) -> Option<MemoryPages> {
    Some(MemoryPages {
        active: meminfo_kb(meminfo, "Active:")?,
        inactive: meminfo_kb(meminfo, "Inactive:")?,
        wired: meminfo_kb(meminfo, "Unevictable:").unwrap_or(0),
        page_size: 1024,
    })
}

fn meminfo_kb(meminfo: &str, key: &str) -> Option<u64> {
    meminfo
        .lines()
        .find_map(|line| line.strip_prefix(key))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|v| v.parse().ok())
}

fn parse_sched_stats(stat: &str) -> Option<SchedStats> {
    // comm field may contain spaces and parens, so find the closing )
    let after_comm = stat.rfind(')')? + 1;
    let fields: Vec<&str> = stat[after_comm..].split_whitespace().collect();
    // Fields after comm: state(0) ppid(1) ... priority(15) nice(16) num_threads(17)
    Some(SchedStats {
        nice_value: fields.get(16)?.parse().ok()?,
        thread_count: fields.get(17)?.parse().ok()?,
    })
}
