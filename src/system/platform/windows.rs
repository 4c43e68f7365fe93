use super::{PlatformExtensions, SchedStats};
use crate::system::source::{CpuTicks, MemoryPages};

pub struct Platform;

#[cfg(target_os = "windows")]
use windows_sys::Win32::{
    Foundation::FILETIME,
    System::SystemInformation::{GlobalMemoryStatusEx, MEMORYSTATUSEX},
    System::Threading::GetSystemTimes,
};

#[cfg(target_os = "windows")]
fn filetime_ticks(ft: &FILETIME) -> u64 {
    ((ft.dwHighDateTime as u64) << 32) | ft.dwLowDateTime as u64
}

#[cfg(target_os = "windows")]
fn memory_status() -> Option<MEMORYSTATUSEX> {
    unsafe {
        let mut status = std::mem::zeroed::<MEMORYSTATUSEX>();
        status.dwLength = std::mem::size_of::<MEMORYSTATUSEX>() as u32;
        if GlobalMemoryStatusEx(&mut status) == 0 {
            None
        } else {
            Some(status)
        }
    }
}

impl PlatformExtensions for Platform {
    #[cfg(target_os = "windows")]
    fn host_cpu_ticks() -> Option<CpuTicks> {
        unsafe {
            let mut idle = std::mem::zeroed::<FILETIME>();
            let mut kernel = std::mem::zeroed::<FILETIME>();
            let mut user = std::mem::zeroed::<FILETIME>();
            if GetSystemTimes(&mut idle, &mut kernel, &mut user) == 0 {
                return None;
            }
            let idle = filetime_ticks(&idle);
            // Kernel time includes idle time.
            let kernel = filetime_ticks(&kernel).saturating_sub(idle);
            Some(CpuTicks {
                user: filetime_ticks(&user),
                system: kernel,
                idle,
                nice: 0,
            })
        }
    }

    #[cfg(not(target_os = "windows"))]
    fn host_cpu_ticks() -> Option<CpuTicks> {
        None
    }

    #[cfg(target_os = "windows")]
    fn host_memory_pages() -> Option<MemoryPages> {
        // No active/inactive split here; everything in use counts as active.
        let status = memory_status()?;
        Some(MemoryPages {
            active: status.ullTotalPhys.saturating_sub(status.ullAvailPhys),
            inactive: 0,
            wired: 0,
            page_size: 1,
        })
    }

    #[cfg(not(target_os = "windows"))]
    fn host_memory_pages() -> Option<MemoryPages> {
        None
    }

    #[cfg(target_os = "windows")]
    fn host_memory_total_kb() -> Option<u64> {
        memory_status().map(|status| status.ullTotalPhys / 1024)
    }

    #[cfg(not(target_os = "windows"))]
    fn host_memory_total_kb() -> Option<u64> {
        None
    }

    fn process_sched(_pid: u32) -> Option<SchedStats> {
        // Thread counts need a toolhelp snapshot and priority classes have no
        // nice equivalent, so both stay at zero.
        Some(SchedStats::default())
    }
}
