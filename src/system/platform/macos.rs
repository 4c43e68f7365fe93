use std::mem;

use libproc::libproc::bsd_info::BSDInfo;
use libproc::libproc::proc_pid::pidinfo;
use libproc::libproc::task_info::TaskInfo;

use super::{PlatformExtensions, SchedStats};
use crate::system::source::{CpuTicks, MemoryPages};

pub struct Platform;

impl PlatformExtensions for Platform {
    #[allow(deprecated)] // libc points mach_host_self at the mach2 crate
    fn host_cpu_ticks() -> Option<CpuTicks> {
        let mut info = unsafe { mem::zeroed::<libc::host_cpu_load_info>() };
        let mut count = libc::HOST_CPU_LOAD_INFO_COUNT;
        let kr = unsafe {
            libc::host_statistics(
                libc::mach_host_self(),
                libc::HOST_CPU_LOAD_INFO,
                &mut info as *mut _ as libc::host_info_t,
                &mut count,
            )
        };
        if kr != libc::KERN_SUCCESS {
            return None;
        }
        let tick = |state: libc::c_int| info.cpu_ticks[state as usize] as u64;
        Some(CpuTicks {
            user: tick(libc::CPU_STATE_USER),
            system: tick(libc::CPU_STATE_SYSTEM),
            idle: tick(libc::CPU_STATE_IDLE),
            nice: tick(libc::CPU_STATE_NICE),
        })
    }

    #[allow(deprecated)]
    fn host_memory_pages() -> Option<MemoryPages> {
        let mut stats = unsafe { mem::zeroed::<libc::vm_statistics64>() };
        let mut count = libc::HOST_VM_INFO64_COUNT;
        let kr = unsafe {
            libc::host_statistics64(
                libc::mach_host_self(),
                libc::HOST_VM_INFO64,
                &mut stats as *mut _ as libc::host_info64_t,
                &mut count,
            )
        };
        if kr != libc::KERN_SUCCESS {
            return None;
        }
        let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        if page_size <= 0 {
            return None;
        }
        Some(MemoryPages {
            active: stats.active_count as u64,
            inactive: stats.inactive_count as u64,
            wired: stats.wire_count as u64,
            page_size: page_size as u64,
        })
    }

    fn host_memory_total_kb() -> Option<u64> {
        let mut bytes: u64 = 0;
        let mut len = mem::size_of::<u64>();
        let rc = unsafe {
            libc::sysctlbyname(
                c"hw.memsize".as_ptr(),
                &mut bytes as *mut u64 as *mut libc::c_void,
                &mut len,
                std::ptr::null_mut(),
                0,
            )
        };
        if rc == 0 { Some(bytes / 1024) } else { None }
    }

    fn process_sched(pid: u32) -> Option<SchedStats> {
        let task = pidinfo::<TaskInfo>(pid as i32, 0).ok()?;
        let bsd = pidinfo::<BSDInfo>(pid as i32, 0).ok()?;
        Some(SchedStats {
            thread_count: task.pti_threadnum.max(0) as u32,
            nice_value: bsd.pbi_nice as i32,
        })
    }
}
