use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, Uid, UpdateKind, Users};

use super::platform;
use super::source::{ProcessEnumerator, RawProcess};

/// Process enumeration backed by sysinfo, topped up with the per-pid
/// scheduling figures from [`platform`].
pub struct Collector {
    sys: System,
    users: Users,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        Collector {
            sys: System::new(),
            users: Users::new_with_refreshed_list(),
        }
    }

    fn refresh_kind() -> ProcessRefreshKind {
        ProcessRefreshKind::nothing()
            .with_memory()
            .with_cpu()
            .with_user(UpdateKind::OnlyIfNotSet)
            .with_exe(UpdateKind::OnlyIfNotSet)
    }

    fn owner_name(&self, uid: Option<&Uid>) -> String {
        let Some(uid) = uid else {
            return String::from("?");
        };
        match self.users.get_user_by_id(uid) {
            Some(user) => user.name().to_string(),
            None => raw_owner_id(uid),
        }
    }
}

/// The numeric owner id, for accounts the user database cannot name.
#[cfg(unix)]
fn raw_owner_id(uid: &Uid) -> String {
    (**uid).to_string()
}

#[cfg(not(unix))]
fn raw_owner_id(uid: &Uid) -> String {
    let debug = format!("{uid:?}");
    debug
        .strip_prefix("Uid(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(&debug)
        .to_string()
}

impl ProcessEnumerator for Collector {
    fn enumerate(&mut self) -> Vec<RawProcess> {
        let _span = tracing::debug_span!("collector.enumerate").entered();

        self.sys
            .refresh_processes_specifics(ProcessesToUpdate::All, true, Self::refresh_kind());

        let mut processes = Vec::with_capacity(self.sys.processes().len());
        for (pid, process) in self.sys.processes() {
            let pid_u32 = pid.as_u32();
            if pid_u32 == 0 || process.thread_kind().is_some() {
                continue;
            }
            // Gone since enumeration, or not ours to inspect.
            let Some(sched) = platform::process_sched(pid_u32) else {
                continue;
            };

            let display_name = process.name().to_string_lossy().to_string();
            let command_path = process
                .exe()
                .map(|path| path.to_string_lossy().to_string())
                .unwrap_or_default();

            processes.push(RawProcess {
                pid: pid_u32,
                owner: self.owner_name(process.user_id()),
                display_name,
                command_path,
                resident_memory_kb: process.memory() / 1024,
                cumulative_cpu_seconds: process.accumulated_cpu_time() as f64 / 1000.0,
                thread_count: sched.thread_count,
                nice_value: sched.nice_value,
            });
        }
        processes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_current_process() {
        let mut collector = Collector::new();
        let processes = collector.enumerate();
        let me = std::process::id();
        let own = processes.iter().find(|p| p.pid == me);
        assert!(own.is_some(), "current pid {me} missing from enumeration");
        assert!(own.unwrap().resident_memory_kb > 0);
    }

    #[test]
    #[cfg(unix)]
    fn unnamed_owner_falls_back_to_numeric_uid() {
        let uid = Uid::try_from(4242usize).unwrap();
        assert_eq!(raw_owner_id(&uid), "4242");
    }

    #[test]
    fn enumeration_has_unique_pids() {
        let mut collector = Collector::new();
        let processes = collector.enumerate();
        let mut pids: Vec<u32> = processes.iter().map(|p| p.pid).collect();
        let before = pids.len();
        pids.sort_unstable();
        pids.dedup();
        assert_eq!(pids.len(), before);
    }
}
