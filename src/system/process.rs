/// One process as observed at a single sampling instant.
///
/// `pid` is the only identity a sample carries; PIDs are reused by the OS, so
/// two samples with the same pid from different snapshots may describe
/// different processes.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessSample {
    pub pid: u32,
    /// Resolved user name, or the raw numeric owner id when it cannot be resolved.
    pub owner: String,
    pub display_name: String,
    pub command_path: String,
    pub resident_memory_kb: u64,
    /// Total user + kernel time consumed since the process started.
    pub cumulative_cpu_seconds: f64,
    pub cpu_percent: f64,
    pub thread_count: u32,
    pub nice_value: i32,
}

impl ProcessSample {
    /// The command path, or the display name when no path could be read.
    pub fn command_or_name(&self) -> &str {
        if self.command_path.is_empty() {
            &self.display_name
        } else {
            &self.command_path
        }
    }
}
