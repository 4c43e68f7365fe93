use std::path::PathBuf;

use crate::table::SortMode;

/// Seconds between snapshots, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshInterval(u8);

impl RefreshInterval {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 30;

    /// Clamps any requested value into range.
    pub fn clamped(seconds: i64) -> Self {
        Self(seconds.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn seconds(self) -> u8 {
        self.0
    }

    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_secs(self.0 as u64)
    }

    pub fn increased(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    pub fn decreased(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl Default for RefreshInterval {
    fn default() -> Self {
        Self(2)
    }
}

/// Startup settings, resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub refresh_interval: RefreshInterval,
    pub sort_mode: SortMode,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn new(interval_seconds: Option<i64>, sort: Option<&str>, log_file: Option<PathBuf>) -> Self {
        Config {
            refresh_interval: interval_seconds
                .map(RefreshInterval::clamped)
                .unwrap_or_default(),
            sort_mode: sort.map(SortMode::from_flag).unwrap_or_default(),
            log_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.refresh_interval.seconds(), 2);
        assert_eq!(config.sort_mode, SortMode::Cpu);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn interval_is_clamped_on_both_ends() {
        assert_eq!(RefreshInterval::clamped(0).seconds(), 1);
        assert_eq!(RefreshInterval::clamped(-7).seconds(), 1);
        assert_eq!(RefreshInterval::clamped(99).seconds(), 30);
        assert_eq!(RefreshInterval::clamped(5).seconds(), 5);
    }

    #[test]
    fn fifteen_increases_from_two() {
        let mut interval = RefreshInterval::clamped(2);
        for _ in 0..15 {
            interval = interval.increased();
        }
        assert_eq!(interval.seconds(), 17);
        for _ in 0..15 {
            interval = interval.increased();
        }
        assert_eq!(interval.seconds(), 30);
    }

    #[test]
    fn decrease_stops_at_one() {
        let mut interval = RefreshInterval::clamped(3);
        for _ in 0..10 {
            interval = interval.decreased();
        }
        assert_eq!(interval.seconds(), 1);
    }

    #[test]
    fn config_from_flags() {
        let config = Config::new(Some(0), Some("mem"), None);
        assert_eq!(config.refresh_interval.seconds(), 1);
        assert_eq!(config.sort_mode, SortMode::Memory);

        let config = Config::new(None, Some("bogus"), None);
        assert_eq!(config.refresh_interval.seconds(), 2);
        assert_eq!(config.sort_mode, SortMode::Pid);
    }
}
