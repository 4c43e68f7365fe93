use proptest::prelude::*;
use proctop::config::RefreshInterval;
use proctop::system::process::ProcessSample;
use proctop::system::snapshot::{Snapshot, SystemSample};
use proctop::table::{SortMode, clamp_selection, scroll_offset, sort_processes};

fn make_snapshot(rows: &[(u32, f64, u64)]) -> Snapshot {
    let mut seen = std::collections::HashSet::new();
    let processes = rows
        .iter()
        .filter(|(pid, _, _)| seen.insert(*pid))
        .map(|&(pid, cpu, mem)| ProcessSample {
            pid,
            owner: "u".to_string(),
            display_name: format!("p{pid}"),
            command_path: String::new(),
            resident_memory_kb: mem,
            cumulative_cpu_seconds: 0.0,
            cpu_percent: cpu,
            thread_count: 1,
            nice_value: 0,
        })
        .collect();
    Snapshot::new(SystemSample::default(), processes)
}

fn rows_strategy() -> impl Strategy<Value = Vec<(u32, f64, u64)>> {
    prop::collection::vec((1u32..5_000, 0.0f64..400.0, 0u64..10_000), 0..200)
}

proptest! {
    #[test]
    fn cpu_order_is_non_increasing(rows in rows_strategy()) {
        let snapshot = make_snapshot(&rows);
        let sorted = sort_processes(&snapshot, SortMode::Cpu);
        prop_assert_eq!(sorted.len(), snapshot.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].cpu_percent >= pair[1].cpu_percent);
            if pair[0].cpu_percent == pair[1].cpu_percent {
                prop_assert!(pair[0].pid < pair[1].pid);
            }
        }
    }

    #[test]
    fn memory_order_is_non_increasing(rows in rows_strategy()) {
        let snapshot = make_snapshot(&rows);
        let sorted = sort_processes(&snapshot, SortMode::Memory);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].resident_memory_kb >= pair[1].resident_memory_kb);
            if pair[0].resident_memory_kb == pair[1].resident_memory_kb {
                prop_assert!(pair[0].pid < pair[1].pid);
            }
        }
    }

    #[test]
    fn pid_order_is_strictly_increasing(rows in rows_strategy()) {
        let snapshot = make_snapshot(&rows);
        let sorted = sort_processes(&snapshot, SortMode::Pid);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].pid < pair[1].pid);
        }
    }

    #[test]
    fn clamped_selection_is_in_range(selected in 0usize..10_000, len in 0usize..500) {
        let clamped = clamp_selection(selected, len);
        if len == 0 {
            prop_assert_eq!(clamped, 0);
        } else {
            prop_assert!(clamped < len);
            prop_assert!(clamped <= selected);
        }
    }

    #[test]
    fn interval_stays_in_bounds(start in any::<i64>(), steps in prop::collection::vec(any::<bool>(), 0..80)) {
        let mut interval = RefreshInterval::clamped(start);
        prop_assert!((RefreshInterval::MIN..=RefreshInterval::MAX).contains(&interval.seconds()));
        for up in steps {
            interval = if up { interval.increased() } else { interval.decreased() };
            prop_assert!((RefreshInterval::MIN..=RefreshInterval::MAX).contains(&interval.seconds()));
        }
    }

    #[test]
    fn scroll_window_contains_selection(
        current in 0usize..1_000,
        selected in 0usize..1_000,
        visible in 1usize..100,
        len in 1usize..1_000,
    ) {
        let selected = clamp_selection(selected, len);
        let offset = scroll_offset(current, selected, visible, len);
        prop_assert!(offset <= selected);
        prop_assert!(selected < offset + visible);
    }
}
