//! Invariants of the window filter and the multi-window combiner.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use rrgc::{FileRecord, Window, filter_by_window, filter_by_windows};

// =============================================================================
// Strategies
// =============================================================================

fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_136_214_245 + seconds, 0).unwrap()
}

/// Up to 40 files with unique names; timestamps within ten days, collisions allowed.
fn arb_files() -> impl Strategy<Value = Vec<FileRecord>> {
    prop::collection::vec(0i64..864_000, 0..40).prop_map(|offsets| {
        offsets
            .into_iter()
            .enumerate()
            .map(|(idx, offset)| FileRecord::new(format!("file-{idx:03}.log"), at(offset)))
            .collect()
    })
}

fn arb_window() -> impl Strategy<Value = Window> {
    (0u64..200_000, 0usize..12)
        .prop_map(|(secs, max_keep)| Window::new(Duration::from_secs(secs), max_keep))
}

fn arb_windows() -> impl Strategy<Value = Vec<Window>> {
    prop::collection::vec(arb_window(), 0..5)
}

fn all_paths(files: &[FileRecord]) -> HashSet<PathBuf> {
    files.iter().map(|file| file.path.clone()).collect()
}

fn is_sorted(paths: &[PathBuf]) -> bool {
    paths.windows(2).all(|pair| pair[0].as_os_str() <= pair[1].as_os_str())
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn test_partition_is_complete_and_disjoint(files in arb_files(), windows in arb_windows()) {
        let list = filter_by_windows(&files, &windows);
        let keep: HashSet<PathBuf> = list.keep.iter().cloned().collect();
        let drop: HashSet<PathBuf> = list.drop.iter().cloned().collect();

        prop_assert!(keep.is_disjoint(&drop));
        prop_assert_eq!(keep.len() + drop.len(), files.len());
        let union: HashSet<PathBuf> = keep.union(&drop).cloned().collect();
        prop_assert_eq!(union, all_paths(&files));
        prop_assert!(is_sorted(&list.keep));
        prop_assert!(is_sorted(&list.drop));
    }

    #[test]
    fn test_window_cap_respected(files in arb_files(), window in arb_window()) {
        let list = filter_by_window(&files, &window);
        prop_assert!(list.keep.len() <= window.max_keep);
    }

    #[test]
    fn test_spacing_respected(files in arb_files(), window in arb_window()) {
        let list = filter_by_window(&files, &window);
        let kept: HashSet<&PathBuf> = list.keep.iter().collect();
        let mut times: Vec<DateTime<Utc>> = files
            .iter()
            .filter(|file| kept.contains(&file.path))
            .map(|file| file.modified)
            .collect();
        times.sort();

        for pair in times.windows(2) {
            let gap = (pair[1] - pair[0]).to_std().unwrap();
            prop_assert!(gap >= window.every, "gap {:?} < every {:?}", gap, window.every);
        }
    }

    #[test]
    fn test_union_is_monotonic(files in arb_files(), windows in arb_windows(), extra in arb_window()) {
        let combined = filter_by_windows(&files, &windows);
        let combined_keep: HashSet<&PathBuf> = combined.keep.iter().collect();

        for window in &windows {
            let single = filter_by_window(&files, window);
            for path in &single.keep {
                prop_assert!(combined_keep.contains(path));
            }
        }

        let mut more = windows.clone();
        more.push(extra);
        let widened = filter_by_windows(&files, &more);
        let widened_keep: HashSet<&PathBuf> = widened.keep.iter().collect();
        prop_assert!(combined_keep.is_subset(&widened_keep));
    }

    #[test]
    fn test_decision_ignores_input_order(files in arb_files(), windows in arb_windows()) {
        let first = filter_by_windows(&files, &windows);
        let mut reversed = files.clone();
        reversed.reverse();
        let second = filter_by_windows(&reversed, &windows);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_zero_max_keep_contributes_nothing(files in arb_files(), windows in arb_windows(), every in 0u64..10_000) {
        let base = filter_by_windows(&files, &windows);
        let mut with_zero = windows.clone();
        with_zero.push(Window::new(Duration::from_secs(every), 0));
        prop_assert_eq!(filter_by_windows(&files, &with_zero), base);
    }

    #[test]
    fn test_no_windows_drops_everything(files in arb_files()) {
        let list = filter_by_windows(&files, &[]);
        prop_assert!(list.keep.is_empty());
        prop_assert_eq!(list.drop.len(), files.len());
    }

    #[test]
    fn test_zero_spacing_keeps_earliest(files in arb_files(), max_keep in 0usize..12) {
        let list = filter_by_window(&files, &Window::new(Duration::ZERO, max_keep));
        prop_assert_eq!(list.keep.len(), max_keep.min(files.len()));

        let kept: HashSet<&PathBuf> = list.keep.iter().collect();
        let newest_kept = files.iter().filter(|f| kept.contains(&f.path)).map(|f| f.modified).max();
        let oldest_dropped = files.iter().filter(|f| !kept.contains(&f.path)).map(|f| f.modified).min();
        if let (Some(newest), Some(oldest)) = (newest_kept, oldest_dropped) {
            prop_assert!(newest <= oldest);
        }
    }
}
