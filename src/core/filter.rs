//! Window filtering.
//!
//! Each window walks the files from oldest to newest and greedily keeps a
//! file when it is at least `every` after the last file it kept, until it
//! has kept `max_keep` files. The combined decision keeps a file when any
//! window kept it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::window::Window;

/// A resolved file and its modification time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub modified: DateTime<Utc>,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, modified: DateTime<Utc>) -> Self {
        Self {
            path: path.into(),
            modified,
        }
    }
}

/// Paths to keep and paths to drop, each sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GcList {
    pub keep: Vec<PathBuf>,
    pub drop: Vec<PathBuf>,
}

/// Order records oldest first. Equal timestamps fall back to path order so
/// the decision never depends on input order.
pub fn sort_chronologically(files: &mut [FileRecord]) {
    files.sort_by(|a, b| {
        a.modified
            .cmp(&b.modified)
            .then_with(|| a.path.as_os_str().cmp(b.path.as_os_str()))
    });
}

/// Apply a single window to `files`.
#[must_use]
pub fn filter_by_window(files: &[FileRecord], window: &Window) -> GcList {
    let mut sorted = files.to_vec();
    sort_chronologically(&mut sorted);

    let kept = select(&sorted, window);
    let (keep, drop): (Vec<PathBuf>, Vec<PathBuf>) = sorted
        .iter()
        .map(|file| file.path.clone())
        .partition(|path| kept.contains(path.as_path()));
    sorted_list(keep, drop)
}

/// Apply every window to the same file population and keep the union.
#[must_use]
pub fn filter_by_windows(files: &[FileRecord], windows: &[Window]) -> GcList {
    let mut sorted = files.to_vec();
    sort_chronologically(&mut sorted);

    let mut combined: HashSet<&Path> = HashSet::new();
    for window in windows {
        let kept = select(&sorted, window);
        tracing::trace!(window = %window, kept = kept.len(), "window applied");
        combined.extend(kept);
    }

    let (keep, drop): (Vec<PathBuf>, Vec<PathBuf>) = sorted
        .iter()
        .map(|file| file.path.clone())
        .partition(|path| combined.contains(path.as_path()));
    sorted_list(keep, drop)
}

/// Greedy selection over files already sorted oldest first.
fn select<'a>(sorted: &'a [FileRecord], window: &Window) -> HashSet<&'a Path> {
    let mut kept = HashSet::new();
    let mut last_kept: Option<DateTime<Utc>> = None;

    for file in sorted {
        if kept.len() >= window.max_keep {
            break;
        }
        let far_enough = last_kept.is_none_or(|previous| {
            // Sorted ascending, so the delta is never negative.
            let elapsed = (file.modified - previous).to_std().unwrap_or_default();
            elapsed >= window.every
        });
        if far_enough {
            kept.insert(file.path.as_path());
            last_kept = Some(file.modified);
        }
    }
    kept
}

fn sorted_list(mut keep: Vec<PathBuf>, mut drop: Vec<PathBuf>) -> GcList {
    keep.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    drop.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    GcList { keep, drop }
}
