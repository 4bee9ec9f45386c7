//! GC list computation and removal of dropped paths.

use std::path::PathBuf;

use crate::core::{GcList, Window, filter_by_windows, sort_chronologically};
use crate::error::{DeleteFailure, DeletionError, Result};
use crate::resolver::{GlobResolver, Resolver};

/// Compute which files matched by `globs` to keep and which to delete.
///
/// Nothing is deleted here; see [`remove_paths`].
pub fn compute_gc_list(globs: &[String], windows: &[Window]) -> Result<GcList> {
    compute_gc_list_with(&GlobResolver, globs, windows)
}

/// Same as [`compute_gc_list`] with an explicit file source.
pub fn compute_gc_list_with<R: Resolver + ?Sized>(
    resolver: &R,
    globs: &[String],
    windows: &[Window],
) -> Result<GcList> {
    let mut files = resolver.resolve(globs)?;
    sort_chronologically(&mut files);

    let list = filter_by_windows(&files, windows);
    tracing::debug!(
        files = files.len(),
        windows = windows.len(),
        keep = list.keep.len(),
        drop = list.drop.len(),
        "gc list computed"
    );
    Ok(list)
}

/// Remove every path, continuing past failures.
pub fn remove_paths(paths: &[PathBuf]) -> std::result::Result<(), DeletionError> {
    let mut errors = DeletionError::default();
    for path in paths {
        if let Err(source) = std::fs::remove_file(path) {
            errors.failures.push(DeleteFailure {
                path: path.clone(),
                source,
            });
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
