//! Glob resolution.
//!
//! Turns glob patterns into timestamped [`FileRecord`]s. Failures are
//! collected across every pattern and path and reported together; a
//! resolution with any failure yields no records at all.

use std::collections::BTreeSet;
use std::fs::File;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::core::FileRecord;
use crate::error::{ResolutionError, ResolveFailure};

/// Source of file records for a set of patterns.
pub trait Resolver {
    fn resolve(&self, patterns: &[String]) -> Result<Vec<FileRecord>, ResolutionError>;
}

/// Resolves patterns against the local filesystem with the `glob` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobResolver;

impl Resolver for GlobResolver {
    fn resolve(&self, patterns: &[String]) -> Result<Vec<FileRecord>, ResolutionError> {
        let paths = expand_patterns(patterns)?;
        tracing::debug!(patterns = patterns.len(), paths = paths.len(), "globs expanded");

        let mut errors = ResolutionError::default();
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            match stat_file(&path) {
                Ok(modified) => files.push(FileRecord { path, modified }),
                Err(failure) => errors.push(failure),
            }
        }

        if errors.is_empty() {
            Ok(files)
        } else {
            Err(errors)
        }
    }
}

/// Expand every pattern, deduplicating on the cleaned path.
fn expand_patterns(patterns: &[String]) -> Result<BTreeSet<PathBuf>, ResolutionError> {
    let mut errors = ResolutionError::default();
    let mut unique = BTreeSet::new();

    for pattern in patterns {
        let entries = match glob::glob(pattern) {
            Ok(entries) => entries,
            Err(source) => {
                errors.push(ResolveFailure::Pattern {
                    pattern: pattern.clone(),
                    source,
                });
                continue;
            }
        };
        for entry in entries {
            match entry {
                Ok(path) => {
                    unique.insert(clean_path(&path));
                }
                Err(source) => errors.push(ResolveFailure::Glob {
                    pattern: pattern.clone(),
                    source,
                }),
            }
        }
    }

    if errors.is_empty() {
        Ok(unique)
    } else {
        Err(errors)
    }
}

fn stat_file(path: &Path) -> Result<DateTime<Utc>, ResolveFailure> {
    let file = File::open(path).map_err(|source| ResolveFailure::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let metadata = file.metadata().map_err(|source| ResolveFailure::Stat {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.is_dir() {
        return Err(ResolveFailure::IsDirectory {
            path: path.to_path_buf(),
        });
    }
    let modified = metadata.modified().map_err(|source| ResolveFailure::Stat {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(DateTime::<Utc>::from(modified))
}

/// Lexically normalize a path: drop `.` segments and fold `name/..` pairs.
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
