//! Error types for rrgc.

use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

use humantime_serde::re::humantime::DurationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RrgcError>;

#[derive(Debug, Error)]
pub enum RrgcError {
    #[error("invalid window: {0}")]
    Format(#[from] FormatError),

    #[error("resolve files: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("delete files: {0}")]
    Deletion(#[from] DeletionError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("usage: {0}")]
    Usage(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RrgcError {
    /// Stable machine-readable code, used for JSON error output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Format(_) => "invalid_window",
            Self::Resolution(_) => "resolution_failed",
            Self::Deletion(_) => "deletion_failed",
            Self::Config(_) => "config_error",
            Self::Usage(_) => "usage",
            Self::Serialization(_) => "serialization_error",
            Self::Io(_) => "io_error",
        }
    }
}

/// A window specification that could not be parsed.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid window format: {0:?} (expected \"<duration>,<max-keep>\")")]
    FieldCount(String),

    #[error("invalid window duration value: {value:?}: {source}")]
    InvalidDuration {
        value: String,
        #[source]
        source: DurationError,
    },

    #[error("invalid window max-keep value: {value:?}: {source}")]
    InvalidMaxKeep {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("negative window max-keep: {0}")]
    NegativeMaxKeep(i64),
}

/// One path or pattern that the resolver could not turn into a file record.
#[derive(Debug, Error)]
pub enum ResolveFailure {
    #[error("invalid glob {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("glob {pattern:?}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::GlobError,
    },

    #[error("open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stat {path:?}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("is-dir {path:?}")]
    IsDirectory { path: PathBuf },
}

/// Every failure collected while resolving globs into file records.
#[derive(Debug, Default)]
pub struct ResolutionError {
    pub failures: Vec<ResolveFailure>,
}

impl ResolutionError {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn push(&mut self, failure: ResolveFailure) {
        self.failures.push(failure);
    }
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.failures)
    }
}

impl std::error::Error for ResolutionError {}

/// A single path that could not be removed.
#[derive(Debug, Error)]
#[error("delete {path:?}: {source}")]
pub struct DeleteFailure {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Every failure collected while removing dropped paths.
#[derive(Debug, Default)]
pub struct DeletionError {
    pub failures: Vec<DeleteFailure>,
}

impl DeletionError {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for DeletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.failures)
    }
}

impl std::error::Error for DeletionError {}

fn write_joined<E: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[E]) -> fmt::Result {
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            f.write_str("; ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_error_lists_every_failure() {
        let mut err = ResolutionError::default();
        err.push(ResolveFailure::IsDirectory {
            path: PathBuf::from("logs"),
        });
        err.push(ResolveFailure::Stat {
            path: PathBuf::from("gone.log"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });

        let message = err.to_string();
        assert!(message.contains("is-dir \"logs\""));
        assert!(message.contains("stat \"gone.log\""));
        assert!(message.contains("; "));
    }

    #[test]
    fn codes_are_stable() {
        let err = RrgcError::from(FormatError::NegativeMaxKeep(-1));
        assert_eq!(err.code(), "invalid_window");
        assert_eq!(RrgcError::Usage("x".into()).code(), "usage");
        assert_eq!(
            RrgcError::from(DeletionError::default()).code(),
            "deletion_failed"
        );
    }
}
