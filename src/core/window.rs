//! Retention windows.
//!
//! A window pairs a minimum spacing between kept files with a cap on how
//! many files it keeps. The textual form is `"<duration>,<max-keep>"`, for
//! example `"1h,5"` or `"1h2m3s,42"`.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use humantime_serde::re::humantime;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// A file preservation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    /// Minimum elapsed time between two consecutive kept files.
    #[serde(with = "humantime_serde")]
    pub every: Duration,
    /// Maximum number of files this window keeps.
    pub max_keep: usize,
}

impl Window {
    #[must_use]
    pub const fn new(every: Duration, max_keep: usize) -> Self {
        Self { every, max_keep }
    }
}

/// Parse a human-readable window definition.
pub fn parse_window(input: &str) -> Result<Window, FormatError> {
    let parts: Vec<&str> = input.split(',').collect();
    let [duration, max_keep] = parts.as_slice() else {
        return Err(FormatError::FieldCount(input.to_string()));
    };

    let every = parse_duration(duration).map_err(|source| FormatError::InvalidDuration {
        value: (*duration).to_string(),
        source,
    })?;

    let count = max_keep
        .parse::<i64>()
        .map_err(|source| FormatError::InvalidMaxKeep {
            value: (*max_keep).to_string(),
            source,
        })?;
    let max_keep = usize::try_from(count).map_err(|_| FormatError::NegativeMaxKeep(count))?;

    Ok(Window { every, max_keep })
}

fn parse_duration(value: &str) -> Result<Duration, humantime::DurationError> {
    if value == "0" {
        return Ok(Duration::ZERO);
    }
    humantime::parse_duration(value)
}

impl FromStr for Window {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_window(s)
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.every.is_zero() {
            write!(f, "0,{}", self.max_keep)
        } else {
            write!(
                f,
                "{},{}",
                humantime::format_duration(self.every).to_string().replace(' ', ""),
                self.max_keep
            )
        }
    }
}
