use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use console::style;
use serde::{Deserialize, Serialize};

use crate::core::Window;
use crate::error::{Result, RrgcError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain `rm "<path>"` lines and bare path listings
    #[default]
    Human,
    /// One JSON document on stdout
    Json,
}

#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    Error { code: String, message: String },
    Partial { completed: usize, failed: usize },
}

/// Payload of a JSON run report.
#[derive(Debug, Serialize)]
pub struct GcReport<'a> {
    pub windows: &'a [Window],
    pub globs: &'a [String],
    pub dry_run: bool,
    pub keep: &'a [PathBuf],
    pub drop: &'a [PathBuf],
    /// Paths actually removed; empty in dry-run and keep-listing modes.
    pub deleted: Vec<PathBuf>,
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    robot_with_status(RobotStatus::Ok, data)
}

pub fn robot_partial<T: Serialize>(
    data: T,
    completed: usize,
    warnings: Vec<String>,
) -> RobotResponse<T> {
    let mut response = robot_with_status(
        RobotStatus::Partial {
            completed,
            failed: warnings.len(),
        },
        data,
    );
    response.warnings = warnings;
    response
}

pub fn robot_error(
    code: impl Into<String>,
    message: impl Into<String>,
) -> RobotResponse<serde_json::Value> {
    robot_with_status(
        RobotStatus::Error {
            code: code.into(),
            message: message.into(),
        },
        serde_json::Value::Null,
    )
}

fn robot_with_status<T: Serialize>(status: RobotStatus, data: T) -> RobotResponse<T> {
    RobotResponse {
        status,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
        warnings: Vec::new(),
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| RrgcError::Serialization(format!("serialize output: {err}")))?;
    println!("{payload}");
    Ok(())
}

/// The line printed for a path that is (or would be) removed.
#[must_use]
pub fn rm_line(path: &Path) -> String {
    format!("rm {:?}", path.display().to_string())
}

/// Human summary on stderr, kept off stdout so listings stay pipeable.
pub fn emit_summary(kept: usize, dropped: usize, dry_run: bool) {
    let verb = if dry_run { "would delete" } else { "deleted" };
    eprintln!(
        "{}",
        style(format!("kept {kept} file(s), {verb} {dropped} file(s)")).dim()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rm_line_quotes_path() {
        assert_eq!(rm_line(Path::new("logs/a b.log")), "rm \"logs/a b.log\"");
    }

    #[test]
    fn robot_error_serializes_code() {
        let response = robot_error("usage", "no windows");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"]["error"]["code"], "usage");
        assert_eq!(json["data"], serde_json::Value::Null);
        assert!(json.get("warnings").is_none());
    }

    #[test]
    fn output_format_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let parsed: Wrapper = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(parsed.format, OutputFormat::Json);
    }
}
