use std::fs::File;
use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use tempfile::TempDir;

use crate::core::FileRecord;

/// Modification times of the 26 reference files `A` through `Z`.
///
/// Not chronological by letter: `M` and `N` predate `J`, `K` and `L`.
pub const LETTERED_TIMES: [(&str, &str); 26] = [
    ("A", "2006-01-02T15:04:05Z"),
    ("B", "2006-01-02T15:34:05Z"),
    ("C", "2006-01-02T16:03:05Z"),
    ("D", "2006-01-02T16:05:05Z"),
    ("E", "2006-01-02T17:04:05Z"),
    ("F", "2006-01-02T18:04:05Z"),
    ("G", "2006-01-02T19:04:05Z"),
    ("H", "2006-01-02T20:04:05Z"),
    ("I", "2006-01-02T21:04:05Z"),
    ("J", "2006-01-03T18:04:05Z"),
    ("K", "2006-01-03T18:05:05Z"),
    ("L", "2006-01-03T18:06:05Z"),
    ("M", "2006-01-03T17:04:05Z"),
    ("N", "2006-01-03T16:04:05Z"),
    ("O", "2006-01-04T16:04:05Z"),
    ("P", "2006-01-05T16:04:05Z"),
    ("Q", "2006-01-06T16:04:05Z"),
    ("R", "2006-01-07T16:04:05Z"),
    ("S", "2006-01-08T16:04:05Z"),
    ("T", "2006-01-09T16:04:05Z"),
    ("U", "2006-01-10T16:04:05Z"),
    ("V", "2006-01-15T16:04:05Z"),
    ("W", "2006-01-18T16:04:05Z"),
    ("X", "2006-01-20T16:04:05Z"),
    ("Y", "2006-01-25T16:04:05Z"),
    ("Z", "2006-01-30T16:04:05Z"),
];

/// Parse an RFC 3339 timestamp, panicking on bad fixture data.
#[must_use]
pub fn timestamp(input: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(input)
        .expect("valid fixture timestamp")
        .with_timezone(&Utc)
}

/// The reference records, with bare letters as paths.
#[must_use]
pub fn lettered_files() -> Vec<FileRecord> {
    LETTERED_TIMES
        .iter()
        .map(|(path, time)| FileRecord::new(*path, timestamp(time)))
        .collect()
}

/// Test fixture providing isolated filesystem environment.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitTestFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            data_path,
        }
    }

    /// Create a file with content.
    #[must_use]
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a file and backdate its modification time.
    #[must_use]
    pub fn create_file_at(&self, relative_path: &str, modified: DateTime<Utc>) -> PathBuf {
        let full_path = self.create_file(relative_path, relative_path);
        let file = File::options()
            .write(true)
            .open(&full_path)
            .expect("Failed to reopen file");
        file.set_modified(SystemTime::from(modified))
            .expect("Failed to set mtime");
        full_path
    }

    /// Create the 26 reference files under `dir`, named `<letter>.log`.
    #[must_use]
    pub fn create_lettered_files(&self, dir: &str) -> Vec<PathBuf> {
        LETTERED_TIMES
            .iter()
            .map(|(letter, time)| self.create_file_at(&format!("{dir}/{letter}.log"), timestamp(time)))
            .collect()
    }
}
