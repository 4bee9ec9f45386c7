//! rrgc - round-robin garbage collection for timestamped files.
//!
//! Files matched by glob patterns are kept or dropped according to a set
//! of retention windows. Each window keeps at most `max_keep` files spaced
//! at least `every` apart, oldest first; a file survives when any window
//! keeps it.
//!
//! ```no_run
//! use rrgc::{compute_gc_list, parse_window, remove_paths};
//!
//! let windows = ["2h,5", "1day,4", "1w,3"]
//!     .iter()
//!     .map(|spec| parse_window(spec))
//!     .collect::<Result<Vec<_>, _>>()?;
//! let globs = vec!["logs/*.log".to_string(), "logs/*.log.gz".to_string()];
//!
//! let list = compute_gc_list(&globs, &windows)?;
//! remove_paths(&list.drop)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod gc;
pub mod resolver;
pub mod test_utils;

pub use crate::core::{FileRecord, GcList, Window, filter_by_window, filter_by_windows, parse_window};
pub use error::{DeletionError, FormatError, ResolutionError, Result, RrgcError};
pub use gc::{compute_gc_list, compute_gc_list_with, remove_paths};
pub use resolver::{GlobResolver, Resolver};
