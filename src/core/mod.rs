//! Retention core: windows and the keep/drop decision.
//!
//! Nothing in here touches the filesystem; records come in, a [`GcList`]
//! comes out.

pub mod filter;
pub mod window;

pub use filter::{FileRecord, GcList, filter_by_window, filter_by_windows, sort_chronologically};
pub use window::{Window, parse_window};
