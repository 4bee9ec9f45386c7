//! Property test suite entry point.

mod retention_tests;
