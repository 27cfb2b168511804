//! Storage for log entries (file and in-memory backends).

pub mod logs;
