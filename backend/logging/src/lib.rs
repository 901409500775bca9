//! Structured logging for cronforge.
//!
//! Console output on stderr plus an optional daily-rolling NDJSON file.

pub mod logger;

pub use logger::{init_logger, LoggerOptions};
