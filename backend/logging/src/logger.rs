//! Structured Logger
//!
//! Wraps `tracing` with environment-based level control, a console layer
//! and an optional rolling NDJSON file.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file prefix inside the log directory.
const LOG_FILE_PREFIX: &str = "cronforge.log";

#[derive(Debug, Clone)]
pub struct LoggerOptions {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON on the console instead of human-readable lines.
    pub json: bool,
    /// When set, also write NDJSON to `<dir>/cronforge.log.YYYY-MM-DD`.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            log_dir: None,
        }
    }
}

/// Initialize the global structured logger.
///
/// Stdout is left to command output. A second call is a no-op.
pub fn init_logger(options: &LoggerOptions) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&options.level));

    let json_console = options.json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });

    let plain_console = (!options.json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let file_layer = options.log_dir.as_ref().map(|dir| {
        let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
        fmt::layer()
            .json()
            .with_writer(appender)
            .with_ansi(false)
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_console)
        .with(plain_console)
        .with(file_layer)
        .try_init();
}
