//! File logging via `tracing`.
//!
//! Logs are written to `~/.config/resizr/logs/resizr.<date>.log` with
//! daily rotation. Nothing is written to the terminal: user-facing
//! output stays on stdout/stderr.

use std::fs;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter (e.g. `debug`).
pub const LOG_ENV: &str = "RESIZR_LOG";

const LOG_FILE_PREFIX: &str = "resizr";
const MAX_LOG_FILES: usize = 7;

static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialises the global file logger. Call once at startup.
///
/// Does nothing if the log directory cannot be created or a subscriber
/// is already installed; logging must never stop the tool from working.
pub fn init() {
    let Some(dir) = crate::config::log_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }

    let appender = match RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(&dir)
    {
        Ok(a) => a,
        Err(_) => return,
    };

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = GUARD.set(guard);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init();
}
