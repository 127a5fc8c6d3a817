//! Structured JSONL logging plus human-readable stderr output.
//!
//! Dual-output logging:
//! - **JSONL to file** (~/.stickypad/logs/stickypad.jsonl) - structured for tooling
//! - **Pretty to stderr** - human-readable for developers
//!
//! # Usage
//!
//! ```rust,ignore
//! use stickypad::logging;
//!
//! // Initialize logging - MUST keep guard alive for duration of program
//! let _guard = logging::init();
//!
//! // Use tracing macros directly
//! tracing::info!(event_type = "app_start", "Application started");
//! ```

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the dual-output logging system.
///
/// Returns a guard that MUST be kept alive for the duration of the
/// program. Dropping the guard flushes remaining logs and closes the
/// file.
pub fn init() -> LoggingGuard {
    let log_dir = get_log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }

    let log_path = log_dir.join("stickypad.jsonl");

    // Open log file with append mode; a failed open degrades to a
    // sink so the app still runs with stderr logging only.
    let file_writer: Box<dyn Write + Send> = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => Box::new(file),
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file: {}", e);
            Box::new(std::io::sink())
        }
    };

    // Non-blocking writer for the file (keeps the UI thread free)
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_writer);

    // Environment filter - default to info, allow override via RUST_LOG
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // JSONL layer for file output
    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE);

    // Pretty layer for stderr
    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Application logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Get the log directory path (~/.stickypad/logs/)
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".stickypad").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("stickypad-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join("stickypad.jsonl")
}
