use datexpr_core::config::types::ResolvedConfig;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Held while a log file is open; dropping it drains pending lines.
static FILE_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Install the global subscriber.
///
/// Events always go to stderr. With `logging.file` set they are also written
/// to that file, at `logging.file_level` when given. `RUST_LOG` wins over
/// both configured levels.
pub fn init(cfg: &ResolvedConfig) -> io::Result<()> {
    let level = parse_level(&cfg.logging.level).unwrap_or(LevelFilter::WARN);

    let stderr = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(env_filter(level));

    let file = match cfg.logging.file.as_deref() {
        Some(path) => {
            let file_level = cfg
                .logging
                .file_level
                .as_deref()
                .and_then(parse_level)
                .unwrap_or(level);
            let layer = fmt::layer()
                .with_writer(open_log_file(path)?)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter(file_level));
            Some(layer)
        }
        None => None,
    };

    tracing_subscriber::registry().with(stderr).with(file).init();
    Ok(())
}

fn open_log_file(path: &Path) -> io::Result<NonBlocking> {
    let file = File::create(path).map_err(|e| {
        io::Error::new(e.kind(), format!("cannot create log file {}: {e}", path.display()))
    })?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    if let Ok(mut slot) = FILE_GUARD.lock() {
        *slot = Some(guard);
    }
    Ok(writer)
}

fn env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

/// Drain the log file writer. Must run before `process::exit`.
pub fn flush() {
    if let Ok(mut slot) = FILE_GUARD.lock() {
        drop(slot.take());
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    let level = match s.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::OFF,
        "error" => LevelFilter::ERROR,
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "debug" => LevelFilter::DEBUG,
        "trace" => LevelFilter::TRACE,
        _ => return None,
    };
    Some(level)
}
