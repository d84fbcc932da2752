//! Tracing setup for the desktop client.
//!
//! Installs a global subscriber writing to stdout and to one log file per launch
//! under `<app dir>/logs`. Older launch logs are pruned to a fixed count.

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::OnceLock,
    time::SystemTime,
};

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs;

/// Maximum number of launch logs kept on disk.
const MAX_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "pcrec";
const DEFAULT_FILTER: &str = "info";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log directory could not be resolved or created.
    #[error("Log directory unavailable: {0}")]
    Directory(#[from] app_dirs::AppDirError),
    /// Failed to enumerate or prune existing log files.
    #[error("Failed to prune logs in {path}: {source}")]
    Prune {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create this launch's log file.
    #[error("Failed to create log file at {path}: {source}")]
    CreateLogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to format the timestamp used in the log file name.
    #[error("Failed to format log filename time: {0}")]
    FormatTime(#[from] time::error::Format),
    /// A global subscriber was already installed by someone else.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize tracing to stdout and a per-launch log file.
///
/// Subsequent calls are no-ops. Errors are returned so the caller can keep
/// running without file logging.
pub fn init() -> Result<(), LoggingError> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    let log_dir = app_dirs::AppDir::Logs.ensure()?;
    let file_name = log_file_name(now_local_or_utc())?;
    let log_path = log_dir.join(&file_name);
    touch(&log_path)?;
    prune_old_logs(&log_dir, MAX_LOG_FILES)?;

    let (file_writer, guard) = tracing_appender::non_blocking(rolling::never(&log_dir, file_name));
    let timer = local_timer();
    let subscriber = Registry::default()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_timer(timer.clone())
                .with_writer(std::io::stdout),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        );
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = LOG_GUARD.set(guard);

    tracing::info!("Logging initialized; log file at {}", log_path.display());
    Ok(())
}

fn touch(path: &Path) -> Result<(), LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
        .map_err(|source| LoggingError::CreateLogFile {
            path: path.to_path_buf(),
            source,
        })
}

fn prune_old_logs(dir: &Path, keep: usize) -> Result<(), LoggingError> {
    let prune_err = |source| LoggingError::Prune {
        path: dir.to_path_buf(),
        source,
    };
    let mut logs: Vec<(SystemTime, PathBuf)> = fs::read_dir(dir)
        .map_err(prune_err)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .map(|path| {
            let modified = fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, path)
        })
        .collect();

    if logs.len() <= keep {
        return Ok(());
    }
    logs.sort_by_key(|(modified, _)| *modified);
    let excess = logs.len() - keep;
    for (_, path) in logs.into_iter().take(excess) {
        fs::remove_file(&path).map_err(prune_err)?;
    }
    Ok(())
}

fn log_file_name(now: OffsetDateTime) -> Result<String, LoggingError> {
    const NAME_FORMAT: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    let stamp = now.format(NAME_FORMAT)?;
    Ok(format!("{LOG_FILE_PREFIX}_{stamp}.log"))
}

fn local_timer() -> fmt::time::OffsetTime<time::format_description::BorrowedFormatItem<'static>> {
    const DISPLAY_FORMAT: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    fmt::time::OffsetTime::new(offset, DISPLAY_FORMAT.into())
}

fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
