//! Tracing subscriber setup for the command line

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "store_version_check=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Log human-readable lines to stderr, keeping stdout for results
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();
}

/// Log JSON lines to a file
///
/// The returned guard flushes pending lines when dropped and must be held
/// until the program exits.
pub fn init_file(path: &Path) -> io::Result<WorkerGuard> {
    let (dir, file_name) = split_log_path(path)?;
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn split_log_path(path: &Path) -> io::Result<(PathBuf, OsString)> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("log path {:?} has no file name", path),
        )
    })?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    Ok((dir.to_path_buf(), file_name.to_os_string()))
}
