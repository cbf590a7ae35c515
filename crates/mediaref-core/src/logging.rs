//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! `RUST_LOG` always wins; otherwise the filter is picked from the CLI
//! verbosity (`-v` debug, `-vv` trace for the mediaref crates).

use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::ConfigError;

const LOG_FILE_NAME: &str = "mediaref.log";

/// Default filter directives for a verbosity level.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,mediaref_core=info,mediaref=info",
        1 => "info,mediaref_core=debug,mediaref=debug",
        _ => "info,mediaref_core=trace,mediaref=trace",
    }
}

fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)))
}

/// Writer that is either the log file or stderr (used when the handle clone fails).
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogFile(fs::File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

/// `~/.local/state/mediaref/mediaref.log`, creating the directory if needed.
pub fn log_file_path() -> Result<PathBuf, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mediaref")?;
    Ok(xdg_dirs.place_state_file(LOG_FILE_NAME)?)
}

/// Initialize structured logging to the XDG state log file.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging(verbosity: u8) -> Result<PathBuf, ConfigError> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(BoxMakeWriter::new(LogFile(file)))
        .with_ansi(false)
        .init();

    tracing::debug!("mediaref logging initialized at {}", path.display());
    Ok(path)
}

/// Initialize logging to stderr only. Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
