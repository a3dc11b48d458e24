//! Process-wide logging setup for hosting applications.
//!
//! Library code only emits `tracing` events. A host (the `isolate_post`
//! binary, a web server) calls [`init_logging`] once at startup to route them
//! to a log file and optionally to stderr. Later calls are no-ops.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Error, Result};

/// Log file written when no other path is configured.
pub const DEFAULT_LOG_FILE: &str = "post_server.log";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Configuration passed to [`init_logging`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// File that events are appended to. `None` disables the file sink.
    pub log_file: Option<PathBuf>,
    /// Also write events to stderr.
    pub emit_stderr: bool,
    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            emit_stderr: false,
            default_filter: "debug".to_string(),
        }
    }
}

/// Keeps the non-blocking file writer alive; pending events are flushed when
/// it is dropped.
#[derive(Debug)]
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global `tracing` subscriber.
///
/// The log file is opened before anything is installed, so an unusable path
/// is reported as [`Error::Logging`] on every call. Only the first call that
/// gets past that installs the subscriber; concurrent and later calls return
/// an inert guard.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let (file_layer, guard) = match config.log_file.as_deref() {
        Some(path) => {
            let appender = open_log_file(path)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let stderr_layer = config
        .emit_stderr
        .then(|| fmt::layer().with_writer(std::io::stderr));

    let mut installed = None;
    INITIALISED.get_or_init(|| {
        installed = Some(
            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .with(stderr_layer)
                .try_init(),
        );
    });

    match installed {
        None => Ok(LogGuard { _file: None }),
        Some(Ok(())) => Ok(LogGuard { _file: guard }),
        Some(Err(e)) => Err(Error::Logging(e.to_string())),
    }
}

fn open_log_file(path: &Path) -> Result<RollingFileAppender> {
    let (dir, file_name) = split_log_path(path)?;
    std::fs::create_dir_all(&dir)?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(&dir)
        .map_err(|e| Error::Logging(format!("cannot open log file {}: {e}", path.display())))
}

fn split_log_path(path: &Path) -> Result<(PathBuf, String)> {
    let file_name = path.file_name().ok_or_else(|| {
        Error::Logging(format!("log path {} has no file name", path.display()))
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, file_name.to_string_lossy().into_owned()))
}
