//! Tracing subscriber setup for the desktop client.
//!
//! Configuration comes from environment variables:
//! - `DEVPOD_LOG_LEVEL`: default filter directive (default `info`;
//!   `RUST_LOG` wins when set)
//! - `DEVPOD_LOG_FORMAT`: `human` or `json`
//! - `DEVPOD_LOG_OUTPUT`: `console`, `file`, or `both`
//! - `DEVPOD_LOG_FILE_PATH`: log file location for file output
//!
//! When the process runs inside the desktop shell (the `DEVPOD_UI`
//! environment variable is present) the format defaults to `json` so the
//! shell can capture structured records from the sidecar.

use std::env;
use std::path::{Path, PathBuf};

use devpod_commands::constants::DEVPOD_UI_ENV_VAR;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{prelude::*, registry, EnvFilter};

const DEFAULT_LOG_FILE: &str = "/tmp/devpod-desktop.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Console,
    File,
    Both,
}

/// Resolved logging settings, separated from subscriber construction so
/// the environment handling stays testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    pub output: LogOutput,
    pub file_path: PathBuf,
}

impl LogSettings {
    pub fn from_env() -> Self {
        let level = env::var("DEVPOD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let inside_shell = env::var_os(DEVPOD_UI_ENV_VAR).is_some();
        let format = match env::var("DEVPOD_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("human") => LogFormat::Human,
            _ if inside_shell => LogFormat::Json,
            _ => LogFormat::Human,
        };

        let output = match env::var("DEVPOD_LOG_OUTPUT").as_deref() {
            Ok("file") => LogOutput::File,
            Ok("both") => LogOutput::Both,
            _ => LogOutput::Console,
        };

        let file_path = env::var("DEVPOD_LOG_FILE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE));

        LogSettings {
            level,
            format,
            output,
            file_path,
        }
    }
}

/// Initializes the global tracing subscriber from [`LogSettings::from_env`].
///
/// Returns the appender guard when file output is active; the caller keeps
/// it alive for the process lifetime or buffered records are lost.
pub fn init_subscriber() -> Option<WorkerGuard> {
    let settings = LogSettings::from_env();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let mut guard = None;
    let file_writer = |guard: &mut Option<WorkerGuard>, path: &Path| {
        let dir = path.parent().unwrap_or_else(|| Path::new("/tmp"));
        let file_name = path.file_name().unwrap_or("devpod-desktop.log".as_ref());
        let appender = tracing_appender::rolling::daily(dir, file_name);
        let (non_blocking, g) = tracing_appender::non_blocking(appender);
        *guard = Some(g);
        non_blocking
    };

    let subscriber = registry().with(env_filter);
    match (settings.output, settings.format) {
        (LogOutput::Console, LogFormat::Json) => {
            subscriber.with(tracing_subscriber::fmt::layer().json()).init();
        }
        (LogOutput::Console, LogFormat::Human) => {
            subscriber.with(tracing_subscriber::fmt::layer().pretty()).init();
        }
        (LogOutput::File, LogFormat::Json) => {
            let writer = file_writer(&mut guard, &settings.file_path);
            subscriber
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
        }
        (LogOutput::File, LogFormat::Human) => {
            let writer = file_writer(&mut guard, &settings.file_path);
            subscriber
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
        }
        (LogOutput::Both, LogFormat::Json) => {
            let writer = file_writer(&mut guard, &settings.file_path);
            subscriber
                .with(tracing_subscriber::fmt::layer().json())
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
        }
        (LogOutput::Both, LogFormat::Human) => {
            let writer = file_writer(&mut guard, &settings.file_path);
            subscriber
                .with(tracing_subscriber::fmt::layer().pretty())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
        }
    }

    guard
}
