//! Tracing setup for the command-line tools.
//!
//! Logs go to stderr so stdout only carries the run summary. `RUST_LOG`
//! takes precedence over everything else.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Directive from the settings file, e.g. `info` or `mount_fixtures=debug`.
    pub filter: String,
    /// `-v` count.
    pub verbose: u8,
    pub quiet: bool,
    pub log_dir: Option<PathBuf>,
    /// Used to name the log file.
    pub component: &'static str,
}

/// Resolve the filter directive from flags and settings.
pub fn directive(opts: &LogOptions) -> String {
    if opts.quiet {
        return "warn".to_string();
    }
    match opts.verbose {
        0 if !opts.filter.is_empty() => opts.filter.clone(),
        0 => "info".to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. The returned guard must live until the
/// process exits or buffered file output is lost.
pub fn init_logging(opts: &LogOptions) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(directive(opts))?,
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match &opts.log_dir {
        Some(dir) => {
            let (writer, guard) = file_writer(dir, opts.component)?;
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // try_init also bridges `log` records through tracing-log.
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;
    Ok(guard)
}

fn file_writer(dir: &Path, component: &str) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, format!("{}.log", component));
    Ok(tracing_appender::non_blocking(appender))
}
