//! `tracing` subscriber setup.
//!
//! Logs go to stderr so they never mix with rendered output on stdout.
//! When file logging is enabled, events are additionally appended to
//! `<cache_dir>/logs/folio.log` through a non-blocking writer.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use super::config::{LogFormat, LoggingConfig};
use super::dirs;
use super::env_var::EnvVars;

const DEFAULT_FILTER: &str = "warn";
const LOG_FILE_NAME: &str = "folio.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Build the level filter from `FOLIO_LOG`, falling back to warnings only.
pub fn build_filter(env: &EnvVars) -> EnvFilter {
    match env.log.as_deref() {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|e| {
            eprintln!(
                "[folio] warning: ignoring invalid {}: {e}",
                EnvVars::log_name()
            );
            EnvFilter::new(DEFAULT_FILTER)
        }),
        None => EnvFilter::new(DEFAULT_FILTER),
    }
}

fn stderr_layer(format: LogFormat) -> BoxedLayer {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    match format {
        LogFormat::Plaintext => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// Install the global subscriber.
///
/// The returned guard must be held until exit; dropping it flushes the file
/// writer. Returns `None` when file logging is disabled or the cache
/// directory cannot be resolved.
pub fn init(config: &LoggingConfig, env: &EnvVars) -> anyhow::Result<Option<WorkerGuard>> {
    let mut layers: Vec<BoxedLayer> = vec![stderr_layer(config.format)];
    let mut guard = None;

    if config.file {
        if let Some(dir) = dirs::log_dir(env) {
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
            let (writer, worker_guard) = tracing_appender::non_blocking(appender);
            layers.push(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .json()
                    .boxed(),
            );
            guard = Some(worker_guard);
        }
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(build_filter(env))
        .try_init()?;

    Ok(guard)
}
