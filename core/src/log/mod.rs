//! Logging bootstrap for the manga reader.
//!
//! Wires `tracing-subscriber` together with an `EnvFilter` and a single formatted sink. The sink
//! writer is pluggable: headless callers log to stderr, while the browser binding hands in a
//! writer that forwards lines to the developer console. `init` is safe to call multiple
//! times; subsequent calls return the handle installed by the first one.

use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

const DEFAULT_ENV_FILTER_VARS: [&str; 2] = ["MANGA_READER_LOG", "RUST_LOG"];

/// Global log handle stored after the first successful initialisation.
static LOG_HANDLE: OnceLock<LogHandle> = OnceLock::new();

/// Re-export of the level filter type to avoid leaking `tracing-subscriber` to callers.
pub use tracing_subscriber::filter::LevelFilter as LogLevel;

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum level emitted to the sink.
    pub level: LogLevel,
    /// Optional filter directive (e.g. `manga_core=debug`). Falls back to the environment.
    pub env_filter: Option<String>,
    /// Whether to capture `log` crate records and forward them into `tracing`.
    pub capture_log: bool,
    /// Prefix lines with a timestamp. Must be off where the system clock is unavailable.
    pub timestamps: bool,
    /// Emit ANSI colour codes.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        let level = if cfg!(debug_assertions) { LogLevel::DEBUG } else { LogLevel::INFO };
        let env_filter = DEFAULT_ENV_FILTER_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok())
            .filter(|directive| !directive.trim().is_empty());

        Self { level, env_filter, capture_log: true, timestamps: true, ansi: false }
    }
}

impl LogConfig {
    /// Settings for targets without a wall clock or terminal, such as `wasm32` in a browser.
    pub fn browser() -> Self {
        Self { timestamps: false, ansi: false, ..Self::default() }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }
}

/// Handle returned from [`init`] describing the installed subscriber.
#[derive(Debug)]
pub struct LogHandle {
    level: LogLevel,
    directive: String,
}

impl LogHandle {
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The filter directive the subscriber was built with.
    pub fn directive(&self) -> &str {
        &self.directive
    }
}

/// Initialise the global subscriber writing to stderr.
pub fn init(config: LogConfig) -> Result<&'static LogHandle> {
    init_with_writer(config, std::io::stderr)
}

/// Initialise the global subscriber with a custom sink.
///
/// The first invocation wins; later calls ignore their arguments and hand back the first
/// handle.
pub fn init_with_writer<W>(config: LogConfig, writer: W) -> Result<&'static LogHandle>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if let Some(handle) = LOG_HANDLE.get() {
        return Ok(handle);
    }

    let handle = setup(config, writer)?;
    let _ = LOG_HANDLE.set(handle);
    LOG_HANDLE.get().context("log handle missing after initialisation")
}

fn setup<W>(config: LogConfig, writer: W) -> Result<LogHandle>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if config.capture_log {
        install_log_tracer(config.level);
    }

    let directive = resolve_directive(config.env_filter);
    let env_filter = EnvFilter::try_new(&directive).context("parsing env filter directive")?;

    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(config.ansi)
        .with_writer(writer)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = if config.timestamps {
        registry.with(layer.with_filter(config.level)).try_init()
    } else {
        registry.with(layer.without_time().with_filter(config.level)).try_init()
    };
    installed.map_err(|err| anyhow::anyhow!(err))?;

    Ok(LogHandle { level: config.level, directive })
}

fn resolve_directive(explicit: Option<String>) -> String {
    explicit
        .or_else(|| DEFAULT_ENV_FILTER_VARS.iter().find_map(|var| std::env::var(var).ok()))
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| if cfg!(debug_assertions) { "debug" } else { "info" }.to_string())
}

fn install_log_tracer(level: LogLevel) {
    let log_level = match level {
        LogLevel::OFF => log::LevelFilter::Off,
        LogLevel::ERROR => log::LevelFilter::Error,
        LogLevel::WARN => log::LevelFilter::Warn,
        LogLevel::INFO => log::LevelFilter::Info,
        LogLevel::DEBUG => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let _ = tracing_log::LogTracer::builder().with_max_level(log_level).init();
}
