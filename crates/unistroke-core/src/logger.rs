//! Process-wide diagnostics setup for binaries and tests.
//!
//! Library code only talks to the `log` facade. A binary picks one sink at
//! startup: [`init_with_level`] for plain stderr lines, or (feature `tracing`)
//! [`init_tracing`] for a `tracing-subscriber` pipeline with span timings.
//! Both take the same [`LevelFilter`], usually from [`level_from_verbosity`].

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::{
    filter::LevelFilter as TraceLevel, fmt, fmt::format::FmtSpan, util::SubscriberInitExt,
    EnvFilter,
};

/// Writes `[elapsed LEVEL] target: message` lines to stderr.
struct StderrLogger {
    level: LevelFilter,
    started: Instant,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut out = std::io::stderr().lock();
        let _ = writeln!(
            out,
            "[{:7.3}s {:>5}] {}: {}",
            self.started.elapsed().as_secs_f64(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static STDERR_LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger. Later calls keep the first level and succeed.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if STDERR_LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = STDERR_LOGGER.get_or_init(|| StderrLogger {
        level,
        started: Instant::now(),
    });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Map a `-v` count to a level filter (0 = warn, 1 = info, 2 = debug, 3+ = trace).
pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Line format of the `tracing` sink.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceFormat {
    /// Human-readable lines with uptime stamps.
    #[default]
    Text,
    /// One flattened JSON object per event.
    Json,
}

#[cfg(feature = "tracing")]
fn trace_level(level: LevelFilter) -> TraceLevel {
    match level {
        LevelFilter::Off => TraceLevel::OFF,
        LevelFilter::Error => TraceLevel::ERROR,
        LevelFilter::Warn => TraceLevel::WARN,
        LevelFilter::Info => TraceLevel::INFO,
        LevelFilter::Debug => TraceLevel::DEBUG,
        LevelFilter::Trace => TraceLevel::TRACE,
    }
}

/// Filter built from `directives` (usually `RUST_LOG`) on top of `fallback`.
///
/// `fallback` applies to every target the directives do not mention, so an
/// unset or empty `RUST_LOG` leaves exactly the requested level.
#[cfg(feature = "tracing")]
pub fn trace_filter(directives: Option<&str>, fallback: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(trace_level(fallback).into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Install a global `tracing` subscriber at `fallback`, refined by `RUST_LOG`.
///
/// A subscriber that is already installed is left in place.
#[cfg(feature = "tracing")]
pub fn init_tracing(format: TraceFormat, fallback: LevelFilter) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = trace_filter(directives.as_deref(), fallback);
    let builder = fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let _ = match format {
        TraceFormat::Json => builder.json().flatten_event(true).finish().try_init(),
        TraceFormat::Text => builder
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init(),
    };
}
