//! Subscriber setup for the swap-names binary.
//!
//! The filter comes from `LogLevel` only; RUST_LOG is not consulted. Events go
//! to stderr so stdout carries just the `ok:`/`info:` result lines. A log file,
//! when configured, gets its own non-blocking layer without ANSI escapes and is
//! skipped (with a warning) if any ancestor of its path is a symlink.

use anyhow::{Context, Result};
use chrono::Local;
use std::fmt as stdfmt;
use std::path::Path;
use swap_names::output as out;
use swap_names::platform::open_log_file_secure_append;
use swap_names::{path_has_symlink_ancestor, LogLevel};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{registry, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Local wall-clock timestamps, `DD/MM/YY HH:MM:SS`.
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%d/%m/%y %H:%M:%S"))
    }
}

#[inline]
fn to_level_filter(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

#[inline]
fn env_filter_from_level(level_filter: LevelFilter) -> EnvFilter {
    EnvFilter::new(level_filter.to_string().to_ascii_lowercase())
}

/// One formatting layer (compact or JSON) writing to `writer`.
fn fmt_layer<W>(json: bool, ansi: bool, writer: W) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if json {
        tsfmt::layer()
            .json()
            .with_timer(LocalHumanTime)
            .with_level(true)
            .with_target(true)
            .with_writer(writer)
            .boxed()
    } else {
        tsfmt::layer()
            .compact()
            .with_timer(LocalHumanTime)
            .with_level(true)
            .with_target(true)
            .with_ansi(ansi)
            .with_writer(writer)
            .boxed()
    }
}

/// Non-blocking writer for `path`, or None after warning the user why not.
fn maybe_open_non_blocking_writer(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    match path_has_symlink_ancestor(path) {
        Ok(true) => {
            out::print_warn(&format!(
                "Refusing to enable file logging: ancestor of {} is a symlink; logging to stderr only.",
                path.display()
            ));
            return None;
        }
        Err(e) => {
            out::print_warn(&format!(
                "Error checking log path {} for symlinks: {}; logging to stderr only.",
                path.display(),
                e
            ));
            return None;
        }
        Ok(false) => {}
    }

    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match open_log_file_secure_append(path) {
        Ok(file) => Some(tracing_appender::non_blocking(file)),
        Err(e) => {
            out::print_warn(&format!(
                "Failed to open log file {}: {}; logging to stderr only.",
                path.display(),
                e
            ));
            None
        }
    }
}

/// Install the global subscriber. The returned guard, present when a log file
/// is in use, must outlive every event or the tail of the file is lost.
pub fn init_tracing(
    lvl: &LogLevel,
    log_file: Option<&Path>,
    json: bool,
) -> Result<Option<WorkerGuard>> {
    let env_filter = env_filter_from_level(to_level_filter(lvl));

    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(json, atty::is(atty::Stream::Stderr), std::io::stderr)];
    let mut guard = None;
    if let Some(path) = log_file
        && let Some((writer, g)) = maybe_open_non_blocking_writer(path)
    {
        layers.push(fmt_layer(json, false, writer));
        guard = Some(g);
    }

    registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .context("install tracing subscriber")?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_mapping() {
        assert_eq!(to_level_filter(&LogLevel::Quiet), LevelFilter::ERROR);
        assert_eq!(to_level_filter(&LogLevel::Normal), LevelFilter::WARN);
        assert_eq!(to_level_filter(&LogLevel::Info), LevelFilter::INFO);
        assert_eq!(to_level_filter(&LogLevel::Debug), LevelFilter::TRACE);
    }
}
