//! `log` backend for the browser console, so the `client` crate's request
//! and refetch logs show up next to the UI's own `gloo-console` output.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let text = line(record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo_console::error!(text),
            Level::Warn => gloo_console::warn!(text),
            Level::Info => gloo_console::info!(text),
            Level::Debug | Level::Trace => gloo_console::debug!(text),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. Debug builds also show per-request lines.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn line(target: &str, message: &str) -> String {
    format!("[{}] {}", target, message)
}
