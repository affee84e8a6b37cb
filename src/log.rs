// src/log.rs
//
// Thin layer over `tracing`. The `logf!`/`logd!`/`loge!`/`logw!` macros keep
// call sites short; `init` picks the sink (stderr for the CLI, an append-only
// file for the GUI).

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt::time::Uptime, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};

pub enum Sink {
    Stderr,
    File,
}

fn filter_for(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::new(format!("job_scrape={level},warn"))
    })
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(sink: Sink, verbosity: u8) {
    let filter = filter_for(verbosity);

    match sink {
        Sink::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_timer(Uptime::default())
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
        Sink::File => {
            let path = Path::new(STORE_DIR).join(LOG_FILE);
            let _ = fs::create_dir_all(STORE_DIR);
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => {
                    let _ = tracing_subscriber::fmt()
                        .with_env_filter(filter)
                        .with_timer(Uptime::default())
                        .with_ansi(false)
                        .with_target(false)
                        .with_writer(Mutex::new(file))
                        .try_init();
                }
                Err(_) => init(Sink::Stderr, verbosity),
            }
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
