// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod posting;
pub mod specs;

pub mod analysis;
pub mod chart;
pub mod clean;
pub mod gui;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod skills;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
