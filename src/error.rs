// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("bad pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("bad selector `{0}`")]
    Selector(String),

    #[error("input file not found: {0} (run the previous stage first)")]
    MissingInput(PathBuf),

    #[error("{0}")]
    Usage(String),
}

impl From<figment::Error> for Error {
    fn from(e: figment::Error) -> Self {
        Error::Config(Box::new(e))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
