// src/gui/actions/mod.rs
pub mod pipeline;
pub mod reload;

pub use pipeline::{poll_pipeline, start_pipeline};
pub use reload::reload;
