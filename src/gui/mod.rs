// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod charts;
pub mod components;
pub mod data;
pub mod pages;
pub mod progress;
pub mod router;
pub mod table_model;

pub use app::run;
