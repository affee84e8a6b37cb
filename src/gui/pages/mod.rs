// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::{
    state::{GuiState, PageKind},
    Settings,
};

use super::data::Datasets;

pub mod companies;
pub mod distribution;
pub mod overview;
pub mod raw_data;
pub mod salary;
pub mod skills;

/// What a page may touch while drawing. Data is read-only; only the
/// GUI state (slider positions, selections) is mutable.
pub struct PageCtx<'a> {
    pub gui: &'a mut GuiState,
    pub data: &'a Datasets,
    pub settings: &'a Settings,
}

pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> PageKind;
    fn title(&self) -> &'static str;

    /// One-line caption under the page heading.
    fn caption(&self) -> Option<&'static str> {
        None
    }

    /// Pages that manage their own scrolling (tables) return false.
    fn wants_scroll(&self) -> bool {
        true
    }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut PageCtx);
}

/// Section heading used by every page.
pub fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(10.0);
    ui.label(egui::RichText::new(title).strong().size(15.0));
    ui.add_space(4.0);
}
