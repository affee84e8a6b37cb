// src/gui/actions/reload.rs
use crate::gui::{app::App, data::Datasets};

/// Re-read every stage CSV from disk.
pub fn reload(app: &mut App) {
    app.data = Datasets::load(&app.state.settings.paths());
    // Slider bounds belong to the old data.
    app.state.gui.salary_range = None;
    app.state.gui.selected_company = None;
    if app.data.is_empty() {
        app.status("No local data yet: run the pipeline");
    } else {
        app.status(format!("Loaded {} postings", app.data.processed.len()));
    }
}
