// src/gui/components/nav_panel.rs
//
// Left page list. Switching pages only changes the index; pages read their
// data fresh every frame.

use eframe::egui;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(6.0);
    ui.heading("Job Market");
    ui.weak("CareerViet data jobs");
    ui.separator();

    let cur = app.current_index();
    for (idx, page) in router::all_pages().iter().enumerate() {
        let selected = idx == cur;
        if ui.selectable_label(selected, page.title()).clicked() && !selected {
            logf!("UI: Page switch {:?} → {:?}", app.current_page_kind(), page.kind());
            app.set_current_index(idx);
        }
    }

    ui.separator();
    let d = &app.data;
    egui::Grid::new("nav_counts").num_columns(2).show(ui, |ui| {
        for (label, n) in [
            ("Processed", d.processed.len()),
            ("Data-related", d.filtered.len()),
            ("Analyst", d.analyst.len()),
            ("Tagged", d.tagged.len()),
        ] {
            ui.weak(label);
            ui.label(n.to_string());
            ui.end_row();
        }
    });
}
