// src/gui/components/action_bar.rs

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let run = ui
            .add_enabled(!app.running, egui::Button::new("▶ Run pipeline"))
            .on_hover_text("Runs every stage in the background and reloads when done");
        if run.clicked() {
            actions::start_pipeline(app, ui.ctx());
        }

        ui.add_enabled(!app.running, egui::Checkbox::new(&mut app.include_scrape, "Scrape first"))
            .on_hover_text("Off: re-run clean, analyze and visualize on the existing raw CSV");

        if ui.add_enabled(!app.running, egui::Button::new("⟳ Reload")).clicked() {
            actions::reload(app);
        }

        ui.separator();
        if app.running {
            ui.add(Spinner::new());
        }
        ui.label(app.status_text());
    });
}
