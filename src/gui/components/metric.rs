// src/gui/components/metric.rs
use eframe::egui::{self, RichText};

/// A framed number with a caption, for the Overview row.
pub fn draw(ui: &mut egui::Ui, label: &str, value: &str) {
    egui::Frame::group(ui.style()).inner_margin(10.0).show(ui, |ui| {
        ui.set_min_width(130.0);
        ui.vertical(|ui| {
            ui.weak(label);
            ui.label(RichText::new(value).size(22.0).strong());
        });
    });
}

pub fn millions(v: Option<f64>) -> String {
    v.map(|m| format!("{m:.1} M")).unwrap_or_else(|| s!("–"))
}
