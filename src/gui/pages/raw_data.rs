// src/gui/pages/raw_data.rs
use eframe::egui;

use crate::{
    config::state::{
        Dataset,
        PageKind::{self, *},
    },
    gui::components::data_table,
};

use super::{Page, PageCtx};

pub struct RawDataPage;
pub static PAGE: RawDataPage = RawDataPage;

impl Page for RawDataPage {
    fn kind(&self) -> PageKind { RawData }
    fn title(&self) -> &'static str { "Raw Data" }
    fn wants_scroll(&self) -> bool { false }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        ui.horizontal(|ui| {
            for d in Dataset::ALL {
                let n = ctx.data.records(d).len();
                ui.selectable_value(&mut ctx.gui.raw_dataset, d, format!("{} ({n})", d.label()));
            }
            ui.separator();
            ui.label("Search:");
            ui.add(egui::TextEdit::singleline(&mut ctx.gui.raw_search).desired_width(220.0));
            if ui.small_button("✖").on_hover_text("Clear search").clicked() {
                ctx.gui.raw_search.clear();
            }
        });
        ui.separator();

        let table = ctx.data.table(ctx.gui.raw_dataset);
        let rows = table.matching(&ctx.gui.raw_search);
        ui.weak(format!("{} of {} rows", rows.len(), table.nrows()));
        data_table::draw(ui, table, &rows);
    }
}
