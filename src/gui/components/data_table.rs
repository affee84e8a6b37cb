// src/gui/components/data_table.rs
//
// Draws a stage CSV as a virtualised table. Purely a view over `TableData`;
// `rows` holds the indices to show, in order.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::table_model::TableData;

const ROW_H: f32 = 20.0;
/// Long text columns are clipped to this many chars in a cell; hover shows all.
const CELL_CHARS: usize = 80;

fn initial_width(header: &str) -> f32 {
    match header {
        "Job Title" | "Company" => 220.0,
        "Job Description" | "Job Requirements" | "Welfare" | "Job Link" => 280.0,
        "Location" | "Salary" | "Industry" => 160.0,
        _ => 100.0,
    }
}

fn is_numeric(header: &str) -> bool {
    matches!(header, "Min_Salary" | "Max_Salary" | "exp_min" | "exp_max")
}

pub fn draw(ui: &mut egui::Ui, table: &TableData, rows: &[usize]) {
    if table.ncols() == 0 {
        ui.weak("No rows loaded.");
        return;
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("raw_table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h)
                .cell_layout(Layout::left_to_right(Align::Center));
            for h in &table.headers {
                builder = builder.column(Column::initial(initial_width(h)).resizable(true).clip(true).at_least(40.0));
            }

            builder
                .header(24.0, |mut header| {
                    for h in &table.headers {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.label(RichText::new(h).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, rows.len(), |mut row| {
                        let Some(data) = rows.get(row.index()).and_then(|&i| table.rows.get(i)) else {
                            return;
                        };
                        for (ci, cell) in data.iter().enumerate() {
                            let numeric = table.headers.get(ci).is_some_and(|h| is_numeric(h));
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                let shown: String = cell.chars().take(CELL_CHARS).collect();
                                let resp = if numeric {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| ui.label(shown)).inner
                                } else {
                                    ui.label(shown)
                                };
                                if cell.chars().count() > CELL_CHARS {
                                    resp.on_hover_text(cell.as_str());
                                }
                            });
                        }
                    });
                });
        });
}
