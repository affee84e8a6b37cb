// src/gui/pages/distribution.rs
use eframe::egui;

use crate::{
    analysis::{experience_by_level, jobs_by_date, jobs_by_location, jobs_by_province, FiveNumber},
    config::state::PageKind::{self, *},
    gui::charts,
};

use super::{section, Page, PageCtx};

pub struct DistributionPage;
pub static PAGE: DistributionPage = DistributionPage;

impl Page for DistributionPage {
    fn kind(&self) -> PageKind { Distribution }
    fn title(&self) -> &'static str { "Job Distribution" }
    fn caption(&self) -> Option<&'static str> {
        Some("Where and when data-related jobs are posted")
    }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        let jobs = &ctx.data.filtered;
        let n = ctx.settings.top_n;

        section(ui, &format!("Top {n} locations"));
        let locations: Vec<(String, f64)> = jobs_by_location(jobs)
            .into_iter()
            .take(n)
            .map(|c| (c.label, c.count as f64))
            .collect();
        charts::bar_chart(ui, &locations, charts::PALETTE[0]);

        section(ui, "Jobs by province");
        let provinces: Vec<(String, f64)> = jobs_by_province(jobs)
            .into_iter()
            .take(n)
            .map(|p| (format!("{} ({})", p.province, p.region.label()), p.jobs as f64))
            .collect();
        charts::bar_chart(ui, &provinces, charts::PALETTE[1]);

        section(ui, "Jobs posted by date");
        let by_date = jobs_by_date(jobs);
        let ticks: Vec<String> = by_date.iter().map(|(d, _)| d.format("%d-%b").to_string()).collect();
        charts::line_chart(ui, &ticks, &[("Jobs", by_date.iter().map(|(_, c)| *c as f64).collect())]);

        section(ui, "Experience by job level (years)");
        let spread = experience_by_level(jobs);
        if spread.is_empty() {
            return charts::no_data(ui);
        }
        egui::Grid::new("exp_by_level").striped(true).num_columns(5).show(ui, |ui| {
            for h in ["Job level", "Min: median", "Min: range", "Max: median", "Max: range"] {
                ui.strong(h);
            }
            ui.end_row();
            let median = |f: Option<FiveNumber>| f.map(|b| format!("{:.1}", b.median)).unwrap_or_default();
            let range = |f: Option<FiveNumber>| {
                f.map(|b| format!("{:.1} – {:.1}", b.min, b.max)).unwrap_or_default()
            };
            for row in spread {
                ui.label(if row.level.is_empty() { s!("(blank)") } else { row.level.clone() });
                ui.label(median(row.exp_min));
                ui.label(range(row.exp_min));
                ui.label(median(row.exp_max));
                ui.label(range(row.exp_max));
                ui.end_row();
            }
        });
    }
}
