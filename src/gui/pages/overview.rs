// src/gui/pages/overview.rs
use eframe::egui;

use crate::{
    analysis::{jobs_by_region, jobs_by_weekday, overview},
    config::state::PageKind::{self, *},
    gui::{charts, components::metric},
    posting::ExperienceLevel,
};

use super::{section, Page, PageCtx};

pub struct OverviewPage;
pub static PAGE: OverviewPage = OverviewPage;

impl Page for OverviewPage {
    fn kind(&self) -> PageKind { Overview }
    fn title(&self) -> &'static str { "Overview" }
    fn caption(&self) -> Option<&'static str> {
        Some("Headline numbers across the processed, data-related and analyst sets")
    }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        let data = ctx.data;
        if data.is_empty() {
            return charts::no_data(ui);
        }
        let o = overview(&data.processed, &data.filtered, &data.analyst);

        ui.horizontal_wrapped(|ui| {
            metric::draw(ui, "Total jobs", &o.total_jobs.to_string());
            metric::draw(ui, "Data-related", &o.data_jobs.to_string());
            metric::draw(ui, "Analyst", &o.analyst_jobs.to_string());
            metric::draw(ui, "Avg min salary", &metric::millions(o.avg_min_salary));
            metric::draw(ui, "Avg max salary", &metric::millions(o.avg_max_salary));
        });
        ui.horizontal_wrapped(|ui| {
            metric::draw(ui, "Companies", &o.companies.to_string());
            metric::draw(ui, "Locations", &o.locations.to_string());
            metric::draw(ui, "Distinct titles", &o.titles.to_string());
            let exp = o.avg_exp_min.map(|y| format!("{y:.1} yrs")).unwrap_or_else(|| s!("–"));
            metric::draw(ui, "Avg min experience", &exp);
        });

        section(ui, "Data jobs by region");
        let regions: Vec<(String, f64)> = jobs_by_region(&data.filtered)
            .into_iter()
            .map(|(r, n)| (s!(r.label()), n as f64))
            .collect();
        charts::column_chart(ui, &regions, charts::PALETTE[0], 180.0);

        section(ui, "Data jobs by weekday posted");
        let days: Vec<(String, f64)> = jobs_by_weekday(&data.filtered)
            .into_iter()
            .map(|(d, n)| (d.to_string(), n as f64))
            .collect();
        charts::column_chart(ui, &days, charts::PALETTE[1], 180.0);

        section(ui, "Experience level");
        let levels: Vec<(String, f64)> = ExperienceLevel::ALL
            .iter()
            .map(|lvl| {
                let n = data.filtered.iter().filter(|r| r.experience_level == Some(*lvl)).count();
                (s!(lvl.label()), n as f64)
            })
            .collect();
        charts::column_chart(ui, &levels, charts::PALETTE[3], 180.0);
    }
}
