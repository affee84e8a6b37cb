// src/gui/pages/salary.rs
use eframe::egui;

use crate::{
    analysis::{filter_by_salary_range, salary_bounds, salary_by_experience, salary_distribution, salary_heatmap},
    config::state::PageKind::{self, *},
    gui::charts,
};

use super::{section, Page, PageCtx};

pub struct SalaryPage;
pub static PAGE: SalaryPage = SalaryPage;

const BINS: usize = 12;

impl Page for SalaryPage {
    fn kind(&self) -> PageKind { Salary }
    fn title(&self) -> &'static str { "Salary" }
    fn caption(&self) -> Option<&'static str> {
        Some("Salaries in million VND; USD offers are converted at the configured rate")
    }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        let Some((min, max)) = salary_bounds(&ctx.data.filtered) else {
            return charts::no_data(ui);
        };

        // Keep the slider inside the bounds of whatever is loaded now.
        let (mut lo, mut hi) = ctx.gui.salary_range.unwrap_or((min, max));
        lo = lo.clamp(min, max);
        hi = hi.clamp(min, max);

        ui.horizontal(|ui| {
            ui.add(egui::Slider::new(&mut lo, min..=max).step_by(1.0).text("min (M VND)"));
            ui.add(egui::Slider::new(&mut hi, min..=max).step_by(1.0).text("max (M VND)"));
            if ui.button("Reset").clicked() {
                lo = min;
                hi = max;
            }
        });
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        if ctx.gui.salary_range != Some((lo, hi)) {
            logd!("UI: salary range → {lo}..{hi}");
            ctx.gui.salary_range = Some((lo, hi));
        }

        let jobs = filter_by_salary_range(&ctx.data.filtered, lo, hi);
        ui.label(format!("{} of {} data-related postings in range", jobs.len(), ctx.data.filtered.len()));

        section(ui, "Min salary distribution");
        charts::histogram(ui, &salary_distribution(&jobs, BINS), charts::PALETTE[1]);

        section(ui, "Salary by years of experience");
        let points = salary_by_experience(&jobs);
        let ticks: Vec<String> = points.iter().map(|p| format!("{}", p.years)).collect();
        charts::line_chart(
            ui,
            &ticks,
            &[
                ("Min Salary", points.iter().map(|p| p.mean_min).collect()),
                ("Max Salary", points.iter().map(|p| p.mean_max).collect()),
            ],
        );

        section(ui, "Mean min salary by location and minimum experience");
        charts::heatmap(ui, &salary_heatmap(&jobs, ctx.settings.top_n));
    }
}
