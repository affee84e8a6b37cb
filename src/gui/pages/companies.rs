// src/gui/pages/companies.rs
use eframe::egui;

use crate::{
    analysis::{company_profile, top_companies, top_titles},
    config::state::PageKind::{self, *},
    gui::{charts, components::metric},
};

use super::{section, Page, PageCtx};

pub struct CompaniesPage;
pub static PAGE: CompaniesPage = CompaniesPage;

/// Companies offered in the picker.
const PICKER_LIMIT: usize = 50;

impl Page for CompaniesPage {
    fn kind(&self) -> PageKind { Companies }
    fn title(&self) -> &'static str { "Companies" }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        let jobs = &ctx.data.filtered;
        let n = ctx.settings.top_n;

        section(ui, &format!("Top {n} hiring companies"));
        let companies: Vec<(String, f64)> = top_companies(jobs, n)
            .into_iter()
            .map(|c| (c.label, c.count as f64))
            .collect();
        charts::bar_chart(ui, &companies, charts::PALETTE[2]);

        section(ui, &format!("Top {n} job titles"));
        let titles: Vec<(String, f64)> = top_titles(jobs, n)
            .into_iter()
            .map(|c| (c.label, c.count as f64))
            .collect();
        charts::bar_chart(ui, &titles, charts::PALETTE[0]);

        section(ui, "Company profile");
        let choices = top_companies(jobs, PICKER_LIMIT);
        if choices.is_empty() {
            return charts::no_data(ui);
        }
        let selected = ctx.gui.selected_company.clone().unwrap_or_else(|| choices[0].label.clone());
        egui::ComboBox::from_label("Company")
            .selected_text(selected.as_str())
            .width(320.0)
            .show_ui(ui, |ui| {
                for c in &choices {
                    let text = format!("{} ({})", c.label, c.count);
                    ui.selectable_value(&mut ctx.gui.selected_company, Some(c.label.clone()), text);
                }
            });

        let profile = company_profile(jobs, &selected);
        ui.horizontal_wrapped(|ui| {
            metric::draw(ui, "Postings", &profile.postings.to_string());
            metric::draw(ui, "Avg min salary", &metric::millions(profile.avg_min_salary));
            metric::draw(ui, "Avg max salary", &metric::millions(profile.avg_max_salary));
        });
        let titles: Vec<(String, f64)> = profile.titles.into_iter().map(|c| (c.label, c.count as f64)).collect();
        charts::bar_chart(ui, &titles, charts::PALETTE[1]);
    }
}
