// src/gui/pages/skills.rs
use eframe::egui;

use crate::{
    config::state::PageKind::{self, *},
    gui::charts,
    skills::{postings_per_skill, SkillKind},
};

use super::{section, Page, PageCtx};

pub struct SkillsPage;
pub static PAGE: SkillsPage = SkillsPage;

impl Page for SkillsPage {
    fn kind(&self) -> PageKind { Skills }
    fn title(&self) -> &'static str { "Skills" }
    fn caption(&self) -> Option<&'static str> {
        Some("Keyword tags found in analyst job requirements")
    }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut PageCtx) {
        ui.horizontal(|ui| {
            for kind in SkillKind::ALL {
                ui.selectable_value(&mut ctx.gui.skill_kind, kind, kind.label());
            }
            ui.separator();
            ui.checkbox(&mut ctx.gui.skills_per_posting, "Count once per posting");
        });

        let kind = ctx.gui.skill_kind;
        let n = ctx.settings.top_skills;
        let bars: Vec<(String, f64)> = if ctx.gui.skills_per_posting {
            postings_per_skill(&ctx.data.tagged, kind)
                .into_iter()
                .take(n)
                .map(|c| (c.skill, c.count as f64))
                .collect()
        } else {
            ctx.data
                .counts(kind)
                .iter()
                .take(n)
                .map(|c| (c.skill.clone(), c.count as f64))
                .collect()
        };

        let tagged = ctx.data.tagged.iter().filter(|t| !kind.tags(t).is_empty()).count();
        ui.label(format!("{} of {} analyst postings mention at least one", tagged, ctx.data.tagged.len()));

        section(ui, &format!("Top {} {}", n, kind.label().to_lowercase()));
        let color = match kind {
            SkillKind::Soft => charts::PALETTE[0],
            SkillKind::Hard => charts::PALETTE[2],
            SkillKind::Domain => charts::PALETTE[3],
        };
        charts::bar_chart(ui, &bars, color);
    }
}
