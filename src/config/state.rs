// src/config/state.rs
use super::options::Settings;
use crate::skills::SkillKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Overview,
    Distribution,
    Salary,
    Skills,
    Companies,
    RawData,
}

/// The three stage CSVs the Raw Data page can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dataset {
    Processed,
    #[default]
    Filtered,
    Analyst,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::Processed, Dataset::Filtered, Dataset::Analyst];

    pub fn label(self) -> &'static str {
        match self {
            Dataset::Processed => "All processed",
            Dataset::Filtered => "Data-related",
            Dataset::Analyst => "Analyst",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active page index into router::PAGES
    pub current_page_index: usize,

    pub window_w: u32,
    pub window_h: u32,

    /// Salary page slider, millions VND. `None` until data is loaded.
    pub salary_range: Option<(f64, f64)>,

    pub skill_kind: SkillKind,
    /// Count once per posting instead of once per mention.
    pub skills_per_posting: bool,

    pub selected_company: Option<String>,

    pub raw_dataset: Dataset,
    pub raw_search: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            window_w: 1200,
            window_h: 780,
            salary_range: None,
            skill_kind: SkillKind::Hard,
            skills_per_posting: false,
            selected_company: None,
            raw_dataset: Dataset::default(),
            raw_search: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub settings: Settings,
    pub gui: GuiState,
}
