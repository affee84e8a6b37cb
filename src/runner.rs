// src/runner.rs
//
// Stage orchestration: scrape → clean → analyze → visualize. A stage reads
// the previous stage's output from memory when that stage ran in the same
// call, otherwise from its CSV on disk.

use std::path::{Path, PathBuf};

use crate::{
    chart::{render_figures, FigureInputs},
    clean::{clean, CleanOptions},
    config::{Overrides, Paths, Settings},
    error::{Error, Result},
    posting::{CleanPosting, JobPosting},
    progress::Progress,
    scrape::collect_postings,
    skills::{skill_counts, SkillCount, SkillKind, SkillTagger, TextColumn},
    store::{load_records, save_records},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stages {
    pub scrape: bool,
    pub clean: bool,
    pub analyze: bool,
    pub visualize: bool,
}

impl Stages {
    pub fn all() -> Self {
        Self { scrape: true, clean: true, analyze: true, visualize: true }
    }

    /// Everything except the network stage.
    pub fn offline() -> Self {
        Self { scrape: false, ..Self::all() }
    }

    pub fn any(&self) -> bool {
        self.scrape || self.clean || self.analyze || self.visualize
    }
}

/// Counts per stage and every file written, in write order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub scraped: usize,
    pub processed: usize,
    pub data_jobs: usize,
    pub analyst_jobs: usize,
    pub tagged: usize,
    pub figures: usize,
    pub files_written: Vec<PathBuf>,
}

/// Outputs kept between stages of one run.
#[derive(Default)]
struct Carry {
    raw: Option<Vec<JobPosting>>,
    data_jobs: Option<Vec<CleanPosting>>,
    analyst_jobs: Option<Vec<CleanPosting>>,
    counts: Option<[Vec<SkillCount>; 3]>,
}

fn status(progress: &mut Option<&mut dyn Progress>, msg: &str) {
    logf!("{msg}");
    if let Some(p) = progress.as_deref_mut() {
        p.log(msg);
    }
}

fn save<T: serde::Serialize>(path: &Path, rows: &[T], summary: &mut RunSummary) -> Result<()> {
    save_records(path, rows)?;
    logd!("Wrote {} rows to {}", rows.len(), path.display());
    summary.files_written.push(path.to_path_buf());
    Ok(())
}

fn skill_path(paths: &Paths, kind: SkillKind) -> &Path {
    match kind {
        SkillKind::Soft => &paths.soft_skills,
        SkillKind::Hard => &paths.hard_skills,
        SkillKind::Domain => &paths.domain_skills,
    }
}

/// Skill counts for charts. A missing file means that chart shows no data.
fn load_counts(paths: &Paths) -> Result<[Vec<SkillCount>; 3]> {
    let mut out: [Vec<SkillCount>; 3] = Default::default();
    for (slot, kind) in out.iter_mut().zip(SkillKind::ALL) {
        match load_records(skill_path(paths, kind)) {
            Ok(rows) => *slot = rows,
            Err(Error::MissingInput(p)) => logw!("Visualize: {} missing, chart left empty", p.display()),
            Err(e) => return Err(e),
        }
    }
    Ok(out)
}

/// Runs the selected stages in order. `overrides.input` replaces the input
/// of the first stage that reads from disk.
pub fn run(
    stages: Stages,
    settings: &Settings,
    overrides: &Overrides,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if !stages.any() {
        return Err(Error::Usage(s!(
            "no stage selected; pass --scrape, --clean, --analyze, --visualize or --all"
        )));
    }

    let mut settings = settings.clone();
    overrides.apply(&mut settings);
    let paths = settings.paths();
    paths.ensure_dirs()?;

    let mut input = overrides.input.clone();
    let mut carry = Carry::default();
    let mut summary = RunSummary::default();

    if stages.scrape {
        status(&mut progress, &format!("Scraping {}", settings.base_url));
        let rows = collect_postings(&settings, progress.as_mut().map(|p| &mut **p as &mut dyn Progress))?;
        let out = overrides.output.clone().unwrap_or_else(|| paths.raw.clone());
        save(&out, &rows, &mut summary)?;
        summary.scraped = rows.len();
        carry.raw = Some(rows);
    }

    if stages.clean {
        let raw = match carry.raw.take() {
            Some(r) => r,
            None => load_records(&input.take().unwrap_or_else(|| paths.raw.clone()))?,
        };
        status(&mut progress, &format!("Cleaning {} postings", raw.len()));
        let report = clean(raw, &CleanOptions::from_settings(&settings));
        save(&paths.processed, &report.processed, &mut summary)?;
        save(&paths.filtered, &report.data_jobs, &mut summary)?;
        save(&paths.analyst, &report.analyst_jobs, &mut summary)?;
        summary.processed = report.processed.len();
        summary.data_jobs = report.data_jobs.len();
        summary.analyst_jobs = report.analyst_jobs.len();
        carry.data_jobs = Some(report.data_jobs);
        carry.analyst_jobs = Some(report.analyst_jobs);
    }

    if stages.analyze {
        let analyst = match carry.analyst_jobs.take() {
            Some(a) => a,
            None => load_records(&input.take().unwrap_or_else(|| paths.analyst.clone()))?,
        };
        status(&mut progress, &format!("Tagging skills in {} postings", analyst.len()));
        let tagger = SkillTagger::new()?;
        let tagged = tagger.tag_all(&analyst, TextColumn::Requirements);
        save(&paths.analyst_skills, &tagged, &mut summary)?;

        let counts = SkillKind::ALL.map(|kind| skill_counts(&tagged, kind));
        for (kind, rows) in SkillKind::ALL.iter().zip(&counts) {
            save(skill_path(&paths, *kind), rows, &mut summary)?;
        }
        summary.tagged = tagged.len();
        carry.counts = Some(counts);
    }

    if stages.visualize {
        let data_jobs = match carry.data_jobs.take() {
            Some(d) => d,
            None => load_records(&input.take().unwrap_or_else(|| paths.filtered.clone()))?,
        };
        let [soft, hard, domains] = match carry.counts.take() {
            Some(c) => c,
            None => load_counts(&paths)?,
        };
        status(&mut progress, &format!("Rendering figures for {} postings", data_jobs.len()));
        let inputs = FigureInputs {
            data_jobs: &data_jobs,
            soft_skills: &soft,
            hard_skills: &hard,
            domains: &domains,
            top_n: settings.top_n,
            top_skills: settings.top_skills,
        };
        let figures = render_figures(&inputs, &paths.figures_dir)?;
        summary.figures = figures.len();
        summary.files_written.extend(figures);
    }

    status(&mut progress, &format!("Done: {} files written", summary.files_written.len()));
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_in(dir: &Path) -> Settings {
        Settings {
            data_dir: dir.join("data"),
            results_dir: dir.join("results"),
            ..Settings::default()
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Progress for Recorder {
        fn log(&mut self, msg: &str) { self.events.push(s!(msg)); }
        fn item_failed(&mut self, label: &str) { self.events.push(join!("failed ", label)); }
        fn finish(&mut self) { self.events.push(s!("finish")); }
    }

    #[test]
    fn full_run_finishes_once_after_last_stage() {
        let dir = std::env::temp_dir().join("job_scrape_runner_finish");
        let _ = std::fs::remove_dir_all(&dir);
        let settings = Settings {
            base_url: s!("http://127.0.0.1:9/jobs"),
            retries: 0,
            timeout_secs: 2,
            request_pause_ms: 0,
            jitter_ms: 0,
            ..settings_in(&dir)
        };

        let mut rec = Recorder::default();
        let summary = run(Stages::all(), &settings, &Overrides::default(), Some(&mut rec)).unwrap();
        assert_eq!(summary.scraped, 0);
        assert_eq!(summary.figures, 10);

        let finishes = rec.events.iter().filter(|e| *e == "finish").count();
        assert_eq!(finishes, 1);
        assert_eq!(rec.events.last().map(String::as_str), Some("finish"));
        assert!(rec.events.iter().any(|e| e.starts_with("failed ")));
        assert!(rec.events.iter().any(|e| e.starts_with("Rendering figures")));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn no_stage_is_usage_error() {
        let dir = std::env::temp_dir().join("job_scrape_runner_none");
        let err = run(Stages::default(), &settings_in(&dir), &Overrides::default(), None).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = std::env::temp_dir().join("job_scrape_runner_missing");
        let _ = std::fs::remove_dir_all(&dir);
        let stages = Stages { clean: true, ..Stages::default() };
        let err = run(stages, &settings_in(&dir), &Overrides::default(), None).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn offline_stages_chain_in_memory() {
        let dir = std::env::temp_dir().join("job_scrape_runner_offline");
        let _ = std::fs::remove_dir_all(&dir);
        let settings = settings_in(&dir);
        let raw = vec![JobPosting {
            title: s!("Data Analyst"),
            company: s!("Acme"),
            location: s!("Hà Nội"),
            salary: s!("15 Tr - 25 Tr VND"),
            date: s!("05-03-2025"),
            link: s!("https://careerviet.vn/vi/tim-viec-lam/a.1.html"),
            experience: s!("2 - 4 Năm"),
            requirements: s!("SQL, Python and communication"),
            ..Default::default()
        }];
        save_records(&settings.paths().raw, &raw).unwrap();

        let summary = run(Stages::offline(), &settings, &Overrides::default(), None).unwrap();
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.data_jobs, 1);
        assert_eq!(summary.analyst_jobs, 1);
        assert_eq!(summary.tagged, 1);
        assert_eq!(summary.figures, 10);
        // processed, filtered, analyst, analyst_skills, 3 counts, 10 figures
        assert_eq!(summary.files_written.len(), 17);

        let hard: Vec<SkillCount> = load_records(&settings.paths().hard_skills).unwrap();
        assert!(hard.iter().any(|c| c.skill == "SQL"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
