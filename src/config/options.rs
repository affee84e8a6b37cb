// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::Result;

/// Everything the pipeline can be tuned with. Layered as
/// defaults → `job_scrape.toml` → `JOB_SCRAPE_*` env → CLI overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub max_pages: usize,
    pub max_jobs: usize,
    pub max_jobs_per_page: usize,
    pub workers: usize,
    pub request_pause_ms: u64,
    pub jitter_ms: u64,
    pub retries: u32,
    pub timeout_secs: u64,
    pub usd_to_vnd: f64,
    pub data_dir: PathBuf,
    pub results_dir: PathBuf,
    pub top_n: usize,
    pub top_skills: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            max_pages: MAX_PAGES,
            max_jobs: MAX_JOBS,
            max_jobs_per_page: MAX_JOBS_PER_PAGE,
            workers: WORKERS,
            request_pause_ms: REQUEST_PAUSE_MS,
            jitter_ms: JITTER_MS,
            retries: RETRIES,
            timeout_secs: TIMEOUT_SECS,
            usd_to_vnd: USD_TO_VND_RATE,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            top_n: TOP_N,
            top_skills: TOP_SKILLS,
        }
    }
}

impl Settings {
    /// Merge defaults, an optional TOML file and the environment.
    /// `path = None` looks for `job_scrape.toml` in the working directory;
    /// a missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));

        let settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(&file))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;

        logd!("Settings: loaded (file={}, exists={})", file.display(), file.exists());
        Ok(settings)
    }

    pub fn paths(&self) -> Paths {
        Paths::new(&self.data_dir, &self.results_dir)
    }
}

/// Resolved on-disk layout for every stage file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paths {
    pub raw: PathBuf,
    pub processed: PathBuf,
    pub filtered: PathBuf,
    pub analyst: PathBuf,
    pub analyst_skills: PathBuf,
    pub soft_skills: PathBuf,
    pub hard_skills: PathBuf,
    pub domain_skills: PathBuf,
    pub figures_dir: PathBuf,
}

impl Paths {
    pub fn new(data_dir: &Path, results_dir: &Path) -> Self {
        let raw_dir = data_dir.join(RAW_SUBDIR);
        let proc_dir = data_dir.join(PROCESSED_SUBDIR);
        Self {
            raw: raw_dir.join(RAW_FILE),
            processed: proc_dir.join(PROCESSED_FILE),
            filtered: proc_dir.join(FILTERED_FILE),
            analyst: proc_dir.join(ANALYST_FILE),
            analyst_skills: proc_dir.join(ANALYST_SKILLS_FILE),
            soft_skills: proc_dir.join(SOFT_SKILLS_FILE),
            hard_skills: proc_dir.join(HARD_SKILLS_FILE),
            domain_skills: proc_dir.join(DOMAIN_SKILLS_FILE),
            figures_dir: results_dir.join(FIGURES_SUBDIR),
        }
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        for p in [&self.raw, &self.processed] {
            if let Some(parent) = p.parent() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::create_dir_all(&self.figures_dir)?;
        Ok(())
    }
}

/// Per-run overrides coming from the command surface.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub url: Option<String>,
    pub pages: Option<usize>,
    pub max_jobs: Option<usize>,
    /// Replaces the input file of the first stage that runs.
    pub input: Option<PathBuf>,
    /// Replaces the scrape output file.
    pub output: Option<PathBuf>,
}

impl Overrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(u) = &self.url {
            settings.base_url = u.clone();
        }
        if let Some(p) = self.pages {
            settings.max_pages = p;
        }
        if let Some(m) = self.max_jobs {
            settings.max_jobs = m;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_data_and_results_dirs() {
        let p = Paths::new(Path::new("d"), Path::new("r"));
        assert_eq!(p.raw, Path::new("d/raw/careerviet_jobs.csv"));
        assert_eq!(p.analyst, Path::new("d/processed/analyst_jobs.csv"));
        assert_eq!(p.figures_dir, Path::new("r/figures"));
    }

    #[test]
    fn overrides_only_touch_given_fields() {
        let mut s = Settings::default();
        Overrides { pages: Some(3), ..Default::default() }.apply(&mut s);
        assert_eq!(s.max_pages, 3);
        assert_eq!(s.max_jobs, MAX_JOBS);
        assert_eq!(s.base_url, BASE_URL);
    }

    #[test]
    fn load_merges_toml_file() {
        let dir = std::env::temp_dir().join("job_scrape_settings_test");
        let _ = fs::create_dir_all(&dir);
        let file = dir.join("settings.toml");
        fs::write(&file, "max_jobs = 42\nusd_to_vnd = 24000.0\n").unwrap();

        let s = Settings::load(Some(&file)).unwrap();
        assert_eq!(s.max_jobs, 42);
        assert_eq!(s.usd_to_vnd, 24000.0);
        assert_eq!(s.workers, WORKERS);
    }

    #[test]
    fn load_without_file_gives_defaults() {
        let s = Settings::load(Some(Path::new("/definitely/not/here.toml"))).unwrap();
        assert_eq!(s.max_pages, MAX_PAGES);
    }
}
