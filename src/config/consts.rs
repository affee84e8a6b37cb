// src/config/consts.rs

// Net config
pub const SITE_ROOT: &str = "https://careerviet.vn";
pub const BASE_URL: &str = "https://careerviet.vn/viec-lam/data-k-vi.html";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
pub const TIMEOUT_SECS: u64 = 30;
pub const RETRIES: u32 = 2;

// Scrape limits
pub const MAX_PAGES: usize = 10;
pub const MAX_JOBS: usize = 600;
pub const MAX_JOBS_PER_PAGE: usize = 60;

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 300; // be polite
pub const JITTER_MS: u64 = 200; // extra 0..200 ms

// Cleaning
pub const USD_TO_VND_RATE: f64 = 25505.0;

// Reports
pub const TOP_N: usize = 15;
pub const TOP_SKILLS: usize = 20;

// Local layout
pub const SETTINGS_FILE: &str = "job_scrape.toml";
pub const ENV_PREFIX: &str = "JOB_SCRAPE_";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const RAW_SUBDIR: &str = "raw";
pub const PROCESSED_SUBDIR: &str = "processed";
pub const FIGURES_SUBDIR: &str = "figures";

pub const RAW_FILE: &str = "careerviet_jobs.csv";
pub const PROCESSED_FILE: &str = "processed_data.csv";
pub const FILTERED_FILE: &str = "filtered_data.csv";
pub const ANALYST_FILE: &str = "analyst_jobs.csv";
pub const ANALYST_SKILLS_FILE: &str = "analyst_skills.csv";
pub const SOFT_SKILLS_FILE: &str = "soft_skills.csv";
pub const HARD_SKILLS_FILE: &str = "hard_skills.csv";
pub const DOMAIN_SKILLS_FILE: &str = "domain_skills.csv";

// Debug log (GUI)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Placeholders written by the scraper when a field is absent
pub const NOT_AVAILABLE: &str = "Not available";
pub const DETAILS_UNAVAILABLE: &str = "Could not load job details";
pub const DESCRIPTION_UNAVAILABLE: &str = "Description unavailable or could not be extracted properly";
pub const REQUIREMENTS_UNAVAILABLE: &str = "Requirements unavailable or could not be extracted properly";
pub const REQUIREMENTS_IN_DESCRIPTION: &str = "Requirements included in job description";
