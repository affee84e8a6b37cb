// src/clean/mod.rs
//
// Raw postings → normalized postings → data-related and analyst subsets.
// Field normalizers never fail; anything unparseable becomes None/"unknown".

pub mod dates;
pub mod experience;
pub mod filter;
pub mod salary;

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::core::sanitize::{normalize_location, normalize_ws, title_case};
use crate::posting::{CleanPosting, ExperienceLevel, Identity, JobPosting};

pub use filter::{filter_analyst_jobs, filter_data_jobs, is_analyst, is_data_related, DATA_RELATED_KEYWORDS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CleanOptions {
    pub usd_to_vnd: f64,
    pub today: NaiveDate,
}

impl CleanOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            usd_to_vnd: settings.usd_to_vnd,
            today: chrono::Local::now().date_naive(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CleanReport {
    pub processed: Vec<CleanPosting>,
    pub data_jobs: Vec<CleanPosting>,
    pub analyst_jobs: Vec<CleanPosting>,
}

/// First record per identity key, input order kept.
pub fn dedupe<T: Identity>(records: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    records.into_iter().filter(|r| seen.insert(r.identity_key())).collect()
}

/// Normalize one raw posting. Salary/experience gaps stay None until `impute_means`.
pub fn clean_posting(raw: JobPosting, opts: &CleanOptions) -> CleanPosting {
    let title = title_case(&normalize_ws(&raw.title));
    let salary_text = title_case(&normalize_ws(&raw.salary));
    let experience = title_case(raw.experience.trim());

    let range = salary::parse_salary(&salary_text, opts.usd_to_vnd);
    let (exp_min, exp_max) = experience::parse_experience(&experience);
    if range.min.is_none() && range.max.is_none() {
        logd!("Clean: no salary figures in {:?}", raw.salary);
    }

    let date = dates::clean_date(&raw.date);
    if date.is_empty() {
        logd!("Clean: unparseable date {:?}", raw.date);
    }

    CleanPosting {
        data_related: is_data_related(&title),
        title,
        company: title_case(&normalize_ws(&raw.company)),
        location: normalize_location(&raw.location),
        salary: salary_text,
        date,
        expire_date: dates::resolve_expire(&raw.expire, opts.today),
        link: raw.link,
        expire: raw.expire,
        welfare: raw.welfare,
        description: raw.description,
        requirements: raw.requirements,
        level: raw.level,
        job_type: raw.job_type,
        experience,
        industry: raw.industry,
        min_salary: range.min,
        max_salary: range.max,
        currency: range.currency,
        salary_imputed: false,
        exp_min,
        exp_max,
        experience_level: exp_min.map(ExperienceLevel::from_years),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| (sum / n as f64).round_ties_even())
}

/// Fill missing salary and experience bounds with the column mean, rounded
/// half to even.
pub fn impute_means(records: &mut [CleanPosting]) {
    let min_sal = mean(records.iter().filter_map(|r| r.min_salary));
    let max_sal = mean(records.iter().filter_map(|r| r.max_salary));
    let min_exp = mean(records.iter().filter_map(|r| r.exp_min));
    let max_exp = mean(records.iter().filter_map(|r| r.exp_max));

    for r in records.iter_mut() {
        if r.min_salary.is_none() && min_sal.is_some() {
            r.min_salary = min_sal;
            r.salary_imputed = true;
        }
        if r.max_salary.is_none() && max_sal.is_some() {
            r.max_salary = max_sal;
            r.salary_imputed = true;
        }
        if r.exp_min.is_none() {
            r.exp_min = min_exp;
        }
        if r.exp_max.is_none() {
            r.exp_max = max_exp;
        }
        r.experience_level = r.exp_min.map(ExperienceLevel::from_years);
    }
}

/// The whole clean stage: dedupe, normalize, impute, filter.
pub fn clean(raw: Vec<JobPosting>, opts: &CleanOptions) -> CleanReport {
    let total = raw.len();
    let unique = dedupe(raw);
    if unique.len() < total {
        logf!("Clean: dropped {} duplicate postings", total - unique.len());
    }

    let mut processed: Vec<CleanPosting> = unique.into_iter().map(|r| clean_posting(r, opts)).collect();
    impute_means(&mut processed);

    let data_jobs = filter_data_jobs(&processed);
    let analyst_jobs = filter_analyst_jobs(&data_jobs);
    logf!(
        "Clean: {} processed, {} data-related, {} analyst",
        processed.len(), data_jobs.len(), analyst_jobs.len()
    );

    CleanReport { processed, data_jobs, analyst_jobs }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> CleanOptions {
        CleanOptions { usd_to_vnd: 25505.0, today: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap() }
    }

    fn raw(title: &str, link: &str, salary: &str, exp: &str) -> JobPosting {
        JobPosting {
            title: s!(title),
            company: s!("công ty abc"),
            location: s!("Hà Nội\r\nHồ Chí Minh"),
            salary: s!(salary),
            date: s!("05-03-2025"),
            link: s!(link),
            expire: s!("Còn 5 ngày"),
            experience: s!(exp),
            ..Default::default()
        }
    }

    #[test]
    fn dedupe_keeps_first_per_key() {
        let rows = vec![
            raw("Data Analyst", "a", "", ""),
            raw("Data Analyst v2", "a", "", ""),
            raw("BI", "b", "", ""),
            raw("No Link", "", "", ""),
            raw("No Link", "", "", ""),
        ];
        let out = dedupe(rows);
        let titles: Vec<_> = out.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Data Analyst", "BI", "No Link"]);
        let keys: HashSet<_> = out.iter().map(|r| r.identity_key()).collect();
        assert_eq!(keys.len(), out.len());
    }

    #[test]
    fn clean_posting_normalizes_fields() {
        let c = clean_posting(raw("data ANALYST (mới)", "a", "15 tr - 25 tr vnd", "2 - 5 năm"), &opts());
        assert_eq!(c.title, "Data Analyst (Mới)");
        assert_eq!(c.company, "Công Ty Abc");
        assert_eq!(c.location, "Hà Nội, Hồ Chí Minh");
        assert_eq!(c.salary, "15 Tr - 25 Tr Vnd");
        assert_eq!(c.date, "2025-03-05");
        assert_eq!(c.expire_date, "2025-03-15");
        assert_eq!((c.min_salary, c.max_salary), (Some(15e6), Some(25e6)));
        assert_eq!((c.exp_min, c.exp_max), (Some(2.0), Some(5.0)));
        assert_eq!(c.experience_level, Some(ExperienceLevel::Junior));
        assert!(c.data_related);
    }

    #[test]
    fn imputation_fills_with_rounded_means() {
        let rows = vec![
            raw("Data Analyst", "a", "10 Tr - 20 Tr Vnd", "1 - 2 Năm"),
            raw("Data Engineer", "b", "15 Tr - 31 Tr Vnd", "Trên 4 Năm"),
            raw("Data Scientist", "c", "Lên Đến 40 Tr Vnd", "Not available"),
        ];
        let report = clean(rows, &opts());
        let p = &report.processed;

        assert_eq!(p[2].min_salary, Some(12_500_000.0));
        assert_eq!(p[2].max_salary, Some(40e6));
        assert!(p[2].salary_imputed);
        assert!(!p[0].salary_imputed);

        assert_eq!(p[1].exp_max, Some(2.0));
        // mean of 1 and 4
        assert_eq!(p[2].exp_min, Some(2.0));
        assert!(p.iter().all(|r| r.min_salary.is_some() && r.exp_min.is_some()));
    }

    #[test]
    fn imputed_means_round_half_to_even() {
        let mut rows = vec![
            CleanPosting { min_salary: Some(1.0), max_salary: Some(3.0), exp_min: Some(2.0), exp_max: Some(4.0), ..Default::default() },
            CleanPosting { min_salary: Some(2.0), max_salary: Some(6.0), exp_min: Some(3.0), exp_max: Some(5.0), ..Default::default() },
            CleanPosting::default(),
        ];
        impute_means(&mut rows);

        assert_eq!(rows[2].exp_min, Some(2.0));
        assert_eq!(rows[2].exp_max, Some(4.0));
        assert_eq!(rows[2].experience_level, Some(ExperienceLevel::Junior));
        assert_eq!(rows[2].min_salary, Some(2.0));
        assert_eq!(rows[2].max_salary, Some(4.0));
        assert!(rows[2].salary_imputed);
        assert!(!rows[0].salary_imputed);
    }

    #[test]
    fn clean_is_stable_on_its_own_output_fields() {
        let c = clean_posting(raw("data analyst", "a", "lên đến 30 tr vnd", "trên 2 năm"), &opts());
        assert_eq!(title_case(&c.title), c.title);
        assert_eq!(title_case(&c.salary), c.salary);
        assert_eq!(normalize_location(&c.location), c.location);
        assert_eq!(dates::clean_date(&c.date), c.date);
        assert_eq!(dates::resolve_expire(&c.expire_date, opts().today), c.expire_date);
    }

    #[test]
    fn filtered_sets_are_subsets() {
        let rows = vec![
            raw("Data Analyst", "a", "", ""),
            raw("Kế Toán Trưởng", "b", "", ""),
            raw("Chuyên Viên Phân Tích Kinh Doanh", "c", "", ""),
            raw("Python Developer", "d", "", ""),
        ];
        let r = clean(rows, &opts());
        assert_eq!(r.processed.len(), 4);
        assert_eq!(r.data_jobs.len(), 3);
        assert_eq!(r.analyst_jobs.len(), 2);
        assert!(r.data_jobs.iter().all(|d| d.data_related && r.processed.contains(d)));
        assert!(r.analyst_jobs.iter().all(|a| r.data_jobs.contains(a)));
    }
}
