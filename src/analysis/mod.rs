// src/analysis/mod.rs
//
// Descriptive aggregations over clean postings. Everything here is pure;
// salaries in the outputs are in millions of VND.

pub mod provinces;

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Datelike, NaiveDate, Weekday};

use crate::clean::dates::parse_day_first;
use crate::posting::CleanPosting;
use provinces::{extract_provinces, region_of, Region};

const MILLION: f64 = 1_000_000.0;

/// One bar of a value-count chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Count {
    pub label: String,
    pub count: usize,
}

/// Counts per distinct value, most frequent first, ties by label.
pub fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<Count> {
    let mut map: HashMap<&str, usize> = HashMap::new();
    for v in values {
        *map.entry(v).or_default() += 1;
    }
    let mut out: Vec<Count> = map.into_iter().map(|(l, c)| Count { label: s!(l), count: c }).collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    out
}

pub fn jobs_by_location(records: &[CleanPosting]) -> Vec<Count> {
    value_counts(records.iter().map(|r| r.location.as_str()))
}

pub fn top_titles(records: &[CleanPosting], n: usize) -> Vec<Count> {
    let mut v = value_counts(records.iter().map(|r| r.title.as_str()));
    v.truncate(n);
    v
}

pub fn top_companies(records: &[CleanPosting], n: usize) -> Vec<Count> {
    let mut v = value_counts(records.iter().map(|r| r.company.as_str()));
    v.truncate(n);
    v
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProvinceCount {
    pub province: &'static str,
    pub region: Region,
    pub jobs: usize,
}

/// Jobs per province. A location naming several provinces counts fully for each.
pub fn jobs_by_province(records: &[CleanPosting]) -> Vec<ProvinceCount> {
    let mut map: HashMap<&'static str, usize> = HashMap::new();
    for loc in jobs_by_location(records) {
        let found = extract_provinces(&loc.label);
        if found.is_empty() {
            logd!("Analysis: no province in {:?}", loc.label);
        }
        for p in found {
            *map.entry(p).or_default() += loc.count;
        }
    }
    let mut out: Vec<ProvinceCount> = map
        .into_iter()
        .filter_map(|(province, jobs)| Some(ProvinceCount { province, region: region_of(province)?, jobs }))
        .collect();
    out.sort_by(|a, b| b.jobs.cmp(&a.jobs).then_with(|| a.province.cmp(b.province)));
    out
}

/// Province totals summed per region, in North/Central/South order.
pub fn jobs_by_region(records: &[CleanPosting]) -> Vec<(Region, usize)> {
    let by_province = jobs_by_province(records);
    Region::ALL
        .iter()
        .map(|&r| (r, by_province.iter().filter(|p| p.region == r).map(|p| p.jobs).sum()))
        .collect()
}

fn mean(v: &[f64]) -> Option<f64> {
    (!v.is_empty()).then(|| v.iter().sum::<f64>() / v.len() as f64)
}

/// Sorts `(key, value)` pairs by key and groups equal keys.
fn group_by_f64<T>(mut pairs: Vec<(f64, T)>) -> Vec<(f64, Vec<T>)> {
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    let mut out: Vec<(f64, Vec<T>)> = Vec::new();
    for (k, v) in pairs {
        match out.last_mut() {
            Some((last, group)) if *last == k => group.push(v),
            _ => out.push((k, vec![v])),
        }
    }
    out
}

#[derive(Clone, Debug, PartialEq)]
pub struct SalaryPoint {
    pub years: f64,
    pub mean_min: f64,
    pub mean_max: f64,
}

/// Mean min/max salary per maximum years of experience.
pub fn salary_by_experience(records: &[CleanPosting]) -> Vec<SalaryPoint> {
    let pairs: Vec<(f64, (Option<f64>, Option<f64>))> = records
        .iter()
        .filter_map(|r| Some((r.exp_max?, (r.min_salary, r.max_salary))))
        .collect();

    group_by_f64(pairs)
        .into_iter()
        .filter_map(|(years, group)| {
            let mins: Vec<f64> = group.iter().filter_map(|g| g.0).collect();
            let maxs: Vec<f64> = group.iter().filter_map(|g| g.1).collect();
            Some(SalaryPoint {
                years,
                mean_min: mean(&mins)? / MILLION,
                mean_max: mean(&maxs)? / MILLION,
            })
        })
        .collect()
}

/// Posting counts per day, oldest first.
pub fn jobs_by_date(records: &[CleanPosting]) -> Vec<(NaiveDate, usize)> {
    let mut map: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for d in records.iter().filter_map(|r| parse_day_first(&r.date)) {
        *map.entry(d).or_default() += 1;
    }
    map.into_iter().collect()
}

/// Posting counts per weekday, Monday first.
pub fn jobs_by_weekday(records: &[CleanPosting]) -> Vec<(Weekday, usize)> {
    let mut counts = [0usize; 7];
    for d in records.iter().filter_map(|r| parse_day_first(&r.date)) {
        counts[d.weekday().num_days_from_monday() as usize] += 1;
    }
    let mut day = Weekday::Mon;
    let mut out = Vec::with_capacity(7);
    for c in counts {
        out.push((day, c));
        day = day.succ();
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FiveNumber {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Linear-interpolated quantile over sorted data.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

impl FiveNumber {
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut v = values.to_vec();
        v.sort_by(f64::total_cmp);
        Some(Self {
            min: v[0],
            q1: quantile(&v, 0.25),
            median: quantile(&v, 0.5),
            q3: quantile(&v, 0.75),
            max: v[v.len() - 1],
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelSpread {
    pub level: String,
    pub exp_min: Option<FiveNumber>,
    pub exp_max: Option<FiveNumber>,
}

/// Spread of required experience per "Job Level", levels sorted by name.
pub fn experience_by_level(records: &[CleanPosting]) -> Vec<LevelSpread> {
    let mut map: BTreeMap<&str, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for r in records {
        let e = map.entry(r.level.as_str()).or_default();
        e.0.extend(r.exp_min);
        e.1.extend(r.exp_max);
    }
    map.into_iter()
        .map(|(level, (mins, maxs))| LevelSpread {
            level: s!(level),
            exp_min: FiveNumber::of(&mins),
            exp_max: FiveNumber::of(&maxs),
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Heatmap {
    /// Minimum years of experience, ascending.
    pub rows: Vec<f64>,
    pub cols: Vec<String>,
    /// `cells[row][col]`, 0 where there is no posting.
    pub cells: Vec<Vec<f64>>,
}

impl Heatmap {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    pub fn max(&self) -> f64 {
        self.cells.iter().flatten().copied().fold(0.0, f64::max)
    }
}

/// Mean min salary by location × minimum experience, limited to the
/// `max_locations` most common locations.
pub fn salary_heatmap(records: &[CleanPosting], max_locations: usize) -> Heatmap {
    let cols: Vec<String> = jobs_by_location(records)
        .into_iter()
        .take(max_locations)
        .map(|c| c.label)
        .collect();
    let col_of: HashMap<&str, usize> = cols.iter().enumerate().map(|(i, c)| (c.as_str(), i)).collect();

    let pairs: Vec<(f64, (usize, f64))> = records
        .iter()
        .filter_map(|r| {
            let col = *col_of.get(r.location.as_str())?;
            Some((r.exp_min?, (col, r.min_salary?)))
        })
        .collect();

    let mut rows = Vec::new();
    let mut cells = Vec::new();
    for (years, group) in group_by_f64(pairs) {
        let mut sums = vec![(0.0, 0usize); cols.len()];
        for (col, salary) in group {
            sums[col].0 += salary;
            sums[col].1 += 1;
        }
        rows.push(years);
        cells.push(
            sums.into_iter()
                .map(|(s, n)| if n == 0 { 0.0 } else { s / n as f64 / MILLION })
                .collect(),
        );
    }
    Heatmap { rows, cols, cells }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Histogram {
    /// `counts.len() + 1` bin edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

pub fn histogram(values: &[f64], bins: usize) -> Histogram {
    if values.is_empty() || bins == 0 {
        return Histogram::default();
    }
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = if hi > lo { (hi - lo) / bins as f64 } else { 1.0 };

    let edges = (0..=bins).map(|i| lo + width * i as f64).collect();
    let mut counts = vec![0; bins];
    for v in values {
        let i = (((v - lo) / width) as usize).min(bins - 1);
        counts[i] += 1;
    }
    Histogram { edges, counts }
}

/// Histogram of min salary in millions.
pub fn salary_distribution(records: &[CleanPosting], bins: usize) -> Histogram {
    let v: Vec<f64> = records.iter().filter_map(|r| r.min_salary).map(|s| s / MILLION).collect();
    histogram(&v, bins)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overview {
    pub total_jobs: usize,
    pub data_jobs: usize,
    pub analyst_jobs: usize,
    pub avg_min_salary: Option<f64>,
    pub avg_max_salary: Option<f64>,
    pub avg_exp_min: Option<f64>,
    pub companies: usize,
    pub locations: usize,
    pub titles: usize,
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.collect::<HashSet<_>>().len()
}

/// Headline numbers. Salary and experience averages are over the data-related set.
pub fn overview(processed: &[CleanPosting], data: &[CleanPosting], analyst: &[CleanPosting]) -> Overview {
    let mins: Vec<f64> = data.iter().filter_map(|r| r.min_salary).collect();
    let maxs: Vec<f64> = data.iter().filter_map(|r| r.max_salary).collect();
    let exps: Vec<f64> = data.iter().filter_map(|r| r.exp_min).collect();

    Overview {
        total_jobs: processed.len(),
        data_jobs: data.len(),
        analyst_jobs: analyst.len(),
        avg_min_salary: mean(&mins).map(|m| m / MILLION),
        avg_max_salary: mean(&maxs).map(|m| m / MILLION),
        avg_exp_min: mean(&exps),
        companies: distinct(data.iter().map(|r| r.company.as_str())),
        locations: distinct(data.iter().map(|r| r.location.as_str())),
        titles: distinct(data.iter().map(|r| r.title.as_str())),
    }
}

/// Whole-million slider bounds: floor of the lowest min, one past the highest max.
pub fn salary_bounds(records: &[CleanPosting]) -> Option<(f64, f64)> {
    let lo = records.iter().filter_map(|r| r.min_salary).min_by(f64::total_cmp)?;
    let hi = records.iter().filter_map(|r| r.max_salary).max_by(f64::total_cmp)?;
    Some(((lo / MILLION).floor(), (hi / MILLION).floor() + 1.0))
}

/// Postings whose whole salary range lies inside `[lo, hi]` million VND.
pub fn filter_by_salary_range(records: &[CleanPosting], lo: f64, hi: f64) -> Vec<CleanPosting> {
    records
        .iter()
        .filter(|r| match (r.min_salary, r.max_salary) {
            (Some(min), Some(max)) => min >= lo * MILLION && max <= hi * MILLION,
            _ => false,
        })
        .cloned()
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompanyProfile {
    pub postings: usize,
    pub avg_min_salary: Option<f64>,
    pub avg_max_salary: Option<f64>,
    pub titles: Vec<Count>,
}

pub fn company_profile(records: &[CleanPosting], company: &str) -> CompanyProfile {
    let rows: Vec<&CleanPosting> = records.iter().filter(|r| r.company == company).collect();
    let mins: Vec<f64> = rows.iter().filter_map(|r| r.min_salary).collect();
    let maxs: Vec<f64> = rows.iter().filter_map(|r| r.max_salary).collect();
    CompanyProfile {
        postings: rows.len(),
        avg_min_salary: mean(&mins).map(|m| m / MILLION),
        avg_max_salary: mean(&maxs).map(|m| m / MILLION),
        titles: value_counts(rows.iter().map(|r| r.title.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, company: &str, loc: &str, min: f64, max: f64, exp: (f64, f64), date: &str) -> CleanPosting {
        CleanPosting {
            title: s!(title),
            company: s!(company),
            location: s!(loc),
            min_salary: Some(min * MILLION),
            max_salary: Some(max * MILLION),
            exp_min: Some(exp.0),
            exp_max: Some(exp.1),
            date: s!(date),
            level: s!("Nhân viên"),
            ..Default::default()
        }
    }

    fn sample() -> Vec<CleanPosting> {
        vec![
            post("Data Analyst", "A", "Hà Nội", 10.0, 20.0, (1.0, 3.0), "2025-03-03"),
            post("Data Analyst", "B", "Hồ Chí Minh", 20.0, 30.0, (3.0, 5.0), "2025-03-03"),
            post("BI Developer", "A", "Hà Nội, Hồ Chí Minh", 30.0, 40.0, (1.0, 3.0), "2025-03-05"),
            post("Data Engineer", "C", "Đà Nẵng", 15.0, 25.0, (3.0, 5.0), ""),
        ]
    }

    #[test]
    fn value_counts_sorted() {
        let top = top_titles(&sample(), 2);
        assert_eq!(top[0], Count { label: s!("Data Analyst"), count: 2 });
        assert_eq!(top.len(), 2);
        assert_eq!(top_companies(&sample(), 10)[0].label, "A");
    }

    #[test]
    fn provinces_and_regions() {
        let p = jobs_by_province(&sample());
        assert_eq!(p[0].jobs, 2);
        let hcm = p.iter().find(|x| x.province == "Hồ Chí Minh").unwrap();
        assert_eq!(hcm.jobs, 2);
        assert_eq!(hcm.region, Region::South);
        let regions = jobs_by_region(&sample());
        assert_eq!(regions, vec![(Region::North, 2), (Region::Central, 1), (Region::South, 2)]);
    }

    #[test]
    fn salary_by_experience_groups_on_max_years() {
        let pts = salary_by_experience(&sample());
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[0], SalaryPoint { years: 3.0, mean_min: 20.0, mean_max: 30.0 });
        assert_eq!(pts[1], SalaryPoint { years: 5.0, mean_min: 17.5, mean_max: 27.5 });
    }

    #[test]
    fn dates_and_weekdays() {
        let d = jobs_by_date(&sample());
        assert_eq!(d.len(), 2);
        assert_eq!(d[0], (NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), 2));
        let w = jobs_by_weekday(&sample());
        assert_eq!(w[0], (Weekday::Mon, 2));
        assert_eq!(w[2], (Weekday::Wed, 1));
    }

    #[test]
    fn five_number_summary() {
        let f = FiveNumber::of(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!((f.min, f.q1, f.median, f.q3, f.max), (1.0, 2.0, 3.0, 4.0, 5.0));
        assert!(FiveNumber::of(&[]).is_none());
        let lv = experience_by_level(&sample());
        assert_eq!(lv.len(), 1);
        assert_eq!(lv[0].exp_min.unwrap().median, 2.0);
    }

    #[test]
    fn heatmap_fills_missing_with_zero() {
        let h = salary_heatmap(&sample(), 10);
        assert_eq!(h.rows, vec![1.0, 3.0]);
        let hn = h.cols.iter().position(|c| c == "Hà Nội").unwrap();
        let dn = h.cols.iter().position(|c| c == "Đà Nẵng").unwrap();
        assert_eq!(h.cells[0][hn], 10.0);
        assert_eq!(h.cells[0][dn], 0.0);
        assert_eq!(h.cells[1][dn], 15.0);
        assert_eq!(h.max(), 30.0);
    }

    #[test]
    fn histogram_covers_all_values() {
        let h = salary_distribution(&sample(), 4);
        assert_eq!(h.edges.len(), 5);
        assert_eq!(h.counts.iter().sum::<usize>(), 4);
        assert_eq!(histogram(&[], 5), Histogram::default());
    }

    #[test]
    fn overview_and_salary_filter() {
        let s = sample();
        let o = overview(&s, &s, &s[..2]);
        assert_eq!(o.total_jobs, 4);
        assert_eq!(o.analyst_jobs, 2);
        assert_eq!(o.avg_min_salary, Some(18.75));
        assert_eq!(o.companies, 3);

        assert_eq!(salary_bounds(&s), Some((10.0, 41.0)));
        let inside = filter_by_salary_range(&s, 10.0, 30.0);
        assert_eq!(inside.len(), 3);
        assert!(inside.iter().all(|r| r.max_salary.unwrap() <= 30.0 * MILLION));
    }

    #[test]
    fn company_profile_summarizes() {
        let p = company_profile(&sample(), "A");
        assert_eq!(p.postings, 2);
        assert_eq!(p.avg_min_salary, Some(20.0));
        assert_eq!(p.titles.len(), 2);
    }
}
