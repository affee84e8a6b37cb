// src/clean/filter.rs
//
// Title keyword filters. A title qualifies when any keyword appears as a
// whole word, case-insensitively.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::posting::CleanPosting;

pub const DATA_RELATED_KEYWORDS: &[&str] = &[
    "Data", "Analyst", "Phân Tích", "Dữ Liệu", "Intelligence",
    "Machine Learning", "Scientist", "Công Nghệ", "Ai", "Statistics", "Research",
    "Researcher", "Ecommerce", "Digital", "Nghiên Cứu", "Crm", "Erp", "Sap",
    "System", "Database", "Bi", "Sql", "Python", "Etl", "Insights", "Analytics",
    "Artificial Intelligence", "Clustering", "Regression", "Dashboard", "Excel",
    "Power Bi", "Visualization", "Reporting", "Forecasting", "Quantitative",
    "Modelling", "Dự Báo", "Báo Cáo", "Mining", "Analysis", "Analytic", "Labeling",
    "Platform", "Số Liệu", "Automation", "Cntt", "Software Engineer",
];

pub const ANALYST_KEYWORDS: &[&str] = &["Analyst", "Phân Tích"];

pub fn whole_word_pattern(words: &[&str]) -> Regex {
    let alts: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    // escaped literals only
    Regex::new(&format!(r"(?i)\b(?:{})\b", alts.join("|"))).unwrap()
}

static DATA_RX: Lazy<Regex> = Lazy::new(|| whole_word_pattern(DATA_RELATED_KEYWORDS));
static ANALYST_RX: Lazy<Regex> = Lazy::new(|| whole_word_pattern(ANALYST_KEYWORDS));

pub fn is_data_related(title: &str) -> bool {
    DATA_RX.is_match(title)
}

pub fn is_analyst(title: &str) -> bool {
    ANALYST_RX.is_match(title)
}

/// Order-preserving subset of data-related postings.
pub fn filter_data_jobs(records: &[CleanPosting]) -> Vec<CleanPosting> {
    records.iter().filter(|r| is_data_related(&r.title)).cloned().collect()
}

/// Order-preserving subset of analyst postings.
pub fn filter_analyst_jobs(records: &[CleanPosting]) -> Vec<CleanPosting> {
    records.iter().filter(|r| is_analyst(&r.title)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(t: &str) -> CleanPosting {
        CleanPosting { title: s!(t), ..Default::default() }
    }

    #[test]
    fn whole_words_only() {
        assert!(is_data_related("Senior Data Engineer"));
        assert!(is_data_related("Chuyên Viên Phân Tích Dữ Liệu"));
        assert!(is_data_related("AI Engineer"));
        assert!(is_data_related("power bi developer"));
        assert!(!is_data_related("Sales Executive"));
        assert!(!is_data_related("Biology Teacher"));
        assert!(!is_data_related("Dataset Curator"));
    }

    #[test]
    fn filters_are_ordered_subsets() {
        let rows: Vec<_> = ["Data Analyst", "Kế Toán", "BI Developer", "Phân Tích Tài Chính", "Driver"]
            .into_iter()
            .map(titled)
            .collect();

        let data = filter_data_jobs(&rows);
        let titles: Vec<_> = data.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Data Analyst", "BI Developer", "Phân Tích Tài Chính"]);
        assert!(data.iter().all(|r| rows.contains(r)));

        let analyst = filter_analyst_jobs(&data);
        assert_eq!(analyst.len(), 2);
        assert!(analyst.iter().all(|r| is_data_related(&r.title)));
    }
}
