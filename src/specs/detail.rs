// src/specs/detail.rs
//! Scraping *spec* for a single job detail page.
//!
//! Three independent extractions, each with its own fallback ladder:
//! - **metadata** (level, type, experience, industry): labelled items in the
//!   first known info container → two-cell table rows → `strong/b/label/dt`
//!   labels followed by their value.
//! - **description**: known containers (> 100 chars) → the section under a
//!   description heading → the three longest text blocks.
//! - **requirements**: known containers (> 50 chars) → the section under a
//!   requirements heading → a bulleted "requirements:" run inside the description.
//!
//! Anything that ends up with fewer than 20 ASCII letters is replaced by a
//! fixed placeholder.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node};

use crate::config::consts::{
    DESCRIPTION_UNAVAILABLE, DETAILS_UNAVAILABLE, NOT_AVAILABLE, REQUIREMENTS_IN_DESCRIPTION,
    REQUIREMENTS_UNAVAILABLE,
};
use crate::core::html::{first_of, is_heading, next_elements, sel, text_of};
use crate::core::sanitize::{ascii_letter_count, normalize_ws};
use crate::error::Result;
use crate::posting::JobPosting;

const INFO_SELECTORS: &[&str] = &[
    "div.job-info", "ul.job-meta", "div.job-metadata",
    "div.job-overview", "ul.overview-items", "div.job-details",
    "div.meta-job-detail", "div.detail-box", "div.detail-content",
    "div.job-detail-content",
];

const DESC_SELECTORS: &[&str] = &[
    "div.job-description", "div.job-detail-content", "div.content-tab",
    "div#job-description", ".job-content", ".detail-content", ".job-detail",
    "div.description", "div.job-info", ".job-overview", "div.job-data",
    ".job-details-content", "article.job-content", "section.job-detail",
];

const REQ_SELECTORS: &[&str] = &[
    "div.job-requirements", "div#job-requirements", ".requirements",
    "div.qualifications", "div.candidate-profile", ".required-skills",
    "#qualifications", "div.skill-requirements", ".candidate-requirements",
];

const DESC_HEADINGS: &[&str] = &["mô tả công việc", "job description", "about the job", "job brief", "job details"];
const DESC_STOPS: &[&str] = &["yêu cầu", "requirements", "qualifications", "benefits", "quyền lợi"];
const REQ_HEADINGS: &[&str] = &[
    "yêu cầu", "requirements", "qualifications", "skills", "experience required",
    "what we're looking for", "candidate requirements", "kỹ năng",
];
const REQ_STOPS: &[&str] = &["benefits", "quyền lợi", "how to apply", "nộp hồ sơ"];

const DESC_MIN_CHARS: usize = 100;
const REQ_MIN_CHARS: usize = 50;
const BLOCK_MIN_CHARS: usize = 50;
const MIN_ASCII_LETTERS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Level,
    JobType,
    Experience,
    Industry,
}

/// Label terms per field, checked in this order.
const FIELD_TERMS: &[(Field, &[&str])] = &[
    (Field::Level, &["cấp bậc", "chức vụ", "level"]),
    (Field::JobType, &["hình thức", "job type"]),
    (Field::Experience, &["kinh nghiệm", "experience"]),
    (Field::Industry, &["ngành nghề", "industry"]),
];

static LEVEL_RX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:cấp bậc|chức vụ|position level|level)[:\s]+([^•\-,.]*)").unwrap());
static TYPE_RX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:hình thức|job type|employment type)[:\s]+([^•\-,.]*)").unwrap());
static EXP_RX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:kinh nghiệm|experience)[:\s]+([^•\-,.]*)").unwrap());
static INDUSTRY_RX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:ngành nghề|industry|field)[:\s]+([^•\-,.]*)").unwrap());

static REQ_IN_DESC_RX: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"(?s)(?:yêu cầu|requirements|qualifications|what we're looking for)[\s:]+(.*?)(?:quyền lợi|benefits|what we offer|how to apply|$)").unwrap(),
        Regex::new(r"(?s)(?:kỹ năng|skills required|experience needed)[\s:]+(.*?)(?:quyền lợi|benefits|what we offer|how to apply|$)").unwrap(),
    ]
});

/// Detail-page fields of a posting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobDetail {
    pub description: String,
    pub requirements: String,
    pub level: String,
    pub job_type: String,
    pub experience: String,
    pub industry: String,
}

impl JobDetail {
    /// Stand-in for a detail page that could not be fetched.
    pub fn unavailable() -> Self {
        Self {
            description: s!(DETAILS_UNAVAILABLE),
            requirements: s!(DETAILS_UNAVAILABLE),
            level: s!(NOT_AVAILABLE),
            job_type: s!(NOT_AVAILABLE),
            experience: s!(NOT_AVAILABLE),
            industry: s!(NOT_AVAILABLE),
        }
    }

    pub fn apply_to(self, job: &mut JobPosting) {
        job.description = self.description;
        job.requirements = self.requirements;
        job.level = self.level;
        job.job_type = self.job_type;
        job.experience = self.experience;
        job.industry = self.industry;
    }

    fn slot(&mut self, f: Field) -> &mut String {
        match f {
            Field::Level => &mut self.level,
            Field::JobType => &mut self.job_type,
            Field::Experience => &mut self.experience,
            Field::Industry => &mut self.industry,
        }
    }

    fn missing_meta(&self) -> bool {
        [&self.level, &self.job_type, &self.experience, &self.industry]
            .iter()
            .any(|v| v.as_str() == NOT_AVAILABLE)
    }
}

pub fn parse_detail(html: &str) -> Result<JobDetail> {
    let doc = Html::parse_document(html);

    let mut detail = JobDetail {
        description: String::new(),
        requirements: String::new(),
        level: s!(NOT_AVAILABLE),
        job_type: s!(NOT_AVAILABLE),
        experience: s!(NOT_AVAILABLE),
        industry: s!(NOT_AVAILABLE),
    };

    meta_from_container(&doc, &mut detail)?;
    if detail.missing_meta() {
        meta_from_tables(&doc, &mut detail)?;
        meta_from_labels(&doc, &mut detail)?;
    }

    detail.description = extract_description(&doc)?;
    detail.requirements = extract_requirements(&doc, &detail.description)?;
    Ok(detail)
}

fn field_for(label: &str) -> Option<Field> {
    FIELD_TERMS
        .iter()
        .find(|(_, terms)| terms.iter().any(|t| label.contains(t)))
        .map(|(f, _)| *f)
}

// ---------------- metadata ----------------

fn meta_from_container(doc: &Html, d: &mut JobDetail) -> Result<()> {
    let Some(info) = first_of(doc, INFO_SELECTORS)? else {
        return Ok(());
    };
    let items = sel("li, div, span")?;
    let patterns: [(Field, &Regex); 4] = [
        (Field::Level, &*LEVEL_RX),
        (Field::JobType, &*TYPE_RX),
        (Field::Experience, &*EXP_RX),
        (Field::Industry, &*INDUSTRY_RX),
    ];

    for item in info.select(&items) {
        let text = text_of(item).to_lowercase();
        for (field, rx) in patterns {
            if let Some(c) = rx.captures(&text) {
                let value = c[1].trim();
                if !value.is_empty() {
                    *d.slot(field) = s!(value);
                }
            }
        }
    }
    Ok(())
}

fn meta_from_tables(doc: &Html, d: &mut JobDetail) -> Result<()> {
    let rows = sel("table tr")?;
    let cells = sel("th, td")?;
    for row in doc.select(&rows) {
        let mut it = row.select(&cells);
        let (Some(head), Some(val)) = (it.next(), it.next()) else {
            continue;
        };
        if let Some(field) = field_for(&text_of(head).to_lowercase()) {
            *d.slot(field) = text_of(val);
        }
    }
    Ok(())
}

/// Text following a label: its next sibling node, else the parent's next element.
fn value_after(label: ElementRef<'_>) -> String {
    if let Some(node) = label.next_sibling() {
        let text = match node.value() {
            Node::Text(t) => normalize_ws(t),
            Node::Element(_) => ElementRef::wrap(node).map(text_of).unwrap_or_default(),
            _ => String::new(),
        };
        if !text.is_empty() {
            return text;
        }
    }
    label
        .parent()
        .and_then(ElementRef::wrap)
        .and_then(|p| next_elements(p).next())
        .map(text_of)
        .unwrap_or_default()
}

fn meta_from_labels(doc: &Html, d: &mut JobDetail) -> Result<()> {
    let labels = sel("strong, b, label, dt")?;
    for label in doc.select(&labels) {
        let label_text = text_of(label).to_lowercase();
        let Some(field) = field_for(&label_text) else {
            continue;
        };
        if d.slot(field).as_str() != NOT_AVAILABLE {
            continue;
        }
        let value = value_after(label).replace(&label_text, "");
        let value = value.trim_matches(|c: char| matches!(c, ':' | ' ' | '\t' | '\n' | '-'));
        if !value.is_empty() {
            *d.slot(field) = s!(value);
        }
    }
    Ok(())
}

// ---------------- description / requirements ----------------

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// First selector whose text is longer than `min`; otherwise the last non-empty hit.
fn from_selectors(doc: &Html, selectors: &[&str], min: usize) -> Result<String> {
    let mut best = String::new();
    for css in selectors {
        if let Some(el) = doc.select(&sel(css)?).next() {
            best = text_of(el);
            if char_len(&best) > min {
                break;
            }
        }
    }
    Ok(best)
}

/// Text of the elements following the first heading that names `starts`,
/// up to a heading that names one of `stops`.
fn from_heading_section(doc: &Html, starts: &[&str], stops: &[&str]) -> Result<String> {
    let headings = sel("h1, h2, h3, h4, strong, b")?;
    for heading in doc.select(&headings) {
        let text = text_of(heading).to_lowercase();
        if !starts.iter().any(|t| text.contains(t)) {
            continue;
        }
        let mut section = Vec::new();
        for el in next_elements(heading) {
            if is_heading(el) {
                let next = text_of(el).to_lowercase();
                if stops.iter().any(|t| next.contains(t)) {
                    break;
                }
            }
            let content = text_of(el);
            if !content.is_empty() {
                section.push(content);
            }
        }
        if !section.is_empty() {
            return Ok(section.join(" "));
        }
    }
    Ok(String::new())
}

fn longest_blocks(doc: &Html, take: usize) -> Result<String> {
    let blocks = sel("p, div, section")?;
    let mut texts: Vec<String> = doc
        .select(&blocks)
        .map(text_of)
        .filter(|t| char_len(t) > BLOCK_MIN_CHARS)
        .collect();
    texts.sort_by_key(|t| std::cmp::Reverse(char_len(t)));
    texts.truncate(take);
    Ok(texts.join("\n"))
}

fn extract_description(doc: &Html) -> Result<String> {
    let mut text = from_selectors(doc, DESC_SELECTORS, DESC_MIN_CHARS)?;
    if char_len(&text) < DESC_MIN_CHARS {
        let section = from_heading_section(doc, DESC_HEADINGS, DESC_STOPS)?;
        if !section.is_empty() {
            text = section;
        }
    }
    if char_len(&text) < DESC_MIN_CHARS {
        let blocks = longest_blocks(doc, 3)?;
        if !blocks.is_empty() {
            text = blocks;
        }
    }

    let text = normalize_ws(&text);
    if ascii_letter_count(&text) < MIN_ASCII_LETTERS {
        return Ok(s!(DESCRIPTION_UNAVAILABLE));
    }
    Ok(text)
}

/// Bulleted requirements run inside the description text.
fn requirements_in_description(description: &str) -> Option<String> {
    let lower = description.to_lowercase();
    REQ_IN_DESC_RX.iter().find_map(|rx| {
        let run = rx.captures(&lower)?.get(1)?.as_str().trim();
        run.contains(['•', '-', '*']).then(|| s!(run))
    })
}

fn extract_requirements(doc: &Html, description: &str) -> Result<String> {
    let mut text = from_selectors(doc, REQ_SELECTORS, REQ_MIN_CHARS)?;
    if char_len(&text) < REQ_MIN_CHARS {
        let section = from_heading_section(doc, REQ_HEADINGS, REQ_STOPS)?;
        if !section.is_empty() {
            text = section;
        }
    }
    if text.is_empty() && !description.is_empty() {
        if let Some(run) = requirements_in_description(description) {
            text = run;
        }
    }

    let text = normalize_ws(&text);
    if ascii_letter_count(&text) < MIN_ASCII_LETTERS {
        let lower = description.to_lowercase();
        if lower.contains("yêu cầu:") || lower.contains("requirements:") {
            return Ok(s!(REQUIREMENTS_IN_DESCRIPTION));
        }
        return Ok(s!(REQUIREMENTS_UNAVAILABLE));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_DESC: &str = "Analyze sales data, build dashboards in Power BI and present \
        weekly insights to the management team across all regional offices.";

    #[test]
    fn metadata_from_info_container() {
        let html = r#"<div class="job-info"><ul>
            <li>Cấp bậc: Nhân viên</li>
            <li>Hình thức: Nhân viên chính thức</li>
            <li>Kinh nghiệm: 2 - 5 Năm</li>
            <li>Ngành nghề: IT, Ngân hàng</li>
        </ul></div>"#;
        let d = parse_detail(html).unwrap();
        assert_eq!(d.level, "nhân viên");
        assert_eq!(d.job_type, "nhân viên chính thức");
        assert_eq!(d.experience, "2");
        assert_eq!(d.industry, "it");
    }

    #[test]
    fn metadata_falls_back_to_tables_and_labels() {
        let html = r#"<table><tr><th>Job Level</th><td>Senior</td></tr>
            <tr><th>Industry</th><td>Banking</td></tr></table>
            <p><strong>Experience:</strong> 3 years</p>"#;
        let d = parse_detail(html).unwrap();
        assert_eq!(d.level, "Senior");
        assert_eq!(d.industry, "Banking");
        assert_eq!(d.experience, "3 years");
        assert_eq!(d.job_type, NOT_AVAILABLE);
    }

    #[test]
    fn description_and_requirements_from_containers() {
        let html = format!(
            r#"<div class="job-description">{LONG_DESC}</div>
               <div class="job-requirements">SQL, Python and Power BI; strong English communication.</div>"#
        );
        let d = parse_detail(&html).unwrap();
        assert_eq!(d.description, LONG_DESC.split_whitespace().collect::<Vec<_>>().join(" "));
        assert!(d.requirements.starts_with("SQL, Python"));
    }

    #[test]
    fn heading_sections_are_used_when_containers_missing() {
        let html = r#"<body>
            <h3>Mô tả công việc</h3>
            <p>Collect and clean operational data for the supply chain team every week.</p>
            <p>Maintain reporting pipelines and automate recurring Excel reports.</p>
            <h3>Yêu cầu công việc</h3>
            <ul><li>Bachelor degree in statistics</li><li>Good SQL and Python skills</li></ul>
            <h3>Quyền lợi</h3><p>Laptop</p>
        </body>"#;
        let d = parse_detail(html).unwrap();
        assert!(d.description.starts_with("Collect and clean"));
        assert!(d.description.contains("automate recurring"));
        assert!(!d.description.contains("Bachelor"));
        assert!(d.requirements.contains("Good SQL and Python skills"));
        assert!(!d.requirements.contains("Laptop"));
    }

    #[test]
    fn empty_page_gets_placeholders() {
        let d = parse_detail("<html><body><p>Hi</p></body></html>").unwrap();
        assert_eq!(d.description, DESCRIPTION_UNAVAILABLE);
        assert_eq!(d.requirements, REQUIREMENTS_UNAVAILABLE);
        assert_eq!(d.level, NOT_AVAILABLE);
    }

    #[test]
    fn requirements_found_inside_description() {
        let desc = "Build models. Requirements: - SQL - Python - statistics. Benefits: bonus";
        assert_eq!(
            requirements_in_description(desc).as_deref(),
            Some("- sql - python - statistics.")
        );
        assert_eq!(requirements_in_description("no such section here"), None);
    }

    #[test]
    fn unavailable_detail_uses_fixed_messages() {
        let mut job = JobPosting::default();
        JobDetail::unavailable().apply_to(&mut job);
        assert_eq!(job.description, DETAILS_UNAVAILABLE);
        assert_eq!(job.industry, NOT_AVAILABLE);
    }
}
