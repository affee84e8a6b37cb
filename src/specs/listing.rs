// src/specs/listing.rs
//! Scraping *spec* for search-result listing pages.
//!
//! - Page 1 is the search URL itself; page N is `<stem>-trang-N-vi.html`.
//! - Every job card is a `div.job-item` (badged cards carry an extra class).
//! - A card yields a `JobPosting` with the listing fields filled; the detail
//!   fields stay empty until `specs::detail` fills them.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

use crate::config::consts::SITE_ROOT;
use crate::core::html::{first, first_text, sel, text_of};
use crate::core::sanitize::{normalize_ws, strip_new_badge};
use crate::error::Result;
use crate::posting::JobPosting;

pub const TITLE_NOT_FOUND: &str = "Title not found";
pub const COMPANY_NOT_FOUND: &str = "Company not found";
pub const LOCATION_NOT_FOUND: &str = "Location not found";
pub const SALARY_NOT_FOUND: &str = "Salary not found";
pub const UPDATE_NOT_FOUND: &str = "Update time not found";
pub const EXPIRE_NOT_FOUND: &str = "Expire date not found";

static PAGED_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*)-trang-\d+(-vi\.html)$").unwrap());

/// Listing URLs for pages `1..=max_pages`. A base that already points at
/// page K is rewound to page 1. Unknown URL shapes are fetched alone.
pub fn pagination_urls(base: &str, max_pages: usize) -> Vec<String> {
    let stem = if let Some(caps) = PAGED_URL.captures(base) {
        caps[1].to_string()
    } else if base.ends_with("-vi.html") && !base.contains("trang-") {
        base.trim_end_matches("-vi.html").to_string()
    } else {
        return vec![s!(base)];
    };

    let mut urls = vec![join!(&stem, "-vi.html")];
    for page in 2..=max_pages {
        urls.push(format!("{stem}-trang-{page}-vi.html"));
    }
    urls
}

/// Absolute job link, or `None` when the card has no usable href.
fn absolute_link(href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        None
    } else if href.starts_with('/') {
        Some(join!(SITE_ROOT, href))
    } else {
        Some(s!(href))
    }
}

/// Job cards on one listing page, in page order. Cards without a link and
/// repeated links are skipped.
pub fn parse_listing(html: &str) -> Result<Vec<JobPosting>> {
    let doc = Html::parse_document(html);
    let card_sel = sel("div.job-item")?;
    let time_li = sel("div.time li")?;
    let time_tag = sel("time")?;
    let welfare_li = sel("ul.welfare li")?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for card in doc.select(&card_sel) {
        let Some(link) = first(card, "a.job_link")?
            .and_then(|a| a.value().attr("href"))
            .and_then(absolute_link)
        else {
            continue;
        };
        if !seen.insert(link.clone()) {
            continue;
        }

        let title = first(card, "div.title")?
            .map(|t| strip_new_badge(&t.text().collect::<String>()))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| s!(TITLE_NOT_FOUND));

        let salary = first_text(card, "div.salary")?
            .map(|t| normalize_ws(&t.replace("Lương:", "")))
            .unwrap_or_else(|| s!(SALARY_NOT_FOUND));

        let mut date = s!(UPDATE_NOT_FOUND);
        let mut expire = s!(EXPIRE_NOT_FOUND);
        for li in card.select(&time_li) {
            let text = text_of(li);
            let stamp = li.select(&time_tag).next().map(text_of);
            if text.contains("Cập nhật") && date == UPDATE_NOT_FOUND {
                if let Some(t) = stamp { date = t; }
            } else if text.contains("Hạn nộp") && expire == EXPIRE_NOT_FOUND {
                if let Some(t) = stamp { expire = t; }
            }
        }

        let welfare = card
            .select(&welfare_li)
            .map(text_of)
            .filter(|w| !w.is_empty())
            .collect();

        out.push(JobPosting {
            title,
            company: first_text(card, "a.company-name")?.unwrap_or_else(|| s!(COMPANY_NOT_FOUND)),
            location: first(card, "div.location")?
                .map(|l| l.text().collect::<String>().trim().to_string())
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| s!(LOCATION_NOT_FOUND)),
            salary,
            date,
            link,
            expire,
            welfare,
            ..Default::default()
        });
    }

    logd!("Listing: {} job cards", out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_from_first_page() {
        let urls = pagination_urls("https://careerviet.vn/viec-lam/data-k-vi.html", 3);
        assert_eq!(
            urls,
            vec![
                "https://careerviet.vn/viec-lam/data-k-vi.html",
                "https://careerviet.vn/viec-lam/data-k-trang-2-vi.html",
                "https://careerviet.vn/viec-lam/data-k-trang-3-vi.html",
            ]
        );
    }

    #[test]
    fn pagination_rewinds_paged_base() {
        let urls = pagination_urls("https://careerviet.vn/viec-lam/data-k-trang-4-vi.html", 2);
        assert_eq!(urls[0], "https://careerviet.vn/viec-lam/data-k-vi.html");
        assert_eq!(urls[1], "https://careerviet.vn/viec-lam/data-k-trang-2-vi.html");
    }

    #[test]
    fn pagination_unknown_shape_is_base_only() {
        assert_eq!(pagination_urls("https://example.com/jobs", 5), vec!["https://example.com/jobs"]);
    }

    const CARDS: &str = r#"
      <div class="job-item has-badge">
        <div class="title"><h2>Data Analyst
          (Mới)</h2></div>
        <a class="company-name" href="/c/1">Công ty ABC</a>
        <a class="job_link" href="/vi/tim-viec-lam/data-analyst.35B1.html">x</a>
        <div class="location">Hà Nội
Hồ Chí Minh</div>
        <div class="salary">Lương: 15 Tr - 25 Tr VND</div>
        <div class="time"><ul>
          <li>Cập nhật: <time>05-03-2025</time></li>
          <li>Hạn nộp: <time>Còn 12 ngày</time></li>
        </ul></div>
        <ul class="welfare"><li>Laptop</li><li> Du lịch </li></ul>
      </div>
      <div class="job-item">
        <div class="title">BI Engineer</div>
        <a class="job_link" href="https://careerviet.vn/vi/tim-viec-lam/bi.2.html">x</a>
      </div>
      <div class="job-item">
        <div class="title">Duplicate</div>
        <a class="job_link" href="/vi/tim-viec-lam/data-analyst.35B1.html">x</a>
      </div>
      <div class="job-item"><div class="title">No link</div></div>
    "#;

    #[test]
    fn parses_cards_with_fields_and_placeholders() {
        let jobs = parse_listing(CARDS).unwrap();
        assert_eq!(jobs.len(), 2);

        let a = &jobs[0];
        assert_eq!(a.title, "Data Analyst");
        assert_eq!(a.company, "Công ty ABC");
        assert_eq!(a.link, "https://careerviet.vn/vi/tim-viec-lam/data-analyst.35B1.html");
        assert_eq!(a.location, "Hà Nội\nHồ Chí Minh");
        assert_eq!(a.salary, "15 Tr - 25 Tr VND");
        assert_eq!(a.date, "05-03-2025");
        assert_eq!(a.expire, "Còn 12 ngày");
        assert_eq!(a.welfare, vec![s!("Laptop"), s!("Du lịch")]);

        let b = &jobs[1];
        assert_eq!(b.company, COMPANY_NOT_FOUND);
        assert_eq!(b.salary, SALARY_NOT_FOUND);
        assert_eq!(b.date, UPDATE_NOT_FOUND);
        assert!(b.welfare.is_empty());
    }
}
