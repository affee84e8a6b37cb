// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications for CareerViet. Each spec focuses on
//! one kind of page and encodes *where the data lives in the HTML* and *how to
//! extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of search-result listings and job detail pages.
//! - **Selector choice & precedence**: every field has an ordered list of
//!   selectors, then heading-based fallbacks, then a last-resort heuristic.
//! - **Tolerant extraction** through `core::html` helpers over `scraper`
//!   (whitespace-collapsed text, first-match selector lists, sibling walks).
//! - **Fixed placeholders** for absent fields so the CSV shape never changes.
//!
//! ## What does **not** live here
//! - **Networking, pacing, retries**: `core::net::Fetcher` and `scrape::collect_postings`.
//! - **Persistence**: `store::save_records`.
//! - **Normalization** (title case, salaries, dates): the `clean` stage.
//!
//! ## Typical call chain
//! ```text
//! runner / GUI → scrape::collect_postings → Fetcher::get(page)
//!                                        → specs::listing::parse_listing
//!                                        → Fetcher::get(detail)
//!                                        → specs::detail::parse_detail
//! ```
//!
//! ## Current specs
//! - `listing` – pagination URLs and job cards (`div.job-item`).
//! - `detail` – metadata, description and requirements of a single job page.
//!
//! ## Testing notes
//! Specs are tested **offline** against captured-style HTML fixtures.
//!
//! In short: **`specs` knows how to read the pages.** Other layers decide when to
//! fetch, how to store, and what to do with the rows.
pub mod detail;
pub mod listing;
