// src/scrape/mod.rs
mod scrape;

pub use scrape::collect_postings;
pub use scrape::merge_pages;
pub use scrape::scrape_page;
