// src/gui/router.rs
use crate::config::state::PageKind::{self, *};

use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::overview::PAGE,
    &pages::distribution::PAGE,
    &pages::salary::PAGE,
    &pages::skills::PAGE,
    &pages::companies::PAGE,
    &pages::raw_data::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        Overview => &pages::overview::PAGE,
        Distribution => &pages::distribution::PAGE,
        Salary => &pages::salary::PAGE,
        Skills => &pages::skills::PAGE,
        Companies => &pages::companies::PAGE,
        RawData => &pages::raw_data::PAGE,
    }
}

pub fn index_of(kind: PageKind) -> usize {
    PAGES.iter().position(|p| p.kind() == kind).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_routes_to_its_page() {
        for (i, page) in all_pages().iter().enumerate() {
            assert_eq!(page_for(page.kind()).title(), page.title());
            assert_eq!(index_of(page.kind()), i);
        }
        assert_eq!(all_pages().len(), 6);
    }
}
