// src/core/html.rs
//
// Small helpers over `scraper` so page specs read as selector lists.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;
use crate::error::{Error, Result};

pub fn sel(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::Selector(s!(css)))
}

/// All descendant text, space separated and whitespace-collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<Vec<_>>().join(" "))
}

/// First element matching `css` under `scope`.
pub fn first<'a>(scope: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>> {
    Ok(scope.select(&sel(css)?).next())
}

/// Text of the first element matching `css` under `scope`, if non-empty.
pub fn first_text(scope: ElementRef<'_>, css: &str) -> Result<Option<String>> {
    Ok(first(scope, css)?.map(text_of).filter(|t| !t.is_empty()))
}

/// First document element matching any selector, tried in order.
pub fn first_of<'a>(doc: &'a Html, selectors: &[&str]) -> Result<Option<ElementRef<'a>>> {
    for css in selectors {
        if let Some(el) = doc.select(&sel(css)?).next() {
            return Ok(Some(el));
        }
    }
    Ok(None)
}

/// Tag name helper for sibling walks.
pub fn is_heading(el: ElementRef<'_>) -> bool {
    matches!(el.value().name(), "h1" | "h2" | "h3" | "h4" | "strong" | "b")
}

/// Following element siblings of `el`, skipping text nodes.
pub fn next_elements(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.next_siblings().filter_map(ElementRef::wrap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_of_collapses_whitespace() {
        let doc = Html::parse_fragment("<div> Data \n <b>Analyst</b>\t</div>");
        let div = doc.select(&sel("div").unwrap()).next().unwrap();
        assert_eq!(text_of(div), "Data Analyst");
    }

    #[test]
    fn first_of_tries_in_order() {
        let doc = Html::parse_document(r#"<div class="b">two</div><div class="c">three</div>"#);
        let el = first_of(&doc, &["div.a", "div.c", "div.b"]).unwrap().unwrap();
        assert_eq!(text_of(el), "three");
        assert!(first_of(&doc, &["span"]).unwrap().is_none());
    }

    #[test]
    fn bad_selector_is_an_error() {
        assert!(matches!(sel("div[["), Err(Error::Selector(_))));
    }
}
