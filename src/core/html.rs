// src/core/html.rs
//
// Thin helpers over `scraper` for the draw page. Selectors are compiled once per
// extraction run; all lookups are scoped to a draw item or one of its sides.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

fn css(s: &str) -> Selector {
    // Only called with the literals below.
    Selector::parse(s).unwrap_or_else(|e| panic!("bad selector {s:?}: {e:?}"))
}

pub struct DrawSelectors {
    pub header: Selector,
    pub item: Selector,
    pub name: Selector,
    pub side: Selector,
    pub player_info: Selector,
    pub player_link: Selector,
    pub flag: Selector,
    pub winner: Selector,
    pub scores: Selector,
    pub score_item: Selector,
}

impl DrawSelectors {
    pub fn new() -> Self {
        Self {
            header: css(".draw-header"),
            item: css(".draw-item"),
            name: css(".name"),
            side: css(".stats-item"),
            player_info: css(".player-info"),
            player_link: css(".name a"),
            flag: css(".country use"),
            winner: css(".winner .icon-checkmark"),
            scores: css(".scores"),
            score_item: css(".score-item"),
        }
    }
}

impl Default for DrawSelectors {
    fn default() -> Self {
        Self::new()
    }
}

/// Visible text of an element, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// `href`, falling back to the legacy `xlink:href` SVG attribute.
pub fn href_of<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    let v = el.value();
    v.attr("href").or_else(|| v.attr("xlink:href"))
}

/// Direct `<span>` children of a score cell, in order.
pub fn child_spans<'a>(el: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| c.value().name() == "span")
        .collect()
}
