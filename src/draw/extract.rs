// src/draw/extract.rs
//
// Reads a saved draw page into `MatchRecord`s, in document order.
//
// Expected shape (one per match, rounds concatenated left to right):
//
// ```text
// .draw-item
//   .stats-item                  side A
//     .player-info .name a       player link (href → profile slug, text → "C. Alcaraz (1)")
//     .player-info .country use  href="...#flag-esp"
//     .winner .icon-checkmark    only on the winning side
//     .scores .score-item        <span>games</span><span>tiebreak?</span>
//   .stats-item                  side B
// ```
//
// Byes and items without two sides never reach the slot assignment.

use scraper::{ElementRef, Html};

use crate::config::consts::BYE_MARKER;
use crate::core::html::{child_spans, href_of, text_of, DrawSelectors};
use crate::core::sanitize::{digits_only, player_slug, strip_seed, title_case_slug};
use crate::flags;
use super::types::{MatchRecord, SetResult, Side, Winner};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub doubles: bool,
    /// First `.draw-header` on the page, e.g. "Round of 32".
    pub round_label: Option<String>,
    pub matches: Vec<MatchRecord>,
    pub byes: usize,
    pub malformed: usize,
}

/// Parse `html` and extract every playable draw item.
pub fn parse_doc(html: &str, doubles: bool, use_full_name: bool) -> Extraction {
    let doc = Html::parse_document(html);
    extract(&doc, doubles, use_full_name)
}

pub fn extract(doc: &Html, doubles: bool, use_full_name: bool) -> Extraction {
    let sel = DrawSelectors::new();
    let mut out = Extraction {
        doubles,
        round_label: doc.select(&sel.header).next().map(text_of).filter(|t| !t.is_empty()),
        ..Extraction::default()
    };

    for (i, item) in doc.select(&sel.item).enumerate() {
        if is_bye(item, &sel) {
            logd!("Extract: item {} is a bye, skipping", i + 1);
            out.byes += 1;
            continue;
        }

        let sides: Vec<ElementRef> = item.select(&sel.side).collect();
        if sides.len() < 2 {
            logd!("Extract: item {} has {} side(s), skipping", i + 1, sides.len());
            out.malformed += 1;
            continue;
        }

        let per_side = if doubles { 2 } else { 1 };
        out.matches.push(MatchRecord {
            side_a: extract_side(sides[0], &sel, per_side, use_full_name),
            side_b: extract_side(sides[1], &sel, per_side, use_full_name),
            sets: extract_sets(item, &sel),
            winner: match (has_winner_mark(sides[0], &sel), has_winner_mark(sides[1], &sel)) {
                (true, false) => Winner::SideA,
                (false, true) => Winner::SideB,
                _ => Winner::Undecided,
            },
        });
    }

    logf!(
        "Extract: {} match(es), {} bye(s), {} malformed, doubles={}",
        out.matches.len(), out.byes, out.malformed, doubles
    );
    out
}

/* ---------------- helpers ---------------- */

fn is_bye(item: ElementRef<'_>, sel: &DrawSelectors) -> bool {
    item.select(&sel.name)
        .any(|n| text_of(n).eq_ignore_ascii_case(BYE_MARKER))
}

fn has_winner_mark(side: ElementRef<'_>, sel: &DrawSelectors) -> bool {
    side.select(&sel.winner).next().is_some()
}

fn player_name(link: ElementRef<'_>, use_full_name: bool) -> String {
    let display = || strip_seed(&text_of(link));
    if !use_full_name {
        return display();
    }
    // Links without a profile slug (qualifier placeholders) keep their text.
    href_of(link)
        .and_then(player_slug)
        .map(title_case_slug)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(display)
}

/// Name and flag are read from the same `.player-info` block so a missing
/// flag can't shift a partner's flag onto the wrong player.
fn extract_side(side: ElementRef<'_>, sel: &DrawSelectors, per_side: usize, use_full_name: bool) -> Side {
    let mut out = Side::default();
    for info in side.select(&sel.player_info).take(per_side) {
        let name = match info.select(&sel.player_link).next() {
            Some(link) => player_name(link, use_full_name),
            None => info.select(&sel.name).next().map(|n| strip_seed(&text_of(n))).unwrap_or_default(),
        };
        let flag = info
            .select(&sel.flag)
            .next()
            .and_then(|u| href_of(u).and_then(flags::from_href))
            .unwrap_or_default();
        out.players.push(name);
        out.flags.push(flag);
    }
    out
}

/// (games, tiebreak) for each `.score-item` of one side.
fn side_scores(block: ElementRef<'_>, sel: &DrawSelectors) -> Vec<(String, String)> {
    block
        .select(&sel.score_item)
        .map(|cell| {
            let spans = child_spans(cell);
            let games = match spans.first() {
                Some(span) => digits_only(&text_of(*span)),
                None => digits_only(&text_of(cell)),
            };
            let tiebreak = spans.get(1).map(|t| digits_only(&text_of(*t))).unwrap_or_default();
            (games, tiebreak)
        })
        .collect()
}

/// Pair side A's and side B's score cells by position.
fn extract_sets(item: ElementRef<'_>, sel: &DrawSelectors) -> Vec<SetResult> {
    let blocks: Vec<ElementRef> = item.select(&sel.scores).collect();
    if blocks.len() < 2 {
        return Vec::new();
    }
    let a = side_scores(blocks[0], sel);
    let b = side_scores(blocks[1], sel);

    let empty = (s!(), s!());
    (0..a.len().max(b.len()))
        .map(|i| {
            let (score_a, tiebreak_a) = a.get(i).unwrap_or(&empty).clone();
            let (score_b, tiebreak_b) = b.get(i).unwrap_or(&empty).clone();
            SetResult { score_a, score_b, tiebreak_a, tiebreak_b }
        })
        .filter(|set| !set.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side(name: &str, slug: &str, flag: &str, won: bool, scores: &[(&str, &str)]) -> String {
        let cells: String = scores
            .iter()
            .map(|(g, tb)| {
                if tb.is_empty() {
                    format!("<div class=\"score-item\"><span>{g}</span></div>")
                } else {
                    format!("<div class=\"score-item\"><span>{g}</span><span>{tb}</span></div>")
                }
            })
            .collect();
        let winner = if won { "<div class=\"winner\"><i class=\"icon-checkmark\"></i></div>" } else { "" };
        format!(
            r##"<div class="stats-item">
                 <div class="player-info">
                   <div class="name"><a href="/en/players/{slug}/x000/overview">{name}</a></div>
                   <div class="country"><svg><use href="/assets/flags.svg#flag-{flag}"></use></svg></div>
                 </div>
                 {winner}
                 <div class="scores">{cells}</div>
               </div>"##
        )
    }

    fn page(items: &[String]) -> String {
        let body: String = items
            .iter()
            .map(|i| format!("<div class=\"draw-item\"><div class=\"draw-stats\">{i}</div></div>"))
            .collect();
        format!("<html><body><div class=\"atp-draw-container\"><div class=\"draw-header\">Round of 32</div>{body}</div></body></html>")
    }

    #[test]
    fn parses_one_singles_match() {
        let html = page(&[format!(
            "{}{}",
            side("C. Alcaraz <span>(1)</span>", "carlos-alcaraz", "ESP", true, &[("6", ""), ("7", "")]),
            side("J. Sinner", "jannik-sinner", "ita", false, &[("4", ""), ("6", "5")]),
        )]);

        let out = parse_doc(&html, false, false);
        assert_eq!(out.round_label.as_deref(), Some("Round of 32"));
        assert_eq!(out.matches.len(), 1);

        let m = &out.matches[0];
        assert_eq!(m.side_a.players, vec!["C. Alcaraz"]);
        assert_eq!(m.side_a.flags, vec!["es"]);
        assert_eq!(m.side_b.players, vec!["J. Sinner"]);
        assert_eq!(m.side_b.flags, vec!["it"]);
        assert_eq!(m.winner, Winner::SideA);
        assert_eq!(m.sets, vec![
            SetResult::new("6", "4"),
            SetResult::new("7", "6").with_tiebreak("", "5"),
        ]);
    }

    #[test]
    fn full_names_come_from_profile_slug() {
        let html = page(&[format!(
            "{}{}",
            side("F. Auger-Aliassime (8)", "felix-auger-aliassime", "can", false, &[]),
            side("A. de Minaur", "alex-de-minaur", "aus", false, &[]),
        )]);
        let m = &parse_doc(&html, false, true).matches[0];
        assert_eq!(m.side_a.player(0), "Felix Auger Aliassime");
        assert_eq!(m.side_b.player(0), "Alex De Minaur");
        assert_eq!(m.winner, Winner::Undecided);
        assert!(m.sets.is_empty());
    }

    #[test]
    fn byes_and_one_sided_items_are_skipped() {
        let bye = format!(
            "{}<div class=\"stats-item\"><div class=\"player-info\"><div class=\"name\">Bye</div></div></div>",
            side("N. Djokovic (1)", "novak-djokovic", "srb", false, &[]),
        );
        let lonely = side("Q. Ualifier", "q-ualifier", "usa", false, &[]);
        let real = format!(
            "{}{}",
            side("A. Rublev", "andrey-rublev", "rus", false, &[("6", "")]),
            side("K. Khachanov", "karen-khachanov", "rus", true, &[("7", "")]),
        );

        let out = parse_doc(&page(&[bye, lonely, real]), false, false);
        assert_eq!(out.byes, 1);
        assert_eq!(out.malformed, 1);
        assert_eq!(out.matches.len(), 1);
        assert_eq!(out.matches[0].side_a.player(0), "A. Rublev");
        assert_eq!(out.matches[0].winner, Winner::SideB);
    }

    #[test]
    fn both_sides_marked_is_undecided() {
        let html = page(&[format!(
            "{}{}",
            side("A", "a", "fra", true, &[]),
            side("B", "b", "fra", true, &[]),
        )]);
        assert_eq!(parse_doc(&html, false, false).matches[0].winner, Winner::Undecided);
    }

    #[test]
    fn empty_set_pairs_are_dropped_but_one_sided_kept() {
        let html = page(&[format!(
            "{}{}",
            side("A", "a", "fra", false, &[("6", ""), ("3", ""), ("", "")]),
            side("B", "b", "ger", false, &[("2", ""), ("", ""), ("", "")]),
        )]);
        let m = &parse_doc(&html, false, false).matches[0];
        assert_eq!(m.sets, vec![SetResult::new("6", "2"), SetResult::new("3", "")]);
    }

    #[test]
    fn doubles_take_two_players_per_side() {
        let pair = |a: &str, b: &str, won: bool| {
            let winner = if won { "<div class=\"winner\"><i class=\"icon-checkmark\"></i></div>" } else { "" };
            format!(
                r##"<div class="stats-item">
                     <div class="player-info"><div class="name"><a href="/en/players/{a}/x/overview">{a}</a></div>
                       <div class="country"><svg><use href="#flag-ned"></use></svg></div></div>
                     <div class="player-info"><div class="name"><a href="/en/players/{b}/y/overview">{b}</a></div>
                       <div class="country"><svg><use href="#flag-gbr"></use></svg></div></div>
                     {winner}
                   </div>"##
            )
        };
        let html = page(&[format!("{}{}", pair("wesley-koolhof", "neal-skupski", true), pair("x-one", "y-two", false))]);

        let out = parse_doc(&html, true, true);
        let m = &out.matches[0];
        assert!(out.doubles);
        assert_eq!(m.side_a.players, vec!["Wesley Koolhof", "Neal Skupski"]);
        assert_eq!(m.side_a.flags, vec!["nl", "gb"]);
        assert_eq!(m.winner, Winner::SideA);

        // Same page read as singles keeps only the first player.
        let single = parse_doc(&html, false, true);
        assert_eq!(single.matches[0].side_a.players, vec!["Wesley Koolhof"]);
    }

    #[test]
    fn doubles_flags_stay_with_their_player() {
        let info = |slug: &str, flag: &str| {
            format!(
                r##"<div class="player-info"><div class="name"><a href="/en/players/{slug}/x/overview">{slug}</a></div>
                     <div class="country">{flag}</div></div>"##
            )
        };
        let side_a = format!(
            "<div class=\"stats-item\">{}{}</div>",
            info("andrey-rublev", ""),
            info("neal-skupski", r##"<svg><use href="#flag-gbr"></use></svg>"##),
        );
        let side_b = format!(
            "<div class=\"stats-item\">{}{}</div>",
            info("rajeev-ram", r##"<svg><use href="/assets/flags.svg"></use></svg>"##),
            info("joe-salisbury", r##"<svg><use href="#flag-gbr"></use></svg>"##),
        );

        let m = &parse_doc(&page(&[format!("{side_a}{side_b}")]), true, true).matches[0];
        assert_eq!(m.side_a.players, vec!["Andrey Rublev", "Neal Skupski"]);
        assert_eq!(m.side_a.flags, vec!["", "gb"]);
        assert_eq!(m.side_b.flags, vec!["", "gb"]);
        assert_eq!(m.side_a.flag(1), "gb");
    }
}
