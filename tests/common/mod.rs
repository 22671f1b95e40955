// tests/common/mod.rs
//
// Inline draw-page fixtures. Markup mirrors a saved ATP draw page closely enough
// for the extractor's selectors.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

pub struct Player<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub flag: &'a str,
}

pub const fn p<'a>(name: &'a str, slug: &'a str, flag: &'a str) -> Player<'a> {
    Player { name, slug, flag }
}

fn player_info(pl: &Player) -> String {
    format!(
        r##"<div class="player-info">
              <div class="name"><a href="/en/players/{}/x000/overview">{}</a></div>
              <div class="country"><svg><use href="/assets/flags.svg#flag-{}"></use></svg></div>
            </div>"##,
        pl.slug, pl.name, pl.flag
    )
}

/// One `.stats-item`. `scores` are (games, tiebreak) per set; empty tiebreak → one span.
pub fn side(players: &[Player], won: bool, scores: &[(&str, &str)]) -> String {
    let info: String = players.iter().map(player_info).collect();
    let winner = if won { r#"<div class="winner"><i class="icon-checkmark"></i></div>"# } else { "" };
    let cells: String = scores
        .iter()
        .map(|(g, tb)| match *tb {
            "" => format!(r#"<div class="score-item"><span>{g}</span></div>"#),
            tb => format!(r#"<div class="score-item"><span>{g}</span><span>{tb}</span></div>"#),
        })
        .collect();
    format!(r#"<div class="stats-item">{info}{winner}<div class="scores">{cells}</div></div>"#)
}

pub fn item(a: String, b: String) -> String {
    format!(r#"<div class="draw-item"><div class="draw-stats">{a}{b}</div></div>"#)
}

pub fn bye(pl: Player) -> String {
    let empty = r#"<div class="stats-item"><div class="player-info"><div class="name">Bye</div></div></div>"#;
    item(side(&[pl], false, &[]), empty.to_string())
}

pub fn page(items: &[String], doubles: bool) -> String {
    let class = if doubles { "atp-draw-container atp-draw-container--doubles" } else { "atp-draw-container" };
    format!(
        r#"<!DOCTYPE html><html><body><div class="{class}"><div class="draw-header">Round of 32</div>{}</div></body></html>"#,
        items.concat()
    )
}

/// Match `n` of a synthetic singles draw: "A{n}" beats "B{n}" 6-4 6-3.
pub fn numbered_match(n: usize) -> String {
    let (a, b) = (format!("A{n}"), format!("B{n}"));
    item(
        side(&[p(&a, "a", "fra")], true, &[("6", ""), ("6", "")]),
        side(&[p(&b, "b", "ger")], false, &[("4", ""), ("3", "")]),
    )
}

pub fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("draw2wiki_it_{name}"));
    fs::write(&path, contents).unwrap();
    path
}
