// src/wiki/render.rs
//
// SlotMap → `{{Bracket|...}}` wikitext.
//
// {{Bracket|Bracket/32|id=XXXXXXXXXX
//
// <!-- Round of 32 -->
// |R1M1={{Match
//     |winner=1
//     |bestof=3
//     |date=...
//     |opponent1={{SoloOpponent|C. Alcaraz|flag=es}}
//     |opponent2={{SoloOpponent|J. Sinner|flag=it}}
//     |map1={{Map|map=Set 1|score1=6|score2=4|finished=true}}
//     ...
//     }}
// |R1M2=
// }}

use crate::config::Options;
use crate::draw::{MatchRecord, NormalizedSet, Side, SlotMap};
use crate::layout::{LayoutSpec, Slot};
use super::builder::{Template, Value};

const MATCH_INDENT: &str = "    ";

fn opponent(side: &Side, doubles: bool) -> Template {
    if doubles {
        Template::inline("DuoOpponent")
            .param("p1", side.player(0))
            .param("p1flag", side.flag(0))
            .param("p2", side.player(1))
            .param("p2flag", side.flag(1))
    } else {
        Template::inline("SoloOpponent")
            .arg(side.player(0))
            .param("flag", side.flag(0))
    }
}

fn map_entry(n: usize, set: NormalizedSet) -> Template {
    Template::inline("Map")
        .param("map", format!("Set {n}"))
        .param("score1", set.score1)
        .param("score2", set.score2)
        .param("finished", set.finished.to_string())
        .param_opt("comment", set.comment)
}

pub fn match_block(record: &MatchRecord, opts: &Options, doubles: bool) -> Template {
    let mut m = Template::block("Match", MATCH_INDENT)
        .param_opt("winner", record.winner.param().map(|w| w.to_string()))
        .param("bestof", opts.best_of_sets.to_string())
        .param("date", Value::Raw(opts.date_format.clone()))
        .param("opponent1", opponent(&record.side_a, doubles))
        .param("opponent2", opponent(&record.side_b, doubles));

    for i in 0..opts.best_of_sets as usize {
        let set = record
            .sets
            .get(i)
            .map(|s| s.normalize(opts.tiebreaks))
            .unwrap_or_else(NormalizedSet::unplayed);
        m.push_param(&format!("map{}", i + 1), map_entry(i + 1, set));
    }
    m
}

pub fn render(layout: &LayoutSpec, slots: &SlotMap, opts: &Options, doubles: bool) -> String {
    let mut bracket = Template::block("Bracket", "")
        .arg(layout.template_id)
        .head_param("id", opts.bracket_id.as_str());

    for round in layout.rounds {
        bracket.push_blank();
        bracket.push_comment(round.label);
        for index in 1..=round.matches {
            let slot = Slot::new(round.round, index);
            let key = slot.to_string();
            match slots.get(slot) {
                Some(placed) => bracket.push_param(&key, match_block(&placed.record, opts, doubles)),
                None => bracket.push_empty(&key),
            }
        }
    }

    bracket.to_string()
}
