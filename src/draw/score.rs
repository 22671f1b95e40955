// src/draw/score.rs
//
// Per-set normalisation for the template's `Map` entries.
//
// The draw page prints a tiebreak only next to the loser's games (`7-6(4)`),
// so the winner's tiebreak points have to be reconstructed: first to 7, and
// by two clear points once both players reach 6.

use std::fmt;

use super::types::SetResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finished {
    True,
    Skip,
}

impl fmt::Display for Finished {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Finished::True => "true",
            Finished::Skip => "skip",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedSet {
    pub score1: String,
    pub score2: String,
    pub tiebreak1: String,
    pub tiebreak2: String,
    pub comment: Option<String>,
    pub finished: Finished,
}

impl NormalizedSet {
    /// A set that was never reached.
    pub fn unplayed() -> Self {
        Self {
            score1: s!(),
            score2: s!(),
            tiebreak1: s!(),
            tiebreak2: s!(),
            comment: None,
            finished: Finished::Skip,
        }
    }
}

fn num(s: &str) -> Option<u32> {
    s.trim().parse().ok()
}

fn is_tiebreak_signature(a: &str, b: &str) -> bool {
    matches!((num(a), num(b)), (Some(7), Some(6)) | (Some(6), Some(7)))
}

/// Winner's tiebreak points given the loser's.
pub fn infer_winner_tiebreak(loser: u32) -> u32 {
    if loser >= 6 { loser + 2 } else { 7 }
}

pub fn normalize_set(score_a: &str, score_b: &str, tb_a: &str, tb_b: &str) -> NormalizedSet {
    let finished = if !score_a.is_empty() && !score_b.is_empty() {
        Finished::True
    } else {
        Finished::Skip
    };

    let mut out = NormalizedSet {
        score1: s!(score_a),
        score2: s!(score_b),
        tiebreak1: s!(tb_a),
        tiebreak2: s!(tb_b),
        comment: None,
        finished,
    };

    let tiebreak_set = !tb_a.is_empty() || !tb_b.is_empty() || is_tiebreak_signature(score_a, score_b);
    if !tiebreak_set {
        return out;
    }

    // (winner tb, loser tb) borrowed out of `out` in side order.
    let (win_tb, lose_tb) = match (num(score_a), num(score_b)) {
        (Some(a), Some(b)) if a > b => (&mut out.tiebreak1, &mut out.tiebreak2),
        (Some(a), Some(b)) if b > a => (&mut out.tiebreak2, &mut out.tiebreak1),
        _ => {
            if !tb_a.is_empty() && !tb_b.is_empty() {
                out.comment = Some(format!("Tiebreak: {tb_a}-{tb_b}"));
            }
            return out;
        }
    };

    if win_tb.is_empty() {
        if let Some(l) = num(lose_tb.as_str()) {
            *win_tb = infer_winner_tiebreak(l).to_string();
        } else if lose_tb.is_empty() {
            *win_tb = s!("7");
        }
    }

    if !win_tb.is_empty() && !lose_tb.is_empty() {
        out.comment = Some(format!("Tiebreak: {win_tb}-{lose_tb}"));
    }
    out
}

impl SetResult {
    /// `tiebreaks = false` renders scores and completion only.
    pub fn normalize(&self, tiebreaks: bool) -> NormalizedSet {
        if tiebreaks {
            normalize_set(&self.score_a, &self.score_b, &self.tiebreak_a, &self.tiebreak_b)
        } else {
            normalize_set(&self.score_a, &self.score_b, "", "").without_tiebreak()
        }
    }
}

impl NormalizedSet {
    fn without_tiebreak(mut self) -> Self {
        self.tiebreak1.clear();
        self.tiebreak2.clear();
        self.comment = None;
        self
    }
}
