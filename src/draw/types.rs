// src/draw/types.rs
use std::mem;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Winner {
    #[default]
    Undecided,
    SideA,
    SideB,
}

impl Winner {
    pub fn flipped(self) -> Self {
        match self {
            Winner::Undecided => Winner::Undecided,
            Winner::SideA => Winner::SideB,
            Winner::SideB => Winner::SideA,
        }
    }

    /// Value of the template's `winner=` parameter.
    pub fn param(self) -> Option<u8> {
        match self {
            Winner::Undecided => None,
            Winner::SideA => Some(1),
            Winner::SideB => Some(2),
        }
    }
}

/// One competing entry: a player, or a pair in doubles.
/// `flags[i]` belongs to `players[i]`; a player without a flag has `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Side {
    pub players: Vec<String>,
    pub flags: Vec<String>,
}

impl Side {
    pub fn player(&self, i: usize) -> &str {
        self.players.get(i).map(String::as_str).unwrap_or("")
    }

    pub fn flag(&self, i: usize) -> &str {
        self.flags.get(i).map(String::as_str).unwrap_or("")
    }

    /// `A / B` for doubles, the name for singles.
    pub fn display_name(&self) -> String {
        self.players.join(" / ")
    }
}

/// Raw strings as scraped. Empty means "not reached".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetResult {
    pub score_a: String,
    pub score_b: String,
    pub tiebreak_a: String,
    pub tiebreak_b: String,
}

impl SetResult {
    pub fn new(score_a: &str, score_b: &str) -> Self {
        Self {
            score_a: s!(score_a),
            score_b: s!(score_b),
            ..Self::default()
        }
    }

    pub fn with_tiebreak(mut self, tiebreak_a: &str, tiebreak_b: &str) -> Self {
        self.tiebreak_a = s!(tiebreak_a);
        self.tiebreak_b = s!(tiebreak_b);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.score_a.is_empty() && self.score_b.is_empty()
    }

    fn swap(&mut self) {
        mem::swap(&mut self.score_a, &mut self.score_b);
        mem::swap(&mut self.tiebreak_a, &mut self.tiebreak_b);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchRecord {
    pub side_a: Side,
    pub side_b: Side,
    pub sets: Vec<SetResult>,
    pub winner: Winner,
}

impl MatchRecord {
    /// The same match seen from the other side of the bracket line.
    /// Applying it twice gives back the original.
    pub fn swapped(mut self) -> Self {
        mem::swap(&mut self.side_a, &mut self.side_b);
        self.sets.iter_mut().for_each(SetResult::swap);
        self.winner = self.winner.flipped();
        self
    }

    /// `6-4 7-6(5)` style summary for status lines and the GUI table.
    pub fn score_line(&self) -> String {
        self.sets
            .iter()
            .map(|s| {
                let mut out = format!("{}-{}", s.score_a, s.score_b);
                let tb = if s.tiebreak_b.is_empty() { &s.tiebreak_a } else { &s.tiebreak_b };
                if !tb.is_empty() {
                    out.push_str(&format!("({tb})"));
                }
                out
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
