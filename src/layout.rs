// src/layout.rs
//
// Supported draw sizes and the bracket template each one maps onto.
//
// Slots are numbered the way the wiki template numbers them: `R<round>M<index>`,
// round 1 first, 1-based index within the round. Byes never get a slot, so a
// 28-player draw opens with 12 matches, not 16.
//
// `swaps` lists slots whose template expects the opposite side order from
// the one the draw page shows. They were found by rendering each template and
// comparing it with the live draw; there's no rule that derives them.

use std::fmt;

use crate::error::{DrawError, Result};

/// One bracket position, e.g. `R2M6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub round: u32,
    pub index: u32,
}

impl Slot {
    pub const fn new(round: u32, index: u32) -> Self {
        Self { round, index }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}M{}", self.round, self.index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSpec {
    pub round: u32,
    pub matches: u32,
    pub label: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LayoutSpec {
    pub player_count: u32,
    pub template_id: &'static str,
    pub rounds: &'static [RoundSpec],
    pub swaps: &'static [Slot],
}

impl LayoutSpec {
    pub fn total_slots(&self) -> usize {
        self.rounds.iter().map(|r| r.matches as usize).sum()
    }

    /// Slots in template order: by round, then by index.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.rounds
            .iter()
            .flat_map(|r| (1..=r.matches).map(move |i| Slot::new(r.round, i)))
    }

    pub fn swaps_sides(&self, slot: Slot) -> bool {
        self.swaps.contains(&slot)
    }

    pub fn round(&self, round: u32) -> Option<&RoundSpec> {
        self.rounds.iter().find(|r| r.round == round)
    }
}

const fn r(round: u32, matches: u32, label: &'static str) -> RoundSpec {
    RoundSpec { round, matches, label }
}

const fn sl(round: u32, index: u32) -> Slot {
    Slot::new(round, index)
}

pub static LAYOUTS: &[LayoutSpec] = &[
    LayoutSpec {
        player_count: 16,
        template_id: "Bracket/16",
        rounds: &[
            r(1, 8, "Round of 16"),
            r(2, 4, "Quarterfinals"),
            r(3, 2, "Semifinals"),
            r(4, 1, "Grand Final"),
        ],
        swaps: &[],
    },
    LayoutSpec {
        player_count: 24,
        template_id: "Bracket/16L8DSSS",
        rounds: &[
            r(1, 8, "Round of 24"),
            r(2, 8, "Round of 16"),
            r(3, 4, "Quarterfinals"),
            r(4, 2, "Semifinals"),
            r(5, 1, "Grand Final"),
        ],
        swaps: &[sl(2, 2), sl(2, 4), sl(2, 6), sl(2, 8)],
    },
    LayoutSpec {
        player_count: 28,
        template_id: "Bracket/4L2DH8LSH8H4L2DLSL",
        rounds: &[
            r(1, 12, "Round of 28"),
            r(2, 8, "Round of 16"),
            r(3, 4, "Quarterfinals"),
            r(4, 2, "Semifinals"),
            r(5, 1, "Grand Final"),
        ],
        swaps: &[sl(2, 6), sl(2, 8)],
    },
    LayoutSpec {
        player_count: 32,
        template_id: "Bracket/32",
        rounds: &[
            r(1, 16, "Round of 32"),
            r(2, 8, "Round of 16"),
            r(3, 4, "Quarterfinals"),
            r(4, 2, "Semifinals"),
            r(5, 1, "Grand Final"),
        ],
        swaps: &[],
    },
    LayoutSpec {
        player_count: 64,
        template_id: "Bracket/64",
        rounds: &[
            r(1, 32, "Round 1"),
            r(2, 16, "Round 2"),
            r(3, 8, "Round 3"),
            r(4, 4, "Quarterfinals"),
            r(5, 2, "Semifinals"),
            r(6, 1, "Grand Final"),
        ],
        swaps: &[],
    },
    LayoutSpec {
        player_count: 96,
        template_id: "Bracket/64L32DSSSSS",
        rounds: &[
            r(1, 32, "Round 1"),
            r(2, 32, "Round 2"),
            r(3, 16, "Round 3"),
            r(4, 8, "Round 4"),
            r(5, 4, "Quarterfinals"),
            r(6, 2, "Semifinals"),
            r(7, 1, "Grand Final"),
        ],
        swaps: &[
            sl(2, 2), sl(2, 4), sl(2, 6), sl(2, 8),
            sl(2, 10), sl(2, 12), sl(2, 14), sl(2, 16),
            sl(2, 18), sl(2, 20), sl(2, 22), sl(2, 24),
            sl(2, 26), sl(2, 28), sl(2, 30), sl(2, 32),
        ],
    },
    LayoutSpec {
        player_count: 128,
        template_id: "Bracket/128",
        rounds: &[
            r(1, 64, "Round 1"),
            r(2, 32, "Round 2"),
            r(3, 16, "Round 3"),
            r(4, 8, "Round 4"),
            r(5, 4, "Quarterfinals"),
            r(6, 2, "Semifinals"),
            r(7, 1, "Grand Final"),
        ],
        swaps: &[],
    },
];

pub fn supported_player_counts() -> impl Iterator<Item = u32> {
    LAYOUTS.iter().map(|l| l.player_count)
}

pub fn for_player_count(count: u32) -> Result<&'static LayoutSpec> {
    LAYOUTS
        .iter()
        .find(|l| l.player_count == count)
        .ok_or_else(|| DrawError::UnsupportedPlayerCount {
            count,
            supported: supported_player_counts()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
}
