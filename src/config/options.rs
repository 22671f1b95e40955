// src/config/options.rs
use crate::error::Result;
use crate::layout::{self, LayoutSpec};
use super::consts::*;

/// How the extractor decides between singles and doubles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoublesMode {
    /// Sniff the draw container class.
    #[default]
    Auto,
    Singles,
    Doubles,
}

impl DoublesMode {
    pub fn resolve(self, html: &str) -> bool {
        match self {
            DoublesMode::Auto => html.contains(DOUBLES_MARKER),
            DoublesMode::Singles => false,
            DoublesMode::Doubles => true,
        }
    }
}

/// Everything the pipeline needs, built once and passed down by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub use_full_name: bool,
    pub player_count: u32,
    pub best_of_sets: u8,
    pub date_format: String,
    pub doubles: DoublesMode,
    pub tiebreaks: bool,
    pub strict: bool,
    pub bracket_id: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            use_full_name: true,
            player_count: DEFAULT_PLAYER_COUNT,
            best_of_sets: DEFAULT_BEST_OF,
            date_format: s!(DEFAULT_DATE_FORMAT),
            doubles: DoublesMode::Auto,
            tiebreaks: true,
            strict: false,
            bracket_id: s!(BRACKET_ID_PLACEHOLDER),
        }
    }
}

impl Options {
    /// Fail fast on configuration that can't produce a bracket.
    pub fn validate(&self) -> Result<&'static LayoutSpec> {
        if self.best_of_sets == 0 {
            return Err(crate::error::DrawError::InvalidBestOf);
        }
        layout::for_player_count(self.player_count)
    }
}
