// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrawError {
    #[error("input file not found: {} (save the draw page's HTML there first)", .0.display())]
    InputMissing(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported player count {count} (supported: {supported})")]
    UnsupportedPlayerCount { count: u32, supported: String },

    #[error("best-of must be at least 1 set")]
    InvalidBestOf,

    #[error("settings file {}: {message}", path.display())]
    Settings { path: PathBuf, message: String },

    #[error("{extracted} matches extracted but {template} only has {capacity} slots")]
    SlotOverflow {
        extracted: usize,
        capacity: usize,
        template: &'static str,
    },

    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
}

pub type Result<T> = std::result::Result<T, DrawError>;
