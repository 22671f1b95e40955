// src/config/settings.rs
//
// Optional `draw2wiki.toml` next to the input. Every key is optional; whatever is
// present overrides the built-in defaults, and CLI flags override the file.

use std::{fs, io, path::Path};

use serde::Deserialize;

use crate::error::{DrawError, Result};
use super::options::{DoublesMode, Options};

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub use_full_name: Option<bool>,
    pub player_count: Option<u32>,
    pub best_of_sets: Option<u8>,
    pub date_format: Option<String>,
    pub doubles: Option<DoublesMode>,
    pub tiebreaks: Option<bool>,
    pub strict: Option<bool>,
    pub bracket_id: Option<String>,
}

impl Settings {
    pub fn apply(self, opts: &mut Options) {
        if let Some(v) = self.use_full_name { opts.use_full_name = v; }
        if let Some(v) = self.player_count { opts.player_count = v; }
        if let Some(v) = self.best_of_sets { opts.best_of_sets = v; }
        if let Some(v) = self.date_format { opts.date_format = v; }
        if let Some(v) = self.doubles { opts.doubles = v; }
        if let Some(v) = self.tiebreaks { opts.tiebreaks = v; }
        if let Some(v) = self.strict { opts.strict = v; }
        if let Some(v) = self.bracket_id { opts.bracket_id = v; }
    }
}

pub fn parse(text: &str, path: &Path) -> Result<Settings> {
    toml::from_str(text).map_err(|e| DrawError::Settings {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load settings from `path`.
/// A missing file is only an error when the user named it explicitly.
pub fn load(path: &Path, explicit: bool) -> Result<Settings> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let settings = parse(&text, path)?;
            logd!("Settings: loaded {}", path.display());
            Ok(settings)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit => {
            logd!("Settings: {} not present, using defaults", path.display());
            Ok(Settings::default())
        }
        Err(e) => Err(DrawError::Settings {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}
