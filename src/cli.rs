// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{consts::*, settings, DoublesMode, Options};
use crate::error::Result;
use crate::{clipboard, runner};

#[derive(Parser, Debug)]
#[clap(name = "draw2wiki", about = "Convert a saved tennis draw page into {{Bracket}} wikitext", version, long_about = None)]
pub struct Args {
    #[clap(default_value = DEFAULT_INPUT, help = "Saved draw page (HTML)")]
    pub input: PathBuf,
    #[clap(long, short = 'c', action = ArgAction::Set, help = "Settings file (default: ./draw2wiki.toml if present)")]
    pub config: Option<PathBuf>,
    #[clap(long, short = 'p', action = ArgAction::Set, help = "Draw size: 16, 24, 28, 32, 64, 96 or 128")]
    pub players: Option<u32>,
    #[clap(long, short = 'b', action = ArgAction::Set, help = "Sets per match (3 or 5)")]
    pub best_of: Option<u8>,
    #[clap(long, action = ArgAction::Set, help = "Literal text for every |date=")]
    pub date: Option<String>,
    #[clap(long, action = ArgAction::Set, help = "Bracket id")]
    pub id: Option<String>,
    #[clap(long, action = ArgAction::SetTrue, conflicts_with = "short_name", help = "Use full player names from profile links")]
    pub full_name: bool,
    #[clap(long, action = ArgAction::SetTrue, help = "Use the names as displayed")]
    pub short_name: bool,
    #[clap(long, action = ArgAction::SetTrue, conflicts_with = "singles", help = "Force doubles")]
    pub doubles: bool,
    #[clap(long, action = ArgAction::SetTrue, help = "Force singles")]
    pub singles: bool,
    #[clap(long, action = ArgAction::SetTrue, help = "Ignore tiebreak scores")]
    pub no_tiebreaks: bool,
    #[clap(long, action = ArgAction::SetTrue, help = "Fail when the draw has more matches than the bracket")]
    pub strict: bool,
    #[clap(long, action = ArgAction::SetTrue, help = "Don't copy the result to the clipboard")]
    pub no_copy: bool,
    #[clap(long, short = 'v', action = ArgAction::SetTrue, help = "Debug-level log")]
    pub verbose: bool,
}

impl Args {
    /// Defaults, then the settings file, then flags.
    pub fn resolve_options(&self) -> Result<Options> {
        let mut opts = Options::default();
        let (path, explicit) = match &self.config {
            Some(p) => (p.clone(), true),
            None => (PathBuf::from(SETTINGS_FILE), false),
        };
        settings::load(&path, explicit)?.apply(&mut opts);
        self.apply(&mut opts);
        Ok(opts)
    }

    fn apply(&self, opts: &mut Options) {
        if let Some(n) = self.players { opts.player_count = n; }
        if let Some(n) = self.best_of { opts.best_of_sets = n; }
        if let Some(d) = &self.date { opts.date_format = d.clone(); }
        if let Some(id) = &self.id { opts.bracket_id = id.clone(); }
        if self.full_name { opts.use_full_name = true; }
        if self.short_name { opts.use_full_name = false; }
        if self.doubles { opts.doubles = DoublesMode::Doubles; }
        if self.singles { opts.doubles = DoublesMode::Singles; }
        if self.no_tiebreaks { opts.tiebreaks = false; }
        if self.strict { opts.strict = true; }
    }
}

pub fn run(args: Args) -> Result<()> {
    let opts = args.resolve_options()?;
    let conv = runner::convert_file(&args.input, &opts)?;

    println!("{}", conv.wikitext);
    if let Some(label) = &conv.round_label {
        eprintln!("First round on page: {label}");
    }
    eprintln!("{}", conv.summary());
    if conv.byes + conv.malformed > 0 {
        eprintln!("Skipped: {} bye(s), {} incomplete item(s)", conv.byes, conv.malformed);
    }

    if !args.no_copy {
        match clipboard::copy(&conv.wikitext) {
            Ok(()) => eprintln!("Copied to clipboard."),
            Err(e) => {
                logw!("Clipboard: {e}");
                eprintln!("Warning: {e}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "draw2wiki", "draw.html", "-p", "64", "-b", "5", "--short-name", "--doubles", "--no-tiebreaks",
            "--config", "does-not-matter.toml",
        ])
        .unwrap();
        let mut opts = Options::default();
        args.apply(&mut opts);
        assert_eq!(args.input, PathBuf::from("draw.html"));
        assert_eq!(opts.player_count, 64);
        assert_eq!(opts.best_of_sets, 5);
        assert!(!opts.use_full_name);
        assert_eq!(opts.doubles, DoublesMode::Doubles);
        assert!(!opts.tiebreaks);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let args = Args::try_parse_from(["draw2wiki", "--config", "/nonexistent/draw2wiki.toml"]).unwrap();
        assert!(args.resolve_options().is_err());
    }

    #[test]
    fn conflicting_flags_are_rejected() {
        assert!(Args::try_parse_from(["draw2wiki", "--doubles", "--singles"]).is_err());
        assert!(Args::try_parse_from(["draw2wiki", "--full-name", "--short-name"]).is_err());
    }
}
