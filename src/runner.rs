// src/runner.rs
//
// One pass: validate → read → parse → extract → assign → render.
// Front ends (CLI, GUI) call `convert_file` and decide what to do with the text.

use std::{fs, io, path::Path};

use crate::{
    config::Options,
    draw::{self, Extraction, SlotMap},
    error::{DrawError, Result},
    layout::LayoutSpec,
    wiki,
};

/// Everything a front end may want to show besides the text itself.
#[derive(Debug)]
pub struct Conversion {
    pub layout: &'static LayoutSpec,
    pub doubles: bool,
    pub round_label: Option<String>,
    pub extracted: usize,
    pub byes: usize,
    pub malformed: usize,
    pub slots: SlotMap,
    pub wikitext: String,
}

impl Conversion {
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{} ({} draw, {}): {} match(es) placed, {} empty slot(s)",
            self.layout.template_id,
            self.layout.player_count,
            if self.doubles { "doubles" } else { "singles" },
            self.slots.filled(),
            self.slots.empty(),
        );
        if !self.slots.overflow.is_empty() {
            out.push_str(&format!(", {} not placed", self.slots.overflow.len()));
        }
        out
    }
}

pub fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DrawError::InputMissing(path.to_path_buf()),
        _ => DrawError::Read { path: path.to_path_buf(), source: e },
    })
}

pub fn convert_file(path: &Path, opts: &Options) -> Result<Conversion> {
    // Config problems surface before the input is touched.
    opts.validate()?;
    let html = read_input(path)?;
    logf!("Input: {} ({} bytes)", path.display(), html.len());
    convert_str(&html, opts)
}

pub fn convert_str(html: &str, opts: &Options) -> Result<Conversion> {
    let layout = opts.validate()?;
    logf!(
        "Options: players={}, best_of={}, full_name={}, doubles={:?}, tiebreaks={}, strict={}",
        opts.player_count, opts.best_of_sets, opts.use_full_name, opts.doubles, opts.tiebreaks, opts.strict
    );

    let doubles = opts.doubles.resolve(html);
    let Extraction { doubles, round_label, matches, byes, malformed } =
        draw::parse_doc(html, doubles, opts.use_full_name);
    let extracted = matches.len();

    if opts.strict && extracted > layout.total_slots() {
        loge!("Strict: {} matches for {} slots", extracted, layout.total_slots());
        return Err(DrawError::SlotOverflow {
            extracted,
            capacity: layout.total_slots(),
            template: layout.template_id,
        });
    }

    let slots = draw::assign_slots(layout, matches);
    let wikitext = wiki::render(layout, &slots, opts, doubles);

    Ok(Conversion { layout, doubles, round_label, extracted, byes, malformed, slots, wikitext })
}
