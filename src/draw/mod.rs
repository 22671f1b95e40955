// src/draw/mod.rs
//! Draw page → slotted matches.
//!
//! ```text
//! extract::parse_doc → Vec<MatchRecord> → slots::assign_slots → SlotMap
//!                                           (score::normalize_set at render time)
//! ```
pub mod extract;
pub mod score;
pub mod slots;
pub mod types;

pub use extract::{parse_doc, Extraction};
pub use score::{normalize_set, Finished, NormalizedSet};
pub use slots::{assign_slots, Placed, SlotMap};
pub use types::{MatchRecord, SetResult, Side, Winner};
