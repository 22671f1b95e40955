// src/gui/components/mod.rs
pub mod options_panel;
pub mod output;
pub mod slot_table;
