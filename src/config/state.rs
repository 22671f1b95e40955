// src/config/state.rs
use super::{consts::DEFAULT_INPUT, options::Options};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Path typed into the input field
    pub input_path: String,

    pub window_w: f32,
    pub window_h: f32,

    /// Show the slot table above the wikitext
    pub show_slots: bool,

    /// Hide empty slots in the slot table
    pub filled_only: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            input_path: s!(DEFAULT_INPUT),
            window_w: 1100.0,
            window_h: 720.0,
            show_slots: true,
            filled_only: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: Options,
    pub gui: GuiState,
}
