// src/config/consts.rs

// Input
pub const DEFAULT_INPUT: &str = "html_content.txt";
pub const SETTINGS_FILE: &str = "draw2wiki.toml";

// Local log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Source document markers
pub const DOUBLES_MARKER: &str = "atp-draw-container--doubles";
pub const BYE_MARKER: &str = "Bye";
pub const FLAG_FRAGMENT: &str = "#flag-";
pub const PLAYER_PATH: &str = "players";

// Output defaults
pub const DEFAULT_PLAYER_COUNT: u32 = 32;
pub const DEFAULT_BEST_OF: u8 = 3;
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";
pub const BRACKET_ID_PLACEHOLDER: &str = "XXXXXXXXXX";
