// src/wiki/mod.rs
pub mod builder;
pub mod render;

pub use builder::{Template, Value};
pub use render::{match_block, render};
