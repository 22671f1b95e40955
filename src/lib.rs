// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod core;
pub mod draw;
pub mod error;
pub mod flags;
pub mod layout;
pub mod logging;
pub mod runner;
pub mod wiki;

pub mod gui;
