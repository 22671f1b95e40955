// src/logging.rs
use std::error::Error;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::consts::{LOG_FILE, STORE_DIR};

const PATTERN: &str = "[{d(%H:%M:%S%.3f)}][{l}] {m}{n}";

/// Route `logf!`/`logd!`/`logw!`/`loge!` into an append-only file.
/// Binaries call this once; library code never does.
pub fn init(path: &Path, verbose: bool) -> Result<(), Box<dyn Error>> {
    let file = FileAppender::builder()
        .append(true)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)?;

    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(file)))
        .build(Root::builder().appender("logfile").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}

/// `.store/debug.log` under the working directory.
pub fn default_path() -> PathBuf {
    Path::new(STORE_DIR).join(LOG_FILE)
}
