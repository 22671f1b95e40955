// src/clipboard.rs
use crate::error::Result;

/// Best-effort: callers report the error and carry on.
pub fn copy(text: &str) -> Result<()> {
    let mut cb = arboard::Clipboard::new()?;
    cb.set_text(text)?;
    logf!("Clipboard: copied {} bytes", text.len());
    Ok(())
}
