//! Component 4 – turning processed data into output text.
pub mod html;
pub mod json;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write `text` to `out`, or to stdout when no file was given.
pub fn emit(text: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Writing {}", path.display()))
        }
        None => {
            println!("{text}");
            Ok(())
        }
    }
}
