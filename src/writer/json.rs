//! Dump the parsed document as JSON, for checking what the parser saw.

use anyhow::Result;

use crate::model::Document;

pub fn render(doc: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}
