//! The functional core: turns a parsed `Document` into script fragments.
pub mod escape;
pub mod lint;
pub mod literals;

use crate::model::{Document, ProcessedDocument};

/// Runs every processing pass and returns a read-only structure for writers.
pub fn run(doc: &Document) -> ProcessedDocument {
    ProcessedDocument {
        settings: doc.settings.clone(),
        views: doc.views.iter().map(literals::view_script).collect(),
        slide_count: lint::slide_count(doc),
        warnings: lint::check(doc),
    }
}
