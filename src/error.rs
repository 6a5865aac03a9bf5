//! Errors raised while parsing a raw document.

use thiserror::Error;

/// Shape every view declaration line must follow.
pub const DECLARATION_HELP: &str = "View definition lines should look like: view.[ViewType].[IdName].[Style]
  where [ViewType] is either list, simple, multispan, append, or appendscroll, [IdName] is the text name of the HTML element for the view and [Style] is its inline style (may be empty).";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line in declaration position did not match the declaration grammar.
    #[error("Could not parse this view definition line (line {line_number}): {line}\n{}", DECLARATION_HELP)]
    Grammar { line_number: usize, line: String },

    /// The document never declared a view.
    #[error("no views declared: expected at least one `view.[ViewType].[IdName].[Style]` line")]
    NoViews,
}
