//! Escaping of raw view text into the body of a double-quoted script string.
//!
//! Whitespace is first turned into `&nbsp;` entities so the browser keeps the
//! author's indentation, then the characters that would end or corrupt the
//! string literal are backslash-escaped.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub const NBSP: &str = "&nbsp;";

/// Replacement for one tab or one run of four spaces.
pub const TAB_MARKER: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";

static TABS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t| {4}").unwrap());
static LEADING_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ +").unwrap());
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

pub fn escape_text(raw: &str) -> String {
    let text = TABS.replace_all(raw, TAB_MARKER);
    let text = LEADING_SPACES.replace(&text, nbsp_per_space);
    // runs of four are already gone, so one pass leaves no run behind
    let text = SPACE_RUNS.replace_all(&text, nbsp_per_space);

    // backslash first, or the escapes added below would be doubled
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn nbsp_per_space(caps: &Captures) -> String {
    NBSP.repeat(caps[0].len())
}
