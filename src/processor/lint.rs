//! Non-fatal checks on a parsed document.
//!
//! The parser is deliberately permissive: duplicate names, duplicate keys and
//! out-of-range step orders all produce output. These checks report the cases
//! where that output will not behave the way the author probably meant.

use std::collections::HashSet;
use std::fmt;

use crate::model::{DatumKey, Document, View, ViewData, ViewKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub view: String,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view `{}`: {}", self.view, self.message)
    }
}

pub fn check(doc: &Document) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let mut seen_names = HashSet::new();

    for view in &doc.views {
        let mut warn = |message: String| {
            warnings.push(Warning {
                view: view.name.clone(),
                message,
            })
        };

        if !seen_names.insert(view.name.as_str()) {
            warn("declared more than once; the later element shadows the earlier one".into());
        }
        if !is_script_identifier(&view.name) {
            warn("name is not a valid script identifier".into());
        }

        match &view.data {
            ViewData::Slides { data } => {
                let mut seen_keys = HashSet::new();
                for datum in data {
                    if !seen_keys.insert(&datum.key) {
                        warn(format!("key `{}` appears more than once", datum.key));
                    }
                }
                if view.kind != ViewKind::Simple && seen_keys.contains(&DatumKey::Default) {
                    warn(format!("`default` is only used by simple views, not {}", view.kind));
                }
            }
            ViewData::List { lines, step_order } => {
                let items = count_list_items(lines);
                for step in step_entries(step_order).filter_map(|s| s.parse::<usize>().ok()) {
                    if step > items {
                        warn(format!("step order entry {step} but only {items} <li> items"));
                    }
                }
            }
        }
    }

    warnings
}

/// Highest slide number the display library will navigate to.
pub fn slide_count(doc: &Document) -> usize {
    doc.views.iter().map(view_slides).max().unwrap_or(1).max(1)
}

fn view_slides(view: &View) -> usize {
    match &view.data {
        ViewData::List { step_order, .. } => step_entries(step_order).count(),
        ViewData::Slides { data } => data
            .iter()
            .filter_map(|d| d.key.slide_number())
            .max()
            .unwrap_or(0),
    }
}

fn step_entries(step_order: &str) -> impl Iterator<Item = &str> {
    step_order.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn count_list_items(lines: &[String]) -> usize {
    lines
        .iter()
        .map(|line| line.to_ascii_lowercase().matches("<li>").count())
        .sum()
}

fn is_script_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
