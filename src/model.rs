use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Display behavior of a view; picks the display-library constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    List,
    Multispan,
    Simple,
    Append,
    AppendScroll,
}

impl ViewKind {
    pub fn token(self) -> &'static str {
        match self {
            ViewKind::List => "list",
            ViewKind::Multispan => "multispan",
            ViewKind::Simple => "simple",
            ViewKind::Append => "append",
            ViewKind::AppendScroll => "appendscroll",
        }
    }

    /// Middle part of the `TraceyText<..>View` constructor name.
    pub fn constructor(self) -> &'static str {
        match self {
            ViewKind::List => "List",
            ViewKind::Multispan => "Multispan",
            ViewKind::Simple => "Simple",
            ViewKind::Append => "Append",
            ViewKind::AppendScroll => "AppendScroll",
        }
    }
}

impl FromStr for ViewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(ViewKind::List),
            "multispan" => Ok(ViewKind::Multispan),
            "simple" => Ok(ViewKind::Simple),
            "append" => Ok(ViewKind::Append),
            "appendscroll" => Ok(ViewKind::AppendScroll),
            other => Err(format!("unknown view kind `{other}`")),
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Key of one datum: a slide number (kept as written) or `default`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatumKey {
    Slide(String),
    Default,
}

impl DatumKey {
    pub fn from_token(token: &str) -> Self {
        if token == "default" {
            DatumKey::Default
        } else {
            DatumKey::Slide(token.to_string())
        }
    }

    /// Numeric slide number, if the digits fit.
    pub fn slide_number(&self) -> Option<usize> {
        match self {
            DatumKey::Slide(digits) => digits.parse().ok(),
            DatumKey::Default => None,
        }
    }
}

impl fmt::Display for DatumKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatumKey::Slide(digits) => f.write_str(digits),
            DatumKey::Default => f.write_str("default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Datum {
    pub key: DatumKey,
    pub value: String,
}

/// Kind-dependent payload of a view.
///
/// List views carry raw lines (terminators included) plus the step order;
/// every other kind carries `key.value` pairs in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ViewData {
    List {
        lines: Vec<String>,
        step_order: String,
    },
    Slides {
        data: Vec<Datum>,
    },
}

impl ViewData {
    /// Empty payload of the right shape for `kind`.
    pub fn empty(kind: ViewKind) -> Self {
        match kind {
            ViewKind::List => ViewData::List {
                lines: Vec::new(),
                step_order: String::new(),
            },
            _ => ViewData::Slides { data: Vec::new() },
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ViewData::List { lines, .. } => lines.is_empty(),
            ViewData::Slides { data } => data.is_empty(),
        }
    }
}

/// One declared display region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub name: String,
    pub kind: ViewKind,
    pub style: String,
    pub data: ViewData,
}

/// Settings collected before the first view declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlobalSettings {
    pub highlight_color: Option<String>,
    pub insert_control_panel: bool,
}

/// Immediately-after-parse representation of a raw document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub settings: GlobalSettings,
    pub views: Vec<View>,
}

/// Script text generated for one view, handed to `writer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewScript {
    pub name: String,
    pub style: String,
    /// Data literal, followed by the step-order literal for list views.
    pub literals: Vec<String>,
    /// `var viewObj.. = new ..;` statement.
    pub construct: String,
    /// `addView(..)` statement.
    pub register: String,
}

/// Fully processed output handed to `writer`.
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    pub settings: GlobalSettings,
    pub views: Vec<ViewScript>,
    pub slide_count: usize,
    pub warnings: Vec<crate::processor::lint::Warning>,
}
