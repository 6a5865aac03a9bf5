//! Line-driven state machine that turns a raw document into a `Document`.
//!
//!   START → General → NewView ─┬──────────────→ ViewData ─→ DONE
//!                      ↑       └→ SetupOrder ─→    │
//!                      └───────────────────────────┘
//!
//! `General` collects the global settings until the first declaration.
//! Declaration lines are seen twice: once by the state that spots them
//! (`General` or `ViewData`) and once more by `NewView`, which parses them.

pub mod patterns;

use crate::error::ParseError;
use crate::model::{Datum, Document, GlobalSettings, View, ViewData, ViewKind};
use patterns::Declaration;

const CONTROL_PANEL: &str = "controlpanel";
const HIGHLIGHT: &str = "traceytexthighlight";

/// Parse a whole raw document.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    let source = source.replace("\r\n", "\n");
    let lines: Vec<&str> = source.split_inclusive('\n').collect();

    let mut parser = Parser::new();
    let mut idx = 0;
    while idx < lines.len() {
        match parser.step(idx + 1, lines[idx])? {
            Step::Advance => idx += 1,
            Step::Reexamine => {}
        }
    }
    parser.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    General,
    NewView,
    SetupOrder,
    ViewData,
}

/// What the loop does with the current line after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Advance,
    Reexamine,
}

/// The view currently accumulating data.
#[derive(Debug)]
struct PendingView {
    name: String,
    kind: ViewKind,
    style: String,
    data: ViewData,
}

impl PendingView {
    fn new(decl: Declaration) -> Self {
        Self {
            data: ViewData::empty(decl.kind),
            name: decl.name,
            kind: decl.kind,
            style: decl.style,
        }
    }

    fn set_step_order(&mut self, line: &str) {
        if let ViewData::List { step_order, .. } = &mut self.data {
            *step_order = strip_terminator(line).to_string();
        }
    }

    fn push_line(&mut self, line: &str) {
        match &mut self.data {
            ViewData::List { lines, .. } => lines.push(line.to_string()),
            ViewData::Slides { data } => {
                let text = strip_terminator(line);
                if let Some((key, value)) = patterns::datum_header(text) {
                    data.push(Datum { key, value });
                } else if let Some(last) = data.last_mut() {
                    last.value.push('\n');
                    last.value.push_str(text);
                }
                // stray text before the first datum is dropped
            }
        }
    }

    fn finalize(self) -> View {
        View {
            name: self.name,
            kind: self.kind,
            style: self.style,
            data: self.data,
        }
    }
}

struct Parser {
    state: State,
    settings: GlobalSettings,
    views: Vec<View>,
    pending: Option<PendingView>,
}

impl Parser {
    fn new() -> Self {
        Self {
            state: State::General,
            settings: GlobalSettings::default(),
            views: Vec::new(),
            pending: None,
        }
    }

    fn step(&mut self, line_number: usize, line: &str) -> Result<Step, ParseError> {
        match self.state {
            State::General => {
                if patterns::is_declaration(line) {
                    self.state = State::NewView;
                    return Ok(Step::Reexamine);
                }
                self.read_setting(line);
                Ok(Step::Advance)
            }
            State::NewView => {
                let decl =
                    patterns::declaration(line.trim()).ok_or_else(|| ParseError::Grammar {
                        line_number,
                        line: strip_terminator(line).to_string(),
                    })?;
                self.state = if decl.kind == ViewKind::List {
                    State::SetupOrder
                } else {
                    State::ViewData
                };
                self.pending = Some(PendingView::new(decl));
                Ok(Step::Advance)
            }
            State::SetupOrder => {
                if let Some(view) = self.pending.as_mut() {
                    view.set_step_order(line);
                }
                self.state = State::ViewData;
                Ok(Step::Advance)
            }
            State::ViewData => {
                if patterns::is_declaration(line) {
                    self.finalize_pending();
                    self.state = State::NewView;
                    return Ok(Step::Reexamine);
                }
                if let Some(view) = self.pending.as_mut() {
                    view.push_line(line);
                }
                Ok(Step::Advance)
            }
        }
    }

    fn read_setting(&mut self, line: &str) {
        if starts_with_ignore_case(line, CONTROL_PANEL) {
            self.settings.insert_control_panel = true;
        } else if starts_with_ignore_case(line, HIGHLIGHT) {
            let color = line[HIGHLIGHT.len()..].trim();
            self.settings.highlight_color = if color.is_empty() {
                None
            } else {
                Some(color.to_string())
            };
        }
        // anything else is a blank line or free text
    }

    fn finalize_pending(&mut self) {
        if let Some(view) = self.pending.take() {
            self.views.push(view.finalize());
        }
    }

    fn finish(mut self) -> Result<Document, ParseError> {
        self.finalize_pending();
        if self.views.is_empty() {
            return Err(ParseError::NoViews);
        }
        Ok(Document {
            settings: self.settings,
            views: self.views,
        })
    }
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}

fn starts_with_ignore_case(line: &str, token: &str) -> bool {
    line.get(..token.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(token))
}
