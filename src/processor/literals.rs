//! Script fragments for a single view.

use super::escape::escape_text;
use crate::model::{Datum, View, ViewData, ViewKind, ViewScript};

/// Name of the controller object every view is registered with.
pub const CONTROLLER: &str = "mainTraceyTextObj";

pub fn view_script(view: &View) -> ViewScript {
    ViewScript {
        name: view.name.clone(),
        style: view.style.clone(),
        literals: data_literals(view),
        construct: construct(view),
        register: format!("{CONTROLLER}.addView(viewObj{});\n", view.name),
    }
}

/// `<name>ViewData = ..;` plus `<name>StepOrder = [..];` for list views.
pub fn data_literals(view: &View) -> Vec<String> {
    let name = &view.name;
    match &view.data {
        ViewData::List { lines, step_order } => {
            let text: String = lines.iter().map(|line| escape_text(line)).collect();
            vec![
                format!("{name}ViewData = \"{text}\";\n"),
                // the step order is a script expression, never escaped
                format!("{name}StepOrder = [{step_order}];\n"),
            ]
        }
        ViewData::Slides { data } => {
            vec![format!("{name}ViewData = {{\n{}}};\n", slide_entries(data))]
        }
    }
}

fn slide_entries(data: &[Datum]) -> String {
    data.iter()
        .map(|d| format!("{}:\"{}\"", d.key, escape_text(&d.value)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn construct(view: &View) -> String {
    let name = &view.name;
    let ctor = view.kind.constructor();
    if view.kind == ViewKind::List {
        format!("var viewObj{name} = new TraceyText{ctor}View('{name}', {name}ViewData, {name}StepOrder);\n")
    } else {
        format!("var viewObj{name} = new TraceyText{ctor}View('{name}', {name}ViewData);\n")
    }
}
