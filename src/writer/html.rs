//! Emit the HTML placeholders and inline script for a processed document.

use crate::model::ProcessedDocument;
use crate::processor::literals::CONTROLLER;

/// Knobs for the generated markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// `src` of the display-library `<script>` include.
    pub script_src: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            script_src: "TraceyText.js".to_string(),
        }
    }
}

/// Element id that shows the current slide number.
pub const SLIDE_DISPLAY_ID: &str = "curSlide";

pub fn render(doc: &ProcessedDocument, opts: &RenderOptions) -> String {
    let mut out: Vec<String> = Vec::new();

    // ---------------------------------------------------------------
    // 1. Highlight style and one placeholder element per view
    // ---------------------------------------------------------------
    if let Some(color) = &doc.settings.highlight_color {
        out.push(format!(
            "<style type=\"text/css\">
.traceytexthighlight {{
\tbackground-color: {color};
}}
h1 {{
    font-size: 24;
    font-family: Arial;
}}
</style>
"
        ));
    }
    for view in &doc.views {
        out.push(format!(
            "<div id='{}' style='{}'></div>\n",
            view.name, view.style
        ));
    }

    // ---------------------------------------------------------------
    // 2. Controller, data literals, view objects
    // ---------------------------------------------------------------
    out.push(format!(
        "\n<script type=\"text/javascript\" src=\"{}\"></script>\n<script>\nvar {CONTROLLER} = new TraceyText();\n",
        opts.script_src
    ));
    for view in &doc.views {
        out.extend(view.literals.iter().cloned());
    }
    out.push("\n\n".to_string());
    for view in &doc.views {
        out.push(view.construct.clone());
        out.push(view.register.clone());
    }

    // ---------------------------------------------------------------
    // 3. Slide display, control panel, end of script
    // ---------------------------------------------------------------
    out.push(format!(
        "{CONTROLLER}.addCurrentSlideDisplay(\"{SLIDE_DISPLAY_ID}\");"
    ));
    if doc.settings.insert_control_panel {
        out.push(format!(
            "var traceyTextFCP = new TraceyTextFloatingControlPanel('traceyTextFCP', '{CONTROLLER}');
traceyTextFCP.generateFloatingControlPanel();
"
        ));
    }
    out.push("</script>".to_string());

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parser, processor};

    fn render_src(src: &str) -> String {
        let doc = parser::parse(src).unwrap();
        render(&processor::run(&doc), &RenderOptions::default())
    }

    #[test]
    fn test_minimal_document() {
        let html = render_src("view.simple.box.color:red\n0.Hi\n");
        let expected = "<div id='box' style='color:red'></div>\n\
\n\n<script type=\"text/javascript\" src=\"TraceyText.js\"></script>\n<script>\nvar mainTraceyTextObj = new TraceyText();\n\
\nboxViewData = {\n0:\"Hi\"};\n\
\n\n\n\
\nvar viewObjbox = new TraceyTextSimpleView('box', boxViewData);\n\
\nmainTraceyTextObj.addView(viewObjbox);\n\
\nmainTraceyTextObj.addCurrentSlideDisplay(\"curSlide\");\
\n</script>";
        assert_eq!(html, expected);
    }

    #[test]
    fn test_fragment_order() {
        let src = "controlpanel\ntraceytexthighlight yellow\nview.list.a.\n0\n<li>x</li>\nview.simple.b.\n0.y\n";
        let html = render_src(src);

        let order = [
            "background-color: yellow;",
            "<div id='a' style=''>",
            "<div id='b' style=''>",
            "src=\"TraceyText.js\"",
            "aViewData = \"<li>x</li>\\n\";",
            "aStepOrder = [0];",
            "bViewData = {",
            "var viewObja = new TraceyTextListView('a', aViewData, aStepOrder);",
            "mainTraceyTextObj.addView(viewObja);",
            "var viewObjb = new TraceyTextSimpleView('b', bViewData);",
            "mainTraceyTextObj.addView(viewObjb);",
            "addCurrentSlideDisplay(\"curSlide\")",
            "new TraceyTextFloatingControlPanel('traceyTextFCP', 'mainTraceyTextObj');",
            "traceyTextFCP.generateFloatingControlPanel();",
            "</script>",
        ];
        let mut from = 0;
        for needle in order {
            let at = html[from..]
                .find(needle)
                .unwrap_or_else(|| panic!("`{needle}` missing or out of order"));
            from += at + needle.len();
        }
        assert!(html.ends_with("</script>"));
    }

    #[test]
    fn test_optional_fragments_absent() {
        let html = render_src("view.append.log.\n");
        assert!(!html.contains("<style"));
        assert!(!html.contains("FloatingControlPanel"));
    }

    #[test]
    fn test_custom_script_src() {
        let doc = parser::parse("view.simple.a.\n").unwrap();
        let opts = RenderOptions {
            script_src: "js/tt.js".into(),
        };
        let html = render(&processor::run(&doc), &opts);
        assert!(html.contains("<script type=\"text/javascript\" src=\"js/tt.js\"></script>"));
    }
}
