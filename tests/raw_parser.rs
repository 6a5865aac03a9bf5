use std::fs;

use traceytext::model::{DatumKey, ViewData, ViewKind};
use traceytext::parser::parse;
use traceytext::processor;

#[test]
fn parses_sample_document() {
    let raw = fs::read_to_string("tests/slides.txt").unwrap();
    let doc = parse(&raw).expect("valid document");

    assert!(doc.settings.insert_control_panel);
    assert_eq!(doc.settings.highlight_color.as_deref(), Some("#ffff99"));

    // sample file declares three views
    assert_eq!(doc.views.len(), 3);

    let code = &doc.views[0];
    assert_eq!(code.kind, ViewKind::List);
    assert_eq!(code.style, "font-family: monospace; width: 40em");
    match &code.data {
        ViewData::List { lines, step_order } => {
            assert_eq!(step_order, "1,2,3,2,3");
            assert_eq!(lines.len(), 5);
            assert_eq!(lines[2], "<li>\tif items[i] > items[i + 1]:</li>\n");
        }
        other => panic!("expected list data, got {other:?}"),
    }

    let log = &doc.views[2];
    assert_eq!(log.kind, ViewKind::Append);
    match &log.data {
        ViewData::Slides { data } => {
            assert_eq!(data.len(), 2);
            assert_eq!(data[1].key, DatumKey::Slide("3".into()));
            assert_eq!(data[1].value, "Swapped!\n    (second line of slide 3)");
        }
        other => panic!("expected slide data, got {other:?}"),
    }
}

#[test]
fn processes_sample_document() {
    let raw = fs::read_to_string("tests/slides.txt").unwrap();
    let doc = parse(&raw).unwrap();
    let processed = processor::run(&doc);

    assert_eq!(processed.slide_count, 5);
    assert!(processed.warnings.is_empty(), "{:?}", processed.warnings);

    let vars = &processed.views[1];
    assert_eq!(
        vars.literals,
        vec![
            "varsViewData = {\n1:\"i = 0\", 2:\"i = 0, comparing \\'a\\' and \\\"b\\\"\", default:\"nothing yet\"};\n"
                .to_string()
        ]
    );

    let log = &processed.views[2];
    assert_eq!(
        log.literals[0],
        "logViewData = {\n0:\"Starting.\", 3:\"Swapped!\\n&nbsp;&nbsp;&nbsp;&nbsp;(second line of slide 3)\"};\n"
    );
}
