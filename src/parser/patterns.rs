//! Line patterns of the raw format.
//
//  Grammar (informal):
//
//      declaration ::= 'view.' KIND '.' NAME '.' STYLE
//      KIND        ::= list | multispan | simple | append | appendscroll
//      NAME        ::= shortest run of non-newline chars up to the next '.'
//      STYLE       ::= rest of the line
//      datum       ::= ( [0-9]+ | 'default' ) '.' VALUE
//
//  `.` in the regexes below never matches '\n', so raw lines carrying their
//  terminator still match.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{DatumKey, ViewKind};

static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^view\.(list|multispan|simple|append|appendscroll)\.(.*?)\.(.*)").unwrap()
});

static DATUM_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+|default)\.(.*)").unwrap());

/// Captures of a view declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: ViewKind,
    pub name: String,
    pub style: String,
}

/// True when `line` starts a new view.
pub fn is_declaration(line: &str) -> bool {
    DECLARATION.is_match(line)
}

pub fn declaration(line: &str) -> Option<Declaration> {
    let caps = DECLARATION.captures(line)?;
    // the regex only admits known kind tokens
    let kind = caps[1].parse().ok()?;
    Some(Declaration {
        kind,
        name: caps[2].to_string(),
        style: caps[3].to_string(),
    })
}

/// Splits a `key.value` line; `None` for continuation text.
pub fn datum_header(line: &str) -> Option<(DatumKey, String)> {
    let caps = DATUM_HEADER.captures(line)?;
    Some((DatumKey::from_token(&caps[1]), caps[2].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration() {
        let test_cases = vec![
            (
                "view.simple.box.color:red",
                Some(Declaration {
                    kind: ViewKind::Simple,
                    name: "box".into(),
                    style: "color:red".into(),
                }),
            ),
            (
                "view.appendscroll.log.",
                Some(Declaration {
                    kind: ViewKind::AppendScroll,
                    name: "log".into(),
                    style: "".into(),
                }),
            ),
            (
                // name stops at the first dot, style keeps the rest
                "view.list.code.font.family: mono; width: 1.5em",
                Some(Declaration {
                    kind: ViewKind::List,
                    name: "code".into(),
                    style: "font.family: mono; width: 1.5em".into(),
                }),
            ),
            ("view.bogus.x.", None),
            ("view.simple.nostyle", None),
            ("  view.simple.box.", None),
            ("View.simple.box.", None),
        ];

        for (line, expected) in test_cases {
            assert_eq!(declaration(line), expected, "line: {line}");
        }
    }

    #[test]
    fn test_declaration_ignores_line_terminator() {
        let decl = declaration("view.append.out.border: 1px\n").unwrap();
        assert_eq!(decl.style, "border: 1px");
        assert!(is_declaration("view.multispan.m.\n"));
    }

    #[test]
    fn test_datum_header() {
        let test_cases = vec![
            ("0.Hello", Some((DatumKey::Slide("0".into()), "Hello".into()))),
            ("12.", Some((DatumKey::Slide("12".into()), "".into()))),
            ("default.fallback", Some((DatumKey::Default, "fallback".into()))),
            ("1.5.x", Some((DatumKey::Slide("1".into()), "5.x".into()))),
            ("  0.indented", None),
            ("x.1", None),
            ("Default.x", None),
            ("", None),
        ];

        for (line, expected) in test_cases {
            assert_eq!(datum_header(line), expected, "line: {line}");
        }
    }
}
