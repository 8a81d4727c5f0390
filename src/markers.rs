//! Marker scanning over an already-fetched presentation tree.
//!
//! Slide text carries two kinds of inline markers: `$`-prefixed identifiers
//! label which slide a template operation targets, `#`-prefixed components
//! label fill points inside a slide. Scanning is a pure pass over the tree;
//! elements with missing shape/table/text fields simply contribute nothing.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::google::types::Slide;

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\w+").expect("identifier pattern"));
static COMPONENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("component pattern"));

/// The sigil that opens a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sigil {
    /// `$` — slide identifier, removed after the slide is populated.
    Identifier,
    /// `#` — dynamic component, the substitution point for a value.
    Component,
}

impl Sigil {
    fn pattern(self) -> &'static Regex {
        match self {
            Sigil::Identifier => &IDENTIFIER_RE,
            Sigil::Component => &COMPONENT_RE,
        }
    }
}

/// Collect every marker with the given sigil across all page elements of a
/// slide: shape text runs plus every table cell's text runs. Returns a set —
/// duplicates collapse and order carries no meaning.
pub fn find_markers(slide: &Slide, sigil: Sigil) -> BTreeSet<String> {
    let pattern = sigil.pattern();
    let mut found = BTreeSet::new();
    for element in &slide.page_elements {
        for run in element.text_runs() {
            for m in pattern.find_iter(run) {
                found.insert(m.as_str().to_string());
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide_from_json(value: serde_json::Value) -> Slide {
        serde_json::from_value(value).expect("slide fixture")
    }

    fn fixture_slide() -> Slide {
        slide_from_json(serde_json::json!({
            "objectId": "slide_1",
            "pageElements": [
                {
                    "objectId": "shape_1",
                    "shape": {
                        "text": {
                            "textElements": [
                                {"textRun": {"content": "$intro Welcome #title\n"}},
                                {"paragraphMarker": {}},
                                {"textRun": {"content": "#subtitle and #title again"}}
                            ]
                        }
                    }
                },
                {
                    "objectId": "table_1",
                    "table": {
                        "tableRows": [
                            {"tableCells": [
                                {"text": {"textElements": [
                                    {"textRun": {"content": "#price in a cell"}}
                                ]}},
                                {"text": {"textElements": [
                                    {"textRun": {"content": "$intro repeated"}}
                                ]}}
                            ]}
                        ]
                    }
                }
            ]
        }))
    }

    #[test]
    fn finds_identifiers_and_components_in_shapes_and_tables() {
        let slide = fixture_slide();
        let ids = find_markers(&slide, Sigil::Identifier);
        let components = find_markers(&slide, Sigil::Component);

        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec!["$intro"]);
        assert_eq!(
            components.into_iter().collect::<Vec<_>>(),
            vec!["#price", "#subtitle", "#title"]
        );
    }

    #[test]
    fn sigil_sets_are_disjoint_and_scan_is_idempotent() {
        let slide = fixture_slide();
        let ids = find_markers(&slide, Sigil::Identifier);
        let components = find_markers(&slide, Sigil::Component);
        assert!(ids.is_disjoint(&components));

        assert_eq!(ids, find_markers(&slide, Sigil::Identifier));
        assert_eq!(components, find_markers(&slide, Sigil::Component));
    }

    #[test]
    fn tolerates_partial_and_malformed_elements() {
        let slide = slide_from_json(serde_json::json!({
            "objectId": "slide_2",
            "pageElements": [
                {"objectId": "no_shape_or_table"},
                {"objectId": "shape_without_text", "shape": {}},
                {"shape": {"text": {}}},
                {"shape": {"text": {"textElements": [{"paragraphMarker": {}}]}}},
                {"table": {"tableRows": [{"tableCells": [{}]}, {}]}},
                {"shape": {"text": {"textElements": [
                    {"textRun": {}},
                    {"textRun": {"content": "#ok"}}
                ]}}}
            ]
        }));
        assert!(find_markers(&slide, Sigil::Identifier).is_empty());
        let components = find_markers(&slide, Sigil::Component);
        assert_eq!(components.into_iter().collect::<Vec<_>>(), vec!["#ok"]);
    }

    #[test]
    fn empty_slide_yields_empty_sets() {
        let slide = slide_from_json(serde_json::json!({"objectId": "blank"}));
        assert!(find_markers(&slide, Sigil::Identifier).is_empty());
        assert!(find_markers(&slide, Sigil::Component).is_empty());
    }
}
