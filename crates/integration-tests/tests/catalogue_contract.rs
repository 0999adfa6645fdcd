//! Contract checks across the whole query catalogue.
//!
//! Every document is checked against its Rust variables type and against
//! the other documents that share its fragments.

use std::collections::{BTreeMap, BTreeSet};

use saleor_dashboard_admin::saleor::fragments;
use saleor_dashboard_admin::saleor::lint::{self, outline};
use saleor_dashboard_admin::saleor::CATALOGUE;

#[test]
fn test_declared_variables_match_references_and_rust_fields() {
    for entry in CATALOGUE {
        let outline = outline(entry.document()).expect("document parses");
        let operation = outline.operations.first().expect("one operation");

        let used = outline.variables_used_by(operation);
        assert_eq!(operation.declared, used, "{}: declared vs referenced", entry.key);

        let example = entry.example().expect("example serializes");
        let fields: BTreeSet<String> = example
            .as_object()
            .expect("variables serialize as an object")
            .keys()
            .cloned()
            .collect();
        assert_eq!(operation.declared, fields, "{}: declared vs Rust fields", entry.key);
    }
}

#[test]
fn test_catalogue_is_lint_clean() {
    let issues = lint::lint_catalogue();
    let report: Vec<String> = issues.iter().map(ToString::to_string).collect();
    assert!(report.is_empty(), "{}", report.join("\n"));
}

#[test]
fn test_shared_fragments_are_identical_everywhere() {
    let mut seen: BTreeMap<String, (String, &str)> = BTreeMap::new();

    for entry in CATALOGUE {
        let outline = outline(entry.document()).expect("document parses");
        for fragment in outline.fragments {
            match seen.get(&fragment.name) {
                Some((selection, first)) => assert_eq!(
                    selection, &fragment.selection,
                    "{} differs between {first} and {}",
                    fragment.name, entry.key
                ),
                None => {
                    seen.insert(fragment.name, (fragment.selection, entry.key));
                }
            }
        }
    }

    // Every fragment in the library is used by at least one entry
    for fragment in fragments::ALL {
        assert!(seen.contains_key(fragment.name), "{} is never used", fragment.name);
    }
}

#[test]
fn test_page_info_selects_every_cursor_field() {
    const CURSOR_FIELDS: [&str; 4] = ["hasPreviousPage", "hasNextPage", "startCursor", "endCursor"];

    let page_info = outline(fragments::PAGE_INFO.source).expect("fragment parses");
    let selection = &page_info.fragment("PageInfoFragment").expect("defined").selection;
    for field in CURSOR_FIELDS {
        assert!(selection.contains(field), "PageInfoFragment selects {field}");
    }

    for key in ["product-list", "grid-attributes", "search-product-types"] {
        let entry = CATALOGUE
            .iter()
            .find(|entry| entry.key == key)
            .expect("paged entry exists");
        let document = entry.document();
        assert!(document.contains("pageInfo"), "{key} selects pageInfo");
        for field in CURSOR_FIELDS {
            assert!(document.contains(field), "{key} selects {field}");
        }
    }
}
