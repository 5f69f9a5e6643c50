use std::path::Path;

use ax_snapshot::{AxSnapshot, NodeId, SnapshotFormat};
use locator_engine::{
    find_all, find_first, parse, resolve, Attribute, LocatorError, Missing, Resolution,
};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> AxSnapshot {
    let path = Path::new("tests/fixtures").join(name);
    let text = std::fs::read_to_string(&path).expect("fixture readable");
    AxSnapshot::parse(&text, SnapshotFormat::from_path(&path)).expect("valid fixture")
}

fn ids(snapshot: &AxSnapshot, nodes: &[NodeId]) -> Vec<String> {
    nodes
        .iter()
        .map(|node| snapshot.summary(*node).id.unwrap_or_default())
        .collect()
}

#[test]
fn outer_operator_deduplicates_nested_lists() {
    let snapshot = fixture("nested_lists.json");
    let found = find_all(&snapshot, "{list} outer {listitem}", &snapshot.root(), false).unwrap();
    assert_eq!(ids(&snapshot, &found), vec!["c", "d"]);
}

#[test]
fn results_are_unique_and_in_document_order() {
    let snapshot = fixture("nested_lists.json");
    for text in ["{list}", "{list} {listitem}", "{list} outer {listitem}", "{listitem}"] {
        let found = find_all(&snapshot, text, &snapshot.root(), false).unwrap();
        assert!(
            found.windows(2).all(|pair| pair[0] < pair[1]),
            "{text} returned {found:?}"
        );
    }
}

#[test]
fn name_matching_supports_wildcards() {
    let snapshot = fixture("settings.yaml");
    let root = snapshot.root();
    let found = find_all(&snapshot, "{checkbox '*offers'}", &root, false).unwrap();
    assert_eq!(ids(&snapshot, &found), vec!["offers"]);
    let found = find_all(&snapshot, "{button 'Save*'}", &root, false).unwrap();
    assert_eq!(ids(&snapshot, &found), vec!["save"]);
}

#[test]
fn attribute_failure_reports_first_failing_attribute() {
    let snapshot = fixture("settings.yaml");
    let locator = parse("{form} {checkbox checked:true disabled:true readonly:true}").unwrap();
    let Resolution::NotFound(failure) = resolve(&snapshot, &locator, &snapshot.root(), false).unwrap()
    else {
        panic!("expected failure");
    };
    assert_eq!(failure.closest_find.len(), 1);
    assert_eq!(
        failure.not_found,
        Missing::Attribute(Attribute::new("disabled", "true"))
    );
    assert_eq!(failure.partial_find.unwrap().attributes.len(), 1);
    assert_eq!(ids(&snapshot, &failure.elements_found), vec!["newsletter"]);
}

#[test]
fn role_failure_has_no_partial_find() {
    let snapshot = fixture("settings.yaml");
    let locator = parse("{form} {slider}").unwrap();
    let result = resolve(&snapshot, &locator, &snapshot.root(), false).unwrap();
    let failure = result.failure().expect("expected failure");
    assert_eq!(failure.not_found, Missing::Role("slider".into()));
    assert!(failure.partial_find.is_none());
    assert_eq!(ids(&snapshot, &failure.elements_found), vec!["prefs"]);
}

#[test]
fn hidden_match_is_reported_by_find_first_only() {
    let snapshot = fixture("settings.yaml");
    let root = snapshot.root();

    assert!(find_all(&snapshot, "{menuitem 'Export'}", &root, false)
        .unwrap()
        .is_empty());

    match find_first(&snapshot, "{menuitem 'Export'}", &root, false) {
        Err(LocatorError::NoSuchElement(message)) => {
            assert!(message.contains("`{menuitem 'Export'}`"));
            assert!(message.contains("hidden from assistive technology"));
        }
        other => panic!("expected NoSuchElement, got {other:?}"),
    }

    let hidden = find_first(&snapshot, "{menuitem 'Export'}", &root, true).unwrap();
    assert_eq!(snapshot.summary(hidden).id.as_deref(), Some("export"));
}

#[test]
fn search_can_start_below_the_root() {
    let snapshot = fixture("nested_lists.json");
    let inner = snapshot.require("b").unwrap();
    let found = find_all(&snapshot, "{listitem}", &inner, false).unwrap();
    assert_eq!(ids(&snapshot, &found), vec!["c"]);
}

#[test]
fn repeated_resolution_is_stable() {
    let snapshot = fixture("nested_lists.json");
    let root = snapshot.root();
    let first = find_all(&snapshot, "{list} outer {listitem}", &root, false).unwrap();
    for _ in 0..3 {
        assert_eq!(
            find_all(&snapshot, "{list} outer {listitem}", &root, false).unwrap(),
            first
        );
    }
}
