#![cfg(target_arch = "wasm32")]

//! Browser tests for the tracking and synchronization engines, exercised
//! against real DOM elements.

use inspector::{
    provide_tracker, try_use_attributes, try_use_class_list, try_use_element, AttributeSync,
    ClassListSync, ElementTracker, StylePatch, EMPTY_VALUE_PLACEHOLDER,
};
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Root owner for reactive state; keep it alive for the test's duration.
fn setup() -> Owner {
    let owner = Owner::new();
    owner.set();
    owner
}

fn make_element(attrs: &[(&str, &str)]) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    for (name, value) in attrs {
        element.set_attribute(name, value).unwrap();
    }
    element
}

#[wasm_bindgen_test]
fn untracked_reads_are_empty() {
    let _owner = setup();
    let tracker = ElementTracker::new();
    let attributes = AttributeSync::new(tracker);
    let classes = ClassListSync::new(tracker);

    assert!(!tracker.is_tracking());
    assert!(attributes.attributes.get().is_empty());
    assert!(classes.class_list.get().is_empty());
}

#[wasm_bindgen_test]
fn reads_tracked_element_attributes() {
    let _owner = setup();
    let tracker = ElementTracker::new();
    let attributes = AttributeSync::new(tracker);
    tracker.set_tracked(Some(make_element(&[("data-test", "value1 value2")])));

    let map = attributes.attributes.get();
    let entry = map.get("data-test").expect("data-test should be present");
    assert_eq!(entry.all, vec!["value1", "value2"]);
    assert!(entry.active.contains(&"value1".to_string()));
    assert!(entry.active.contains(&"value2".to_string()));
}

#[wasm_bindgen_test]
fn attribute_map_preserves_attribute_order() {
    let _owner = setup();
    let tracker = ElementTracker::new();
    let attributes = AttributeSync::new(tracker);
    tracker.set_tracked(Some(make_element(&[
        ("id", "target"),
        ("data-a", "1"),
        ("data-b", "2"),
    ])));

    let names: Vec<String> = attributes.attributes.get().keys().cloned().collect();
    assert_eq!(names, vec!["id", "data-a", "data-b"]);
}

#[wasm_bindgen_test]
fn update_attribute_commits_joined_tokens() {
    let _owner = setup();
    let tracker = ElementTracker::new();
    let attributes = AttributeSync::new(tracker);
    let element = make_element(&[("data-test", "value1")]);
    tracker.set_tracked(Some(element.clone()));

    attributes
        .update_attribute("data-test", &["value1".to_string(), "value2".to_string()])
        .unwrap();

    assert_eq!(element.get_attribute("data-test").as_deref(), Some("value1 value2"));
    // The committed write is visible on the next read of the derived view.
    let map = attributes.attributes.get();
    assert_eq!(map.get("data-test").unwrap().all, vec!["value1", "value2"]);
}

#[wasm_bindgen_test]
fn empty_value_reads_as_placeholder() {
    let _owner = setup();
    let tracker = ElementTracker::new();
    let attributes = AttributeSync::new(tracker);
    tracker.set_tracked(Some(make_element(&[("data-test", "")])));

    let map = attributes.attributes.get();
    let entry = map.get("data-test").expect("data-test should be present");
    assert_eq!(entry.all, vec![EMPTY_VALUE_PLACEHOLDER.to_string()]);
}

#[wasm_bindgen_test]
fn empty_token_list_removes_attribute() {
    let _owner = setup();
    let tracker = ElementTracker::new();
    let attributes = AttributeSync::new(tracker);
    let element = make_element(&[("data-test", "value1")]);
    tracker.set_tracked(Some(element.clone()));

    attributes.update_attribute("data-test", &[]).unwrap();

    assert!(!element.has_attribute("data-test"));
    assert!(attributes.attributes.get().get("data-test").is_none());
}

#[wasm_bindgen_test]
fn round_trip_preserves_token_order() {
    let _owner = setup();
    let tracker = ElementTracker::new();
    let attributes = AttributeSync::new(tracker);
    let element = make_element(&[]);
    tracker.set_tracked(Some(element.clone()));

    let tokens: Vec<String> = ["c", "a", "b"].iter().map(|s| s.to_string()).collect();
    attributes.update_attribute("data-roles", &tokens).unwrap();

    assert_eq!(element.get_attribute("data-roles").as_deref(), Some("c a b"));
    let map = attributes.attributes.get();
    assert_eq!(map.get("data-roles").unwrap().all, vec!["c", "a", "b"]);
}

#[wasm_bindgen_test]
fn invalid_attribute_name_propagates_platform_error() {
    let _owner = setup();
    let tracker = ElementTracker::new();
    let attributes = AttributeSync::new(tracker);
    tracker.set_tracked(Some(make_element(&[])));

    let result = attributes.update_attribute("not a name", &["x".to_string()]);
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn class_list_reads_in_dom_order() {
    let _owner = setup();
    let tracker = ElementTracker::new();
    let classes = ClassListSync::new(tracker);
    tracker.set_tracked(Some(make_element(&[("class", "test-class another-class")])));

    assert_eq!(classes.class_list.get(), vec!["test-class", "another-class"]);
}

#[wasm_bindgen_test]
fn duplicate_class_tokens_collapse_to_first_occurrence() {
    let _owner = setup();
    let tracker = ElementTracker::new();
    let classes = ClassListSync::new(tracker);
    tracker.set_tracked(Some(make_element(&[("class", "a b a c b")])));

    assert_eq!(classes.class_list.get(), vec!["a", "b", "c"]);
}

#[wasm_bindgen_test]
fn class_order_survives_remove_and_readd() {
    let _owner = setup();
    let tracker = ElementTracker::new();
    let classes = ClassListSync::new(tracker);
    let element = make_element(&[("class", "class-a class-b class-c")]);
    tracker.set_tracked(Some(element.clone()));

    let full: Vec<String> = ["class-a", "class-b", "class-c"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let without_b: Vec<String> = ["class-a", "class-c"].iter().map(|s| s.to_string()).collect();

    // The caller re-inserts at the original position; the engine writes the
    // given order verbatim both times.
    classes.write_class_list(&without_b);
    assert_eq!(element.class_name(), "class-a class-c");
    classes.write_class_list(&full);
    assert_eq!(element.class_name(), "class-a class-b class-c");
    assert_eq!(classes.class_list.get(), full);
}

#[wasm_bindgen_test]
fn writes_without_tracked_element_are_tolerated() {
    let _owner = setup();
    let tracker = ElementTracker::new();
    let attributes = AttributeSync::new(tracker);
    let classes = ClassListSync::new(tracker);

    assert!(attributes
        .update_attribute("data-test", &["x".to_string()])
        .is_ok());
    classes.write_class_list(&["a".to_string()]);
    tracker.apply_style(&StylePatch::new().set("color", "red"));
}

#[wasm_bindgen_test]
fn style_patch_applies_to_inline_style() {
    let _owner = setup();
    let tracker = ElementTracker::new();
    let element = make_element(&[]);
    tracker.set_tracked(Some(element.clone()));

    tracker.apply_style(&StylePatch::new().set("color", "red").set("fontSize", "16px"));

    let style = element.dyn_ref::<HtmlElement>().unwrap().style();
    assert_eq!(style.get_property_value("color").unwrap(), "red");
    assert_eq!(style.get_property_value("font-size").unwrap(), "16px");
}

#[wasm_bindgen_test]
fn resync_surfaces_external_mutation() {
    let _owner = setup();
    let tracker = ElementTracker::new();
    let attributes = AttributeSync::new(tracker);
    let element = make_element(&[("data-test", "before")]);
    tracker.set_tracked(Some(element.clone()));
    assert_eq!(attributes.attributes.get().get("data-test").unwrap().all, vec!["before"]);

    // Out-of-band mutation is invisible until a resync is requested.
    element.set_attribute("data-test", "after").unwrap();
    assert_eq!(attributes.attributes.get().get("data-test").unwrap().all, vec!["before"]);

    tracker.resync();
    assert_eq!(attributes.attributes.get().get("data-test").unwrap().all, vec!["after"]);
}

#[wasm_bindgen_test]
fn reselection_replaces_the_view() {
    let _owner = setup();
    let tracker = ElementTracker::new();
    let attributes = AttributeSync::new(tracker);
    tracker.set_tracked(Some(make_element(&[("data-test", "first")])));
    assert_eq!(attributes.attributes.get().get("data-test").unwrap().all, vec!["first"]);

    tracker.set_tracked(Some(make_element(&[("data-test", "second")])));
    assert_eq!(attributes.attributes.get().get("data-test").unwrap().all, vec!["second"]);

    tracker.set_tracked(None);
    assert!(attributes.attributes.get().is_empty());
}

#[wasm_bindgen_test]
fn hooks_fail_without_context() {
    let _owner = setup();

    let err = try_use_element().unwrap_err();
    assert_eq!(err.hook(), "use_element");
    assert!(err
        .to_string()
        .contains("must be used within a component that provides the element tracking context"));

    assert!(try_use_attributes().is_err());
    assert!(try_use_class_list().is_err());
}

#[wasm_bindgen_test]
fn hooks_resolve_inside_a_provider() {
    let _owner = setup();
    let provided = provide_tracker();

    let tracker = try_use_element().unwrap();
    let attributes = try_use_attributes().unwrap();
    assert!(try_use_class_list().is_ok());

    // Hooks hand out the provided tracker, not a fresh one.
    provided.set_tracked(Some(make_element(&[("data-test", "shared")])));
    assert!(tracker.is_tracking());
    assert!(attributes.attributes.get().get("data-test").is_some());
}
