//! Attribute synchronization engine.
//!
//! Derives an ordered attribute-name → token-set view from the tracked
//! element and commits edited token sets back to it. The view is recomputed
//! in full whenever the tracked reference changes or a resync fires; it is
//! never patched incrementally, so external mutations can never leave it
//! half-stale.

use crate::error::ContextError;
use crate::tracker::{expect_tracker, ElementTracker};
use indexmap::IndexMap;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::Element;

/// Token standing in for "attribute present with an empty value".
///
/// Splitting `""` on whitespace yields no tokens, which would be
/// indistinguishable from an absent attribute; the placeholder keeps the two
/// states apart so presence checkboxes in the panel can represent both.
pub const EMPTY_VALUE_PLACEHOLDER: &str = "~";

/// Tokenized view of a single attribute value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeEntry {
    /// Every whitespace-delimited token of the raw value, in source order,
    /// duplicates preserved. An empty raw value yields exactly
    /// `[EMPTY_VALUE_PLACEHOLDER]`, never an empty list.
    pub all: Vec<String>,
    /// Tokens currently "on" when the attribute is edited as a toggle set.
    /// Mirrors `all` with duplicates collapsed to first occurrence; any
    /// richer toggle semantics are layered by the panel, not here.
    pub active: Vec<String>,
}

impl AttributeEntry {
    /// Tokenize a raw attribute value.
    pub fn from_value(value: &str) -> Self {
        let all = split_value_tokens(value);
        let active = dedup_first_occurrence(&all);
        Self { all, active }
    }
}

/// Attribute name → entry, insertion order = the element's attribute order.
pub type AttributeMap = IndexMap<String, AttributeEntry>;

/// Engine keeping the attribute view and the live element consistent.
#[derive(Clone, Copy)]
pub struct AttributeSync {
    tracker: ElementTracker,
    /// Current attribute view; the empty map when nothing is tracked.
    pub attributes: Memo<AttributeMap>,
}

impl AttributeSync {
    pub fn new(tracker: ElementTracker) -> Self {
        let attributes = Memo::new(move |_| match tracker.tracked() {
            Some(element) => read_attribute_map(&element),
            None => AttributeMap::new(),
        });
        Self { tracker, attributes }
    }

    /// Commit an edited token list for attribute `name`.
    ///
    /// An empty list removes the attribute entirely; a non-empty list is
    /// joined by single spaces in the given order, and the committed string
    /// is the sole source of attribute ordering. With no element tracked this
    /// is a no-op: the panel may be mid-transition between selections.
    ///
    /// Invalid attribute names propagate the platform error untouched; the
    /// engine performs no legality validation of its own.
    pub fn update_attribute(&self, name: &str, tokens: &[String]) -> Result<(), JsValue> {
        let Some(element) = self.tracker.tracked_untracked() else {
            log::debug!("update_attribute `{name}` skipped: no element tracked");
            return Ok(());
        };
        if tokens.is_empty() {
            element.remove_attribute(name)?;
        } else {
            element.set_attribute(name, &tokens.join(" "))?;
        }
        // Make the write visible to the next read of the derived view.
        self.tracker.bump();
        Ok(())
    }
}

/// Read the full attribute map from a live element, in attribute order,
/// names verbatim as the DOM reports them.
fn read_attribute_map(element: &Element) -> AttributeMap {
    let mut map = AttributeMap::new();
    let attrs = element.attributes();
    for index in 0..attrs.length() {
        let Some(attr) = attrs.item(index) else { continue };
        map.insert(attr.name(), AttributeEntry::from_value(&attr.value()));
    }
    map
}

/// Split a raw attribute value into tokens, mapping the empty string to the
/// placeholder token.
fn split_value_tokens(value: &str) -> Vec<String> {
    if value.is_empty() {
        return vec![EMPTY_VALUE_PLACEHOLDER.to_string()];
    }
    value.split_whitespace().map(str::to_string).collect()
}

/// Collapse duplicates to their first occurrence, preserving order.
pub(crate) fn dedup_first_occurrence(tokens: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !seen.contains(token) {
            seen.push(token.clone());
        }
    }
    seen
}

/// Hook to access the attribute engine bound to the context tracker.
///
/// Panics with a [`ContextError`] message outside a tracking context.
pub fn use_attributes() -> AttributeSync {
    match try_use_attributes() {
        Ok(engine) => engine,
        Err(err) => panic!("{err}"),
    }
}

/// Fallible variant of [`use_attributes`].
pub fn try_use_attributes() -> Result<AttributeSync, ContextError> {
    expect_tracker("use_attributes").map(AttributeSync::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_value_into_ordered_tokens() {
        assert_eq!(
            split_value_tokens("value1 value2"),
            vec!["value1".to_string(), "value2".to_string()]
        );
        assert_eq!(
            split_value_tokens("  a \t b  c "),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn empty_value_yields_placeholder_not_empty_list() {
        assert_eq!(split_value_tokens(""), vec![EMPTY_VALUE_PLACEHOLDER.to_string()]);
    }

    #[test]
    fn whitespace_only_value_yields_no_tokens() {
        // Only the truly empty string gets the placeholder.
        assert!(split_value_tokens("   ").is_empty());
    }

    #[test]
    fn duplicates_kept_in_all_collapsed_in_active() {
        let entry = AttributeEntry::from_value("a b a c b");
        assert_eq!(entry.all, vec!["a", "b", "a", "c", "b"]);
        assert_eq!(entry.active, vec!["a", "b", "c"]);
    }

    #[test]
    fn simple_value_mirrors_all_into_active() {
        let entry = AttributeEntry::from_value("value1 value2");
        assert_eq!(entry.all, entry.active);
    }

    #[test]
    fn placeholder_participates_in_active() {
        let entry = AttributeEntry::from_value("");
        assert_eq!(entry.active, vec![EMPTY_VALUE_PLACEHOLDER.to_string()]);
    }

    #[test]
    fn dedup_preserves_first_occurrence_order() {
        let tokens: Vec<String> = ["c", "a", "c", "b", "a"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(dedup_first_occurrence(&tokens), vec!["c", "a", "b"]);
    }
}
