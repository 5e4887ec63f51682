//! Class list synchronization engine.
//!
//! A thin set-and-read-back primitive over the `class` attribute. The read
//! view preserves DOM-attribute order with duplicates collapsed to first
//! occurrence; the write path commits exactly the order it is given and
//! never reorders tokens itself. Partial add/remove is the caller's job,
//! expressed as a full replacement list computed from the last-read state;
//! that is what lets the panel re-insert a class at its original relative
//! position.

use crate::attributes::dedup_first_occurrence;
use crate::error::ContextError;
use crate::tracker::{expect_tracker, ElementTracker};
use leptos::prelude::*;
use web_sys::Element;

/// Engine keeping the class list view and the live element consistent.
#[derive(Clone, Copy)]
pub struct ClassListSync {
    tracker: ElementTracker,
    /// Class tokens in committed DOM order; empty when nothing is tracked
    /// or the element has no `class` attribute.
    pub class_list: Memo<Vec<String>>,
}

impl ClassListSync {
    pub fn new(tracker: ElementTracker) -> Self {
        let class_list = Memo::new(move |_| match tracker.tracked() {
            Some(element) => read_class_list(&element),
            None => Vec::new(),
        });
        Self { tracker, class_list }
    }

    /// Replace the element's class attribute with `classes`, joined by
    /// single spaces in the given order, duplicates collapsed to first
    /// occurrence. No-op when nothing is tracked.
    pub fn write_class_list(&self, classes: &[String]) {
        let Some(element) = self.tracker.tracked_untracked() else {
            log::debug!("write_class_list skipped: no element tracked");
            return;
        };
        let deduped = dedup_first_occurrence(classes);
        element.set_class_name(&deduped.join(" "));
        self.tracker.bump();
    }
}

fn read_class_list(element: &Element) -> Vec<String> {
    match element.get_attribute("class") {
        Some(value) => {
            let tokens: Vec<String> = value.split_whitespace().map(str::to_string).collect();
            dedup_first_occurrence(&tokens)
        }
        None => Vec::new(),
    }
}

/// Hook to access the class list engine bound to the context tracker.
///
/// Panics with a [`ContextError`] message outside a tracking context.
pub fn use_class_list() -> ClassListSync {
    match try_use_class_list() {
        Ok(engine) => engine,
        Err(err) => panic!("{err}"),
    }
}

/// Fallible variant of [`use_class_list`].
pub fn try_use_class_list() -> Result<ClassListSync, ContextError> {
    expect_tracker("use_class_list").map(ClassListSync::new)
}
