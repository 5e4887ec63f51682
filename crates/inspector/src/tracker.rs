//! Shared reference to the currently inspected element.
//!
//! One [`ElementTracker`] exists per inspector session. It is provided via
//! context by [`TrackerProvider`] (or [`provide_tracker`]) and consumed by
//! the attribute/class/style engines, which only ever read through it and
//! mutate the element it points to. Replacing the reference itself is the
//! selection flow's job.
//!
//! Change propagation uses a version counter instead of per-view
//! subscriptions: every derived view tracks `version` and recomputes on its
//! next read after the counter is bumped. [`ElementTracker::resync`] bumps it
//! manually when the page's own scripts may have mutated the element outside
//! the commit paths.

use crate::error::ContextError;
use leptos::prelude::*;
use web_sys::Element;

/// Handle to the single shared tracked-element cell.
///
/// `Copy`, so it can be captured freely by memos and event handlers.
#[derive(Clone, Copy)]
pub struct ElementTracker {
    /// Currently tracked element. `Element` is not Send+Sync, store locally.
    element: RwSignal<Option<Element>, LocalStorage>,
    /// Bumped on selection, on every commit and on `resync`.
    version: RwSignal<u64>,
}

impl ElementTracker {
    pub fn new() -> Self {
        Self {
            element: RwSignal::new_local(None),
            version: RwSignal::new(0),
        }
    }

    /// The currently tracked element, or `None` between selections.
    ///
    /// Reactive: a memo or effect reading this re-runs when the selection
    /// changes, when an engine commits, and on [`ElementTracker::resync`].
    pub fn tracked(&self) -> Option<Element> {
        self.version.track();
        self.element.get()
    }

    /// Non-reactive peek at the tracked element, for commit paths and event
    /// handlers that must not subscribe.
    pub fn tracked_untracked(&self) -> Option<Element> {
        self.element.get_untracked()
    }

    /// Whether an element is currently tracked.
    pub fn is_tracking(&self) -> bool {
        self.version.track();
        self.element.with(|el| el.is_some())
    }

    /// Replace the shared reference. Passing `None` deselects.
    ///
    /// All dependent views observe the new value on their next access; the
    /// previous element's derived state is discarded wholesale.
    pub fn set_tracked(&self, element: Option<Element>) {
        self.element.set(element);
        self.bump();
    }

    /// Force every derived view to recompute from the live element.
    ///
    /// Call after external code is known or suspected to have mutated the
    /// tracked element outside the engine commit paths. Touches no DOM state
    /// itself.
    pub fn resync(&self) {
        self.bump();
    }

    pub(crate) fn bump(&self) {
        self.version.update(|v| *v = v.wrapping_add(1));
    }
}

impl Default for ElementTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fresh tracker and provide it to the current reactive scope.
///
/// Returns the handle so the caller (the selection flow) can keep writing
/// into it via [`ElementTracker::set_tracked`].
pub fn provide_tracker() -> ElementTracker {
    let tracker = ElementTracker::new();
    provide_context(tracker);
    tracker
}

/// Provides the element tracking context to children components.
#[component]
pub fn TrackerProvider(children: Children) -> impl IntoView {
    provide_tracker();
    children()
}

/// Hook to access the tracked element, the style applier and `resync`.
///
/// Panics with a [`ContextError`] message when called outside a
/// [`TrackerProvider`].
pub fn use_element() -> ElementTracker {
    match try_use_element() {
        Ok(tracker) => tracker,
        Err(err) => panic!("{err}"),
    }
}

/// Fallible variant of [`use_element`].
pub fn try_use_element() -> Result<ElementTracker, ContextError> {
    expect_tracker("use_element")
}

pub(crate) fn expect_tracker(hook: &'static str) -> Result<ElementTracker, ContextError> {
    use_context::<ElementTracker>().ok_or_else(|| ContextError::new(hook))
}
