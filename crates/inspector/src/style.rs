//! Inline style patch application.
//!
//! Write-only: a patch is applied property by property to the tracked
//! element's inline style and then discarded. Last writer wins, matching
//! direct DOM style mutation semantics; reading current style back for
//! display is the panel's concern.

use crate::tracker::ElementTracker;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// A transient set of inline style properties to apply in one commit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StylePatch {
    props: Vec<(String, String)>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property to the patch.
    ///
    /// Accepts either a CSS name (`font-size`) or its camelCase form
    /// (`fontSize`); camelCase is normalized to the CSS name.
    pub fn set(mut self, property: &str, value: &str) -> Self {
        self.props.push((css_property_name(property), value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

/// Convert a camelCase style key to its CSS property name.
/// Names already in CSS form pass through unchanged.
fn css_property_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

impl ElementTracker {
    /// Apply every property in `patch` to the tracked element's inline
    /// style. No-op when nothing is tracked; a property that fails to set
    /// is logged and skipped, the rest of the patch still applies.
    pub fn apply_style(&self, patch: &StylePatch) {
        let Some(element) = self.tracked_untracked() else {
            log::debug!("apply_style skipped: no element tracked");
            return;
        };
        let Some(html) = element.dyn_ref::<HtmlElement>() else {
            log::debug!("apply_style skipped: tracked element has no inline style");
            return;
        };
        let style = html.style();
        for (property, value) in patch.iter() {
            if let Err(err) = style.set_property(property, value) {
                log::warn!("failed to set style property `{property}`: {err:?}");
            }
        }
        self.bump();
    }
}
