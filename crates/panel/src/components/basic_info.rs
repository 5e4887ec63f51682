//! Basic facts about the tracked element: tag, id, geometry, selector.

use crate::clipboard::copy_to_clipboard;
use crate::unit::Unit;
use inspector::use_element;
use leptos::prelude::*;
use web_sys::Element;

#[derive(Clone, Debug, PartialEq)]
struct ElementSummary {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    width: f64,
    height: f64,
}

impl ElementSummary {
    fn read(element: &Element) -> Self {
        let rect = element.get_bounding_client_rect();
        let classes = element
            .get_attribute("class")
            .map(|v| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        Self {
            tag: element.tag_name().to_lowercase(),
            id: element.get_attribute("id"),
            classes,
            width: rect.width(),
            height: rect.height(),
        }
    }

    /// Selector-shaped description, for display and copying.
    fn selector(&self) -> String {
        let mut out = self.tag.clone();
        if let Some(id) = &self.id {
            out.push('#');
            out.push_str(id);
        }
        for class in &self.classes {
            out.push('.');
            out.push_str(class);
        }
        out
    }
}

#[component]
pub fn BasicInfo() -> impl IntoView {
    let tracker = use_element();
    let summary = Memo::new(move |_| tracker.tracked().map(|el| ElementSummary::read(&el)));

    move || {
        summary.get().map(|s| {
            let selector = s.selector();
            let copy = {
                let selector = selector.clone();
                move |_| copy_to_clipboard(&selector)
            };
            view! {
                <div class="inspector-section">
                    <div class="inspector-cell">
                        <span class="inspector-cell-label">"Tag"</span>
                        <span>{s.tag.clone()}</span>
                    </div>
                    <div class="inspector-cell">
                        <span class="inspector-cell-label">"Id"</span>
                        <span>{s.id.clone().unwrap_or_else(|| "-".to_string())}</span>
                    </div>
                    <div class="inspector-cell">
                        <span class="inspector-cell-label">"Size"</span>
                        <span>
                            {format!("{} x {}", Unit::Px.format(s.width), Unit::Px.format(s.height))}
                        </span>
                    </div>
                    <div class="inspector-cell">
                        <span class="inspector-cell-label">"Selector"</span>
                        <code>{selector.clone()}</code>
                        <button class="inspector-btn" on:click=copy>"Copy"</button>
                    </div>
                </div>
            }
        })
    }
}
