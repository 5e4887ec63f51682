//! The floating inspector window: picker control, tab navigation and the
//! per-tab panels.

use crate::components::attributes_panel::AttributesPanel;
use crate::components::basic_info::BasicInfo;
use crate::components::box_model::BoxModel;
use crate::components::class_list_panel::ClassListPanel;
use crate::components::style_panel::StylePanel;
use crate::picker::ElementPicker;
use inspector::use_element;
use leptos::prelude::*;

/// Marker class added to the host page body while the inspector is mounted.
const BODY_MARKER_CLASS: &str = "inspector-injected";

#[derive(Clone, Copy, PartialEq, Eq)]
enum PanelTab {
    Basic,
    BoxModel,
    Attributes,
    Classes,
    Style,
}

impl PanelTab {
    fn title(&self) -> &'static str {
        match self {
            PanelTab::Basic => "Basic",
            PanelTab::BoxModel => "Box",
            PanelTab::Attributes => "Attributes",
            PanelTab::Classes => "Classes",
            PanelTab::Style => "Style",
        }
    }

    fn all() -> [PanelTab; 5] {
        [
            PanelTab::Basic,
            PanelTab::BoxModel,
            PanelTab::Attributes,
            PanelTab::Classes,
            PanelTab::Style,
        ]
    }
}

fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
}

#[component]
pub fn Inspector() -> impl IntoView {
    let tracker = use_element();
    let picker = ElementPicker::new(tracker);
    let active_tab = RwSignal::new(PanelTab::Basic);

    // Mark the host page while the inspector is mounted.
    if let Some(body) = body() {
        let _ = body.class_list().add_1(BODY_MARKER_CLASS);
    }
    on_cleanup(move || {
        picker.stop();
        if let Some(body) = body() {
            let _ = body.class_list().remove_1(BODY_MARKER_CLASS);
        }
    });

    let toggle_picking = move |_| {
        if picker.is_active() {
            picker.stop();
        } else {
            picker.start();
        }
    };

    view! {
        <div class="inspector-window">
            <div class="inspector-header">
                <span class="inspector-title">"Inspector"</span>
                <button
                    class="inspector-btn"
                    class:active=move || picker.is_active()
                    on:click=toggle_picking
                >
                    {move || if picker.is_active() { "Cancel" } else { "Pick element" }}
                </button>
                <Show when=move || tracker.is_tracking()>
                    <button
                        class="inspector-btn"
                        title="Re-read state from the live element"
                        on:click=move |_| tracker.resync()
                    >
                        "Resync"
                    </button>
                    <button class="inspector-btn" on:click=move |_| tracker.set_tracked(None)>
                        "Deselect"
                    </button>
                </Show>
            </div>
            <div class="inspector-tabs">
                {PanelTab::all()
                    .into_iter()
                    .map(|tab| {
                        let is_active = move || active_tab.get() == tab;
                        view! {
                            <button
                                class=move || {
                                    if is_active() { "inspector-tab active" } else { "inspector-tab" }
                                }
                                on:click=move |_| active_tab.set(tab)
                            >
                                {tab.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="inspector-body">
                <Show
                    when=move || tracker.is_tracking()
                    fallback=|| {
                        view! { <div class="inspector-empty">"Pick an element to inspect."</div> }
                    }
                >
                    {move || match active_tab.get() {
                        PanelTab::Basic => view! { <BasicInfo /> }.into_any(),
                        PanelTab::BoxModel => view! { <BoxModel /> }.into_any(),
                        PanelTab::Attributes => view! { <AttributesPanel /> }.into_any(),
                        PanelTab::Classes => view! { <ClassListPanel /> }.into_any(),
                        PanelTab::Style => view! { <StylePanel /> }.into_any(),
                    }}
                </Show>
            </div>
        </div>
    }
}
