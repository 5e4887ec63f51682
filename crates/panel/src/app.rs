use crate::components::inspector::Inspector;
use inspector::TrackerProvider;
use leptos::prelude::*;

/// Root component: establishes the tracking context for the whole panel.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <TrackerProvider>
            <Inspector />
        </TrackerProvider>
    }
}
