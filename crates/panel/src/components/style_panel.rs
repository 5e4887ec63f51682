//! Inline style editor: property/value rows queued into one patch and
//! applied as a unit.

use crate::components::widgets::FormControl;
use inspector::{use_element, StylePatch};
use leptos::prelude::*;

#[component]
pub fn StylePanel() -> impl IntoView {
    let tracker = use_element();
    let pending = RwSignal::new(Vec::<(String, String)>::new());
    let (property, set_property) = signal(String::new());
    let (value, set_value) = signal(String::new());

    let queue = move |_| {
        let prop = property.get_untracked().trim().to_string();
        let val = value.get_untracked().trim().to_string();
        if prop.is_empty() || val.is_empty() {
            return;
        }
        pending.update(|p| p.push((prop, val)));
        set_property.set(String::new());
        set_value.set(String::new());
    };

    let apply = move |_| {
        let patch = pending
            .get_untracked()
            .iter()
            .fold(StylePatch::new(), |patch, (prop, val)| patch.set(prop, val));
        if patch.is_empty() {
            return;
        }
        tracker.apply_style(&patch);
        pending.set(Vec::new());
    };

    view! {
        <div class="inspector-section">
            <div class="inspector-row inspector-add-row">
                <FormControl
                    value=property
                    on_input=Callback::new(move |v| set_property.set(v))
                    placeholder="property, e.g. fontSize"
                />
                <FormControl
                    value=value
                    on_input=Callback::new(move |v| set_value.set(v))
                    placeholder="value"
                />
                <button class="inspector-btn" on:click=queue>"Queue"</button>
            </div>
            {move || {
                let rows = pending.get();
                (!rows.is_empty())
                    .then(move || {
                        view! {
                            <div class="inspector-pending">
                                {rows
                                    .iter()
                                    .enumerate()
                                    .map(|(index, (prop, val))| {
                                        let drop_row = move |_| {
                                            pending.update(|p| {
                                                if index < p.len() {
                                                    p.remove(index);
                                                }
                                            });
                                        };
                                        view! {
                                            <div class="inspector-row">
                                                <code>{format!("{prop}: {val}")}</code>
                                                <button class="inspector-btn" on:click=drop_row>"x"</button>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                                <button class="inspector-btn" on:click=apply>"Apply"</button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
