//! Attribute editing panel.
//!
//! Toggle semantics live here, not in the engine: a token checkbox commits
//! the full token list with that token filtered out, computed from the
//! last-read entry. The engine only ever sees full replacement lists.

use crate::components::event_target_value;
use crate::components::widgets::FormControl;
use inspector::{use_attributes, AttributeEntry, AttributeSync, EMPTY_VALUE_PLACEHOLDER};
use leptos::prelude::*;

#[component]
pub fn AttributesPanel() -> impl IntoView {
    let engine = use_attributes();
    let (new_name, set_new_name) = signal(String::new());
    let (new_value, set_new_value) = signal(String::new());

    let add_attribute = move |_| {
        let name = new_name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        // An empty value field still creates the attribute: a single empty
        // token joins to the empty string.
        let raw = new_value.get_untracked();
        let mut tokens: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
        if tokens.is_empty() {
            tokens.push(String::new());
        }
        match engine.update_attribute(&name, &tokens) {
            Ok(()) => {
                set_new_name.set(String::new());
                set_new_value.set(String::new());
            }
            Err(err) => log::warn!("failed to add attribute `{name}`: {err:?}"),
        }
    };

    view! {
        <div class="inspector-section">
            {move || {
                engine
                    .attributes
                    .get()
                    .into_iter()
                    .map(|(name, entry)| view! { <AttributeRow engine=engine name=name entry=entry /> })
                    .collect_view()
            }}
            <div class="inspector-row inspector-add-row">
                <FormControl
                    value=new_name
                    on_input=Callback::new(move |v| set_new_name.set(v))
                    placeholder="name"
                />
                <FormControl
                    value=new_value
                    on_input=Callback::new(move |v| set_new_value.set(v))
                    placeholder="value"
                />
                <button class="inspector-btn" on:click=add_attribute>"Add"</button>
            </div>
        </div>
    }
}

#[component]
fn AttributeRow(engine: AttributeSync, name: String, entry: AttributeEntry) -> impl IntoView {
    // The placeholder encodes "present but empty"; the editor shows the
    // actual (empty) value.
    let display_value = if entry.all == [EMPTY_VALUE_PLACEHOLDER] {
        String::new()
    } else {
        entry.all.join(" ")
    };
    let (draft, set_draft) = signal(display_value);

    let name_for_commit = name.clone();
    let commit_draft = move |_| {
        // Clearing the editor removes the attribute.
        let tokens: Vec<String> = draft
            .get_untracked()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if let Err(err) = engine.update_attribute(&name_for_commit, &tokens) {
            log::warn!("failed to update attribute `{name_for_commit}`: {err:?}");
        }
    };

    let name_for_remove = name.clone();
    let remove = move |_| {
        if let Err(err) = engine.update_attribute(&name_for_remove, &[]) {
            log::warn!("failed to remove attribute `{name_for_remove}`: {err:?}");
        }
    };

    let token_boxes = {
        let name = name.clone();
        let all = entry.all.clone();
        entry
            .active
            .iter()
            .cloned()
            .map(|token| {
                let name = name.clone();
                let all = all.clone();
                let label = token.clone();
                let on_toggle = move |_| {
                    let next: Vec<String> = all.iter().filter(|t| **t != token).cloned().collect();
                    if let Err(err) = engine.update_attribute(&name, &next) {
                        log::warn!("failed to update attribute `{name}`: {err:?}");
                    }
                };
                view! {
                    <label class="inspector-token">
                        <input type="checkbox" checked=true on:change=on_toggle />
                        <span>{label}</span>
                    </label>
                }
            })
            .collect_view()
    };

    view! {
        <div class="inspector-attribute">
            <div class="inspector-row">
                <span class="inspector-attr-name">{name.clone()}</span>
                <input
                    class="inspector-input"
                    prop:value=draft
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:change=commit_draft
                />
                <button class="inspector-btn" on:click=remove>"Remove"</button>
            </div>
            <div class="inspector-row inspector-tokens">{token_boxes}</div>
        </div>
    }
}
