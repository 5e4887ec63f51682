//! Generic controls the panels are built from.

use crate::components::event_target_value;
use leptos::prelude::*;

/// Labeled text input; the basic control of the editor rows.
#[component]
pub fn FormControl(
    /// Current value shown in the input.
    #[prop(into)]
    value: Signal<String>,
    /// Called with the input's value on every keystroke.
    on_input: Callback<String>,
    #[prop(optional, into)] label: String,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let label_view = (!label.is_empty())
        .then(|| view! { <span class="inspector-control-label">{label.clone()}</span> });
    view! {
        <label class="inspector-control">
            {label_view}
            <input
                class="inspector-input"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Minimal dropdown select.
#[component]
pub fn Select(
    options: Vec<SelectOption>,
    /// Value of the currently selected option.
    #[prop(into)]
    value: Signal<String>,
    /// Called with the value of the picked option.
    on_select: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    let label_options = options.clone();
    let trigger_label = move || {
        let current = value.get();
        label_options
            .iter()
            .find(|o| o.value == current)
            .map(|o| o.label.clone())
            .unwrap_or_else(|| {
                if placeholder.is_empty() {
                    current
                } else {
                    placeholder.clone()
                }
            })
    };

    view! {
        <div class="inspector-select">
            <button
                class="inspector-select-trigger"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {trigger_label}
            </button>
            <Show when=move || open.get()>
                {
                    let options = options.clone();
                    move || {
                        options
                            .clone()
                            .into_iter()
                            .map(|option| {
                                let is_active = {
                                    let v = option.value.clone();
                                    move || value.get() == v
                                };
                                let pick = {
                                    let v = option.value.clone();
                                    move |_| {
                                        on_select.run(v.clone());
                                        set_open.set(false);
                                    }
                                };
                                view! {
                                    <button
                                        class=move || {
                                            if is_active() {
                                                "inspector-select-item active"
                                            } else {
                                                "inspector-select-item"
                                            }
                                        }
                                        on:click=pick
                                    >
                                        {option.label.clone()}
                                    </button>
                                }
                            })
                            .collect_view()
                    }
                }
            </Show>
        </div>
    }
}
