//! Class list panel.
//!
//! Keeps a roster of every class seen on the current element, in its
//! original DOM order. Toggling a class on commits a full replacement list
//! filtered from the roster, which is what re-inserts it at its original
//! relative position; the engine itself never reorders anything.

use crate::components::widgets::FormControl;
use crate::components::event_target_checked;
use inspector::{use_class_list, use_element};
use leptos::prelude::*;
use web_sys::Element;

#[component]
pub fn ClassListPanel() -> impl IntoView {
    let tracker = use_element();
    let engine = use_class_list();

    let roster = RwSignal::new(Vec::<String>::new());
    let last_element = StoredValue::new_local(None::<Element>);
    let (new_class, set_new_class) = signal(String::new());

    // Reset the roster on re-selection; merge newly seen classes otherwise.
    Effect::new(move |_| {
        let classes = engine.class_list.get();
        let element = tracker.tracked();
        let same_element = last_element.with_value(|prev| *prev == element);
        if same_element {
            roster.update(|r| {
                for class in &classes {
                    if !r.contains(class) {
                        r.push(class.clone());
                    }
                }
            });
        } else {
            last_element.set_value(element);
            roster.set(classes);
        }
    });

    let toggle = move |class: String, enable: bool| {
        let current = engine.class_list.get_untracked();
        let next: Vec<String> = if enable {
            roster
                .get_untracked()
                .into_iter()
                .filter(|c| current.contains(c) || *c == class)
                .collect()
        } else {
            current.into_iter().filter(|c| *c != class).collect()
        };
        engine.write_class_list(&next);
    };

    let add_class = move |_| {
        let class = new_class.get_untracked().trim().to_string();
        if class.is_empty() {
            return;
        }
        let mut next = engine.class_list.get_untracked();
        if !next.contains(&class) {
            next.push(class);
        }
        engine.write_class_list(&next);
        set_new_class.set(String::new());
    };

    view! {
        <div class="inspector-section">
            {move || {
                roster
                    .get()
                    .into_iter()
                    .map(|class| {
                        let checked = {
                            let class = class.clone();
                            move || engine.class_list.get().contains(&class)
                        };
                        let on_toggle = {
                            let class = class.clone();
                            move |ev: leptos::ev::Event| toggle(class.clone(), event_target_checked(&ev))
                        };
                        view! {
                            <label class="inspector-token">
                                <input type="checkbox" checked=checked on:change=on_toggle />
                                <span>{class.clone()}</span>
                            </label>
                        }
                    })
                    .collect_view()
            }}
            <div class="inspector-row inspector-add-row">
                <FormControl
                    value=new_class
                    on_input=Callback::new(move |v| set_new_class.set(v))
                    placeholder="class name"
                />
                <button class="inspector-btn" on:click=add_class>"Add"</button>
            </div>
        </div>
    }
}
