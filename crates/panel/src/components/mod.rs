pub mod attributes_panel;
pub mod basic_info;
pub mod box_model;
pub mod class_list_panel;
pub mod inspector;
pub mod style_panel;
pub mod widgets;

use leptos::ev::Event;
use wasm_bindgen::JsCast;

pub(crate) fn event_target_value(ev: &Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

pub(crate) fn event_target_checked(ev: &Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.checked())
        .unwrap_or(false)
}
