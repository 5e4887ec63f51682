//! Box model metrics from computed style, with a px/rem display toggle.

use crate::components::widgets::{Select, SelectOption};
use crate::unit::Unit;
use inspector::use_element;
use leptos::prelude::*;
use web_sys::Element;

#[derive(Clone, Debug, Default, PartialEq)]
struct BoxMetrics {
    margin: [f64; 4],
    border: [f64; 4],
    padding: [f64; 4],
    width: f64,
    height: f64,
}

/// Read computed box metrics; `None` outside a window context.
fn read_box_metrics(element: &Element) -> Option<BoxMetrics> {
    let style = web_sys::window()?.get_computed_style(element).ok()??;
    let px = |property: &str| {
        style
            .get_property_value(property)
            .ok()
            .and_then(|v| v.trim_end_matches("px").parse::<f64>().ok())
            .unwrap_or(0.0)
    };
    let sides =
        |prefix: &str, suffix: &str| ["top", "right", "bottom", "left"].map(|side| px(&format!("{prefix}-{side}{suffix}")));
    Some(BoxMetrics {
        margin: sides("margin", ""),
        border: sides("border", "-width"),
        padding: sides("padding", ""),
        width: px("width"),
        height: px("height"),
    })
}

#[component]
pub fn BoxModel() -> impl IntoView {
    let tracker = use_element();
    let metrics = Memo::new(move |_| tracker.tracked().and_then(|el| read_box_metrics(&el)));
    let unit = RwSignal::new(Unit::Px);

    view! {
        <div class="inspector-section">
            <div class="inspector-cell">
                <span class="inspector-cell-label">"Units"</span>
                <Select
                    options=vec![SelectOption::new("px", "px"), SelectOption::new("rem", "rem")]
                    value=Signal::derive(move || unit.get().label().to_string())
                    on_select=Callback::new(move |v: String| {
                        unit.set(if v == "rem" { Unit::Rem } else { Unit::Px });
                    })
                />
            </div>
            {move || {
                metrics
                    .get()
                    .map(|m| {
                        let u = unit.get();
                        // Values in top / right / bottom / left order.
                        let row = |label: &'static str, values: [f64; 4]| {
                            let text = values.map(|v| u.format(v)).join(" ");
                            view! {
                                <div class="inspector-cell">
                                    <span class="inspector-cell-label">{label}</span>
                                    <span>{text}</span>
                                </div>
                            }
                        };
                        view! {
                            <div class="inspector-box-model">
                                {row("Margin", m.margin)}
                                {row("Border", m.border)}
                                {row("Padding", m.padding)}
                                <div class="inspector-cell">
                                    <span class="inspector-cell-label">"Content"</span>
                                    <span>{format!("{} x {}", u.format(m.width), u.format(m.height))}</span>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
