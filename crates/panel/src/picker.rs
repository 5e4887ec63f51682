//! Pointer-based element picker.
//!
//! While active, a highlight overlay follows the pointer and a click
//! commits the hovered element into the tracker. The inspector's own
//! window and the overlay itself are excluded from picking, so the panel
//! can never select its own UI.

use gloo_timers::future::TimeoutFuture;
use inspector::ElementTracker;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

const OVERLAY_ID: &str = "inspector-pick-overlay";
const OVERLAY_BASE_STYLE: &str = "position: fixed; pointer-events: none; z-index: 2147483646; \
    border: 1px solid #3b82f6; background: rgba(59, 130, 246, 0.15);";

struct PickListeners {
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_click: Closure<dyn FnMut(MouseEvent)>,
}

/// Picking session state. `Copy`, so event handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct ElementPicker {
    tracker: ElementTracker,
    active: RwSignal<bool>,
    /// Live listener closures; `Closure` is not Send+Sync, store locally.
    listeners: StoredValue<Option<PickListeners>, LocalStorage>,
    overlay: StoredValue<Option<Element>, LocalStorage>,
}

impl ElementPicker {
    pub fn new(tracker: ElementTracker) -> Self {
        Self {
            tracker,
            active: RwSignal::new(false),
            listeners: StoredValue::new_local(None),
            overlay: StoredValue::new_local(None),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Begin picking: highlight elements under the pointer and commit the
    /// clicked one into the tracker.
    pub fn start(&self) {
        if self.active.get_untracked() {
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let overlay = match document.create_element("div") {
            Ok(el) => el,
            Err(err) => {
                log::error!("failed to create pick overlay: {err:?}");
                return;
            }
        };
        let _ = overlay.set_attribute("id", OVERLAY_ID);
        let _ = overlay.set_attribute("style", &format!("{OVERLAY_BASE_STYLE} display: none;"));
        if let Some(body) = document.body() {
            let _ = body.append_child(&overlay);
        }
        self.overlay.set_value(Some(overlay));

        let picker = *self;
        let on_move = Closure::wrap(Box::new(move |ev: MouseEvent| {
            picker.highlight(pick_target(&ev));
        }) as Box<dyn FnMut(MouseEvent)>);

        let picker = *self;
        let on_click = Closure::wrap(Box::new(move |ev: MouseEvent| {
            let Some(target) = pick_target(&ev) else { return };
            ev.prevent_default();
            ev.stop_propagation();
            picker.tracker.set_tracked(Some(target));
            // Defer teardown to the next tick: stopping here would drop this
            // closure while it is still executing.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                picker.stop();
            });
        }) as Box<dyn FnMut(MouseEvent)>);

        // Capture phase, so the host page cannot swallow the events.
        let _ = document.add_event_listener_with_callback_and_bool(
            "mousemove",
            on_move.as_ref().unchecked_ref(),
            true,
        );
        let _ = document.add_event_listener_with_callback_and_bool(
            "click",
            on_click.as_ref().unchecked_ref(),
            true,
        );
        self.listeners
            .set_value(Some(PickListeners { on_move, on_click }));
        self.active.set(true);
    }

    /// Stop picking, removing the listeners and the overlay.
    pub fn stop(&self) {
        if let Some(listeners) = self.listeners.try_update_value(|l| l.take()).flatten() {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.remove_event_listener_with_callback_and_bool(
                    "mousemove",
                    listeners.on_move.as_ref().unchecked_ref(),
                    true,
                );
                let _ = document.remove_event_listener_with_callback_and_bool(
                    "click",
                    listeners.on_click.as_ref().unchecked_ref(),
                    true,
                );
            }
        }
        if let Some(overlay) = self.overlay.try_update_value(|o| o.take()).flatten() {
            overlay.remove();
        }
        self.active.set(false);
    }

    fn highlight(&self, target: Option<Element>) {
        self.overlay.with_value(|overlay| {
            let Some(overlay) = overlay else { return };
            let style = match target {
                Some(el) => {
                    let rect = el.get_bounding_client_rect();
                    format!(
                        "{OVERLAY_BASE_STYLE} display: block; left: {}px; top: {}px; \
                         width: {}px; height: {}px;",
                        rect.left(),
                        rect.top(),
                        rect.width(),
                        rect.height()
                    )
                }
                None => format!("{OVERLAY_BASE_STYLE} display: none;"),
            };
            let _ = overlay.set_attribute("style", &style);
        });
    }
}

/// The pickable element under the pointer; the inspector's own UI is not
/// a valid target.
fn pick_target(ev: &MouseEvent) -> Option<Element> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    if target.id() == OVERLAY_ID || target.closest(".inspector-window").ok().flatten().is_some() {
        return None;
    }
    Some(target)
}
