//! Canvas host for one chart slot.
//!
//! ARCHITECTURE
//! ============
//! The slot is created lazily once the canvas mounts. Every change of the
//! config signal destroys the live chart before drawing the new one; a `None`
//! config leaves the canvas empty.

use leptos::prelude::*;

use crate::chart::ChartConfig;

#[component]
pub fn ChartCanvas(#[prop(into)] config: Signal<Option<ChartConfig>>, class: &'static str) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::chart::ChartSlot;
        use crate::chart::chartjs::ChartJsBackend;

        let slot: Rc<RefCell<Option<ChartSlot<ChartJsBackend>>>> = Rc::new(RefCell::new(None));
        Effect::new(move || {
            let config = config.get();
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let mut guard = slot.borrow_mut();
            let live = guard.get_or_insert_with(|| ChartSlot::new(ChartJsBackend::new(canvas)));
            if let Err(e) = live.sync(config.as_ref()) {
                leptos::logging::warn!("chart render failed: {e}");
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }

    view! { <canvas class=class node_ref=canvas_ref></canvas> }
}
