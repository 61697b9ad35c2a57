//! Browser bridge (wasm32 only).
//!
//! Wires the page around the canvas into the app:
//!
//! | Page side                         | App side                               |
//! |-----------------------------------|----------------------------------------|
//! | `IntersectionObserver` on canvas  | [`ContainerVisibility`] messages       |
//! | `#add-button` click (optional)    | [`SpawnRequest::Single`]               |
//! | `window.innerWidth`               | [`PageLayout::viewport_width`]         |
//!
//! Browser callbacks push into [`PageSignals`]; [`drain_page_signals`] turns
//! them into messages once per frame. When the visibility trigger fires the
//! observer is disconnected.

use crate::config::RainConfig;
use crate::constants::{ADD_BUTTON_SELECTOR, CANVAS_SELECTOR};
use crate::error::RainError;
use crate::layout::PageLayout;
use crate::spawn::SpawnRequest;
use crate::visibility::{ContainerVisibility, VisibilityDetached};
use bevy::prelude::*;
use std::sync::{Arc, Mutex};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Debug, Clone, Copy, PartialEq)]
enum PageSignal {
    Visibility(f32),
    AddClicked,
}

/// Queue filled by browser callbacks, drained by the app.
#[derive(Resource, Clone, Default)]
pub struct PageSignals(Arc<Mutex<Vec<PageSignal>>>);

impl PageSignals {
    fn push(&self, signal: PageSignal) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(signal);
        }
    }

    fn take(&self) -> Vec<PageSignal> {
        self.0
            .lock()
            .map(|mut queue| std::mem::take(&mut *queue))
            .unwrap_or_default()
    }
}

/// Live browser handles; dropping the closures would invalidate the callbacks.
pub struct WebBridge {
    observer: Option<IntersectionObserver>,
    _on_intersect: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    _on_add_click: Option<Closure<dyn FnMut()>>,
}

/// Startup system: observe the canvas and hook the page's add button.
///
/// A missing canvas is fatal, like a missing window on native.
pub fn attach_web_bridge(world: &mut World) -> Result {
    let signals = world.get_resource_or_init::<PageSignals>().clone();
    let threshold = world.resource::<RainConfig>().visibility_threshold;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(RainError::WebBridge {
            context: "window.document",
        })?;
    let canvas = document
        .query_selector(CANVAS_SELECTOR)
        .map_err(|_| RainError::WebBridge {
            context: "query canvas",
        })?
        .ok_or(RainError::MissingContainer {
            context: "attach_web_bridge",
        })?;

    let observed = signals.clone();
    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    let ratio = if entry.is_intersecting() {
                        entry.intersection_ratio() as f32
                    } else {
                        0.0
                    };
                    observed.push(PageSignal::Visibility(ratio));
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(f64::from(threshold)));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)
            .map_err(|_| RainError::WebBridge {
                context: "create IntersectionObserver",
            })?;
    observer.observe(&canvas);

    let on_add_click = match document.query_selector(ADD_BUTTON_SELECTOR) {
        Ok(Some(button)) => {
            let clicked = signals.clone();
            let closure = Closure::<dyn FnMut()>::new(move || clicked.push(PageSignal::AddClicked));
            button
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .map_err(|_| RainError::WebBridge {
                    context: "listen for add clicks",
                })?;
            Some(closure)
        }
        _ => {
            warn!("No {ADD_BUTTON_SELECTOR} on the page; only the burst will spawn bodies");
            None
        }
    };

    world.insert_non_send_resource(WebBridge {
        observer: Some(observer),
        _on_intersect: on_intersect,
        _on_add_click: on_add_click,
    });
    info!("[SETUP] Page bridge attached to {CANVAS_SELECTOR}");
    Ok(())
}

/// Forward queued browser signals and the current viewport width.
pub fn drain_page_signals(
    signals: Res<PageSignals>,
    mut visibility: MessageWriter<ContainerVisibility>,
    mut requests: MessageWriter<SpawnRequest>,
    mut layout: ResMut<PageLayout>,
) {
    for signal in signals.take() {
        match signal {
            PageSignal::Visibility(ratio) => {
                visibility.write(ContainerVisibility { ratio });
            }
            PageSignal::AddClicked => {
                requests.write(SpawnRequest::Single);
            }
        }
    }

    let inner_width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64());
    if let Some(width) = inner_width {
        let width = width as f32;
        if layout.viewport_width != width {
            layout.viewport_width = width;
        }
    }
}

/// Stop observing once the burst has fired.
pub fn detach_web_bridge(
    mut detached: MessageReader<VisibilityDetached>,
    bridge: Option<NonSendMut<WebBridge>>,
) {
    if detached.read().next().is_none() {
        return;
    }
    if let Some(mut bridge) = bridge {
        if let Some(observer) = bridge.observer.take() {
            observer.disconnect();
            info!("Visibility observer disconnected");
        }
    }
}
