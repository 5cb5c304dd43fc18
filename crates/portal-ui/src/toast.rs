//! The exported toast factory. `showToast` is reachable from any script
//! on the page, not just this module, so it goes through raw DOM calls
//! rather than the component tree.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use portal_core::guard::FireOnce;
use portal_core::toast::{AUTO_DISMISS_MS, FADE_MS, ToastLevel};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

const CONTAINER_ID: &str = "toastContainer";

/// Shows a dismissible, ARIA-announced toast. The level key maps onto
/// the styling category and defaults to info.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: String, level: Option<String>) {
    let level = level.as_deref().map(ToastLevel::from_key).unwrap_or_default();
    tracing::debug!(level = level.as_class(), "showing toast");

    let Some(document) =
        web_sys::window().and_then(|window| window.document())
    else {
        return;
    };
    let Some(container) = ensure_container(&document) else {
        tracing::warn!("toast container could not be created");
        return;
    };
    let Some(toast) = build_toast(&document, &message, level) else {
        return;
    };

    if container.append_child(&toast).is_err() {
        return;
    }
    let _ = toast.class_list().add_1("show");

    let auto_hide_toast = toast.clone();
    let gate: Rc<RefCell<FireOnce>> = Rc::default();
    let auto_hide_gate = gate.clone();
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(AUTO_DISMISS_MS).await;
        dismiss(auto_hide_toast, auto_hide_gate).await;
    });

    wire_close_button(&toast, gate);
}

/// Single-threaded get-or-create: the lookup and the append happen in the
/// same handler invocation, so two rapid calls share one container.
fn ensure_container(document: &Document) -> Option<Element> {
    if let Some(existing) = document.get_element_by_id(CONTAINER_ID) {
        return Some(existing);
    }

    let container = document.create_element("div").ok()?;
    container.set_id(CONTAINER_ID);
    container.set_class_name("toast-container position-fixed top-0 end-0 p-3");
    if let Some(element) = container.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property("z-index", "9999");
    }
    document.body()?.append_child(&container).ok()?;
    Some(container)
}

fn build_toast(
    document: &Document,
    message: &str,
    level: ToastLevel,
) -> Option<Element> {
    let toast = document.create_element("div").ok()?;
    toast.set_class_name(&format!(
        "toast align-items-center text-white bg-{} border-0",
        level.as_class()
    ));
    let _ = toast.set_attribute("role", "alert");
    let _ = toast.set_attribute("aria-live", "assertive");
    let _ = toast.set_attribute("aria-atomic", "true");

    let flex = document.create_element("div").ok()?;
    flex.set_class_name("d-flex");

    // Message goes in as text, never as markup.
    let body = document.create_element("div").ok()?;
    body.set_class_name("toast-body");
    body.set_text_content(Some(message));

    let close = document.create_element("button").ok()?;
    let _ = close.set_attribute("type", "button");
    close.set_class_name("btn-close btn-close-white me-2 m-auto");
    let _ = close.set_attribute("aria-label", "Close");

    flex.append_child(&body).ok()?;
    flex.append_child(&close).ok()?;
    toast.append_child(&flex).ok()?;
    Some(toast)
}

fn wire_close_button(toast: &Element, gate: Rc<RefCell<FireOnce>>) {
    let Ok(Some(close)) = toast.query_selector(".btn-close") else {
        return;
    };

    let dismiss_toast = toast.clone();
    let on_close = Closure::wrap(Box::new(move |_event: MouseEvent| {
        let toast = dismiss_toast.clone();
        let gate = gate.clone();
        wasm_bindgen_futures::spawn_local(async move {
            dismiss(toast, gate).await;
        });
    }) as Box<dyn FnMut(MouseEvent)>);

    let _ = close
        .add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref());
    on_close.forget();
}

/// Shared dismissal path for the close button and the auto-hide timer.
/// Whichever fires second is a no-op, and removing a toast that already
/// left the document is safe.
async fn dismiss(toast: Element, gate: Rc<RefCell<FireOnce>>) {
    let fresh = gate.borrow_mut().fire();
    if !fresh {
        return;
    }
    let _ = toast.class_list().remove_1("show");
    TimeoutFuture::new(FADE_MS).await;
    toast.remove();
}
