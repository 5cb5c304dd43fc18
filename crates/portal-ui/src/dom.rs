//! One-shot raw-DOM behaviors that sit outside the component tree:
//! smooth scrolling, tooltip activation, the scroll-reveal observer, the
//! blocking delete confirmation, and textarea auto-resize. Every absent
//! element degrades to "feature inactive" with at most a log line.

use std::cell::RefCell;
use std::rc::Rc;

use portal_core::guard::{FireOnce, RevealSet};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, HtmlElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

thread_local! {
    static DOM_SETUP: RefCell<FireOnce> = RefCell::new(FireOnce::new());
    static REVEALED: RefCell<RevealSet> = RefCell::new(RevealSet::new());
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Scrolls the element with `target_id` to the top of the viewport.
/// Returns whether a target existed; when it did not, the caller leaves
/// the native anchor behavior alone.
pub fn smooth_scroll_to(target_id: &str) -> bool {
    let Some(document) = document() else {
        return false;
    };
    let Some(target) = document.get_element_by_id(target_id) else {
        tracing::debug!(target_id, "smooth scroll target missing");
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn confirm_action(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn autosize_textarea(area: &HtmlTextAreaElement) {
    let style = area.style();
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &format!("{}px", area.scroll_height()));
}

/// Installs the page's one-time DOM behaviors: tooltip triggers and the
/// scroll-reveal observer. Elements added to the document later are not
/// picked up.
pub fn install_page_behaviors() {
    let fresh = DOM_SETUP.with(|gate| gate.borrow_mut().fire());
    if !fresh {
        tracing::debug!("page behaviors already installed");
        return;
    }
    init_tooltips();
    observe_reveals();
}

fn init_tooltips() {
    let Some(document) = document() else {
        return;
    };
    let Ok(nodes) = document.query_selector_all("[data-tooltip]") else {
        return;
    };

    let mut bound = 0_u32;
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(trigger) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let Some(text) = trigger.get_attribute("data-tooltip") else {
            continue;
        };
        attach_tooltip(&document, &trigger, text);
        bound += 1;
    }
    tracing::debug!(bound, "tooltip triggers activated");
}

fn attach_tooltip(document: &Document, trigger: &HtmlElement, text: String) {
    let open_bubble: Rc<RefCell<Option<Element>>> = Rc::default();

    let enter = {
        let document = document.clone();
        let trigger = trigger.clone();
        let open_bubble = open_bubble.clone();
        Closure::wrap(Box::new(move |_event: MouseEvent| {
            if open_bubble.borrow().is_some() {
                return;
            }
            let Ok(bubble) = document.create_element("div") else {
                return;
            };
            bubble.set_class_name("tooltip-bubble");
            bubble.set_text_content(Some(&text));

            let rect = trigger.get_bounding_client_rect();
            if let Some(element) = bubble.dyn_ref::<HtmlElement>() {
                let style = element.style();
                let _ = style.set_property("position", "fixed");
                let _ = style.set_property("left", &format!("{}px", rect.left()));
                let _ =
                    style.set_property("top", &format!("{}px", rect.bottom() + 6.0));
            }

            if let Some(body) = document.body()
                && body.append_child(&bubble).is_ok()
            {
                *open_bubble.borrow_mut() = Some(bubble);
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };

    let leave = {
        let open_bubble = open_bubble.clone();
        Closure::wrap(Box::new(move |_event: MouseEvent| {
            if let Some(bubble) = open_bubble.borrow_mut().take() {
                bubble.remove();
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };

    let _ = trigger.add_event_listener_with_callback(
        "mouseenter",
        enter.as_ref().unchecked_ref(),
    );
    let _ = trigger.add_event_listener_with_callback(
        "mouseleave",
        leave.as_ref().unchecked_ref(),
    );

    // Listeners live for the page lifetime.
    enter.forget();
    leave.forget();
}

/// Watches cards and stat tiles; the first time at least 10% of one enters
/// the margin-adjusted viewport it gains `fade-in` and is dropped from
/// observation, so the effect never re-triggers on scroll-back.
fn observe_reveals() {
    let Some(document) = document() else {
        return;
    };

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let key = target
                    .get_attribute("data-reveal")
                    .unwrap_or_else(|| target.id());
                let fresh = key.is_empty()
                    || REVEALED.with(|set| set.borrow_mut().reveal(&key));
                if fresh {
                    let _ = target.class_list().add_1("fade-in");
                }
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(error) => {
            tracing::warn!(?error, "intersection observer unavailable");
            return;
        }
    };
    callback.forget();

    let mut watched = 0_u32;
    for selector in [".stat-card", ".internship-card"] {
        let Ok(nodes) = document.query_selector_all(selector) else {
            continue;
        };
        for index in 0..nodes.length() {
            if let Some(element) =
                nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok())
            {
                observer.observe(&element);
                watched += 1;
            }
        }
    }
    tracing::debug!(watched, "scroll reveal observer installed");
}
