//! Small wrappers around the `web_sys` lookup and listener plumbing. Every
//! handler registered here lives for the rest of the page's lifetime, so the
//! closures are leaked with `forget()` rather than tracked.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, MouseEvent};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

/// Collects every match in document order. An invalid selector yields an empty
/// list rather than an error.
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    if let Ok(list) = doc.query_selector_all(selector) {
        for index in 0..list.length() {
            if let Some(node) = list.item(index) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    found.push(element);
                }
            }
        }
    }
    found
}

pub fn on_click(target: &EventTarget, handler: impl FnMut(MouseEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn on_scroll(handler: impl FnMut() + 'static) {
    if let Some(win) = web_sys::window() {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let _ = win.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
