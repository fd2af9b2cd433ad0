//! Browser-side behavior for the marketing pages. The server templates render
//! all of the markup; this module only attaches event handlers to elements that
//! are already in the document. Every feature checks for its own elements and
//! silently stays off when the page does not carry them, so the same bundle
//! serves the landing, FAQ and auth pages alike.

pub mod dom;
pub mod faq;
pub mod header;
pub mod navbar;
pub mod password;
pub mod reveal;
pub mod scroll_nav;

use gloo_console::log;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    header::init();
    navbar::init();
    faq::init();
    reveal::init();
    scroll_nav::init();
    password::init();
    log!("page behaviors attached");
}
