//! Sticky header, logo swap and back-to-top wiring. One consolidated scroll
//! handler re-evaluates all three effects on every scroll event; each effect is
//! idempotent, so there is no debouncing.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

const LOGO_WHITE: &str = "../static/images/logo/logo-white.svg";
const LOGO_DEFAULT: &str = "../static/images/logo/logo.svg";

pub fn init() {
    dom::on_scroll(|| {
        if let Some(doc) = dom::document() {
            let page_offset = web_sys::window()
                .and_then(|win| win.page_y_offset().ok())
                .unwrap_or(0.0);
            let root_scroll_top = doc
                .document_element()
                .map(|root| f64::from(root.scroll_top()))
                .unwrap_or(0.0);
            apply_scroll_state(&doc, page_offset, root_scroll_top);
        }
    });

    // Back-to-top smooth scroll
    if let Some(doc) = dom::document() {
        if let Some(back_to_top) = dom::query(&doc, ".back-to-top") {
            dom::on_click(&back_to_top, |_| {
                if let Some(win) = web_sys::window() {
                    let options = ScrollToOptions::new();
                    options.set_top(0.0);
                    options.set_behavior(ScrollBehavior::Smooth);
                    win.scroll_to_with_scroll_to_options(&options);
                }
            });
        }
    }
}

/// Applies the scroll-linked header state for the given offsets: the `sticky`
/// class on `.ud-header`, the `.header-logo` source and the `.back-to-top`
/// visibility. The header element gates the whole evaluation; the logo and the
/// back-to-top control are each optional on their own.
pub fn apply_scroll_state(doc: &Document, page_offset: f64, root_scroll_top: f64) {
    let header = match dom::query(doc, ".ud-header") {
        Some(element) => element,
        None => return,
    };

    if page_offset > 0.0 {
        let _ = header.class_list().add_1("sticky");
    } else {
        let _ = header.class_list().remove_1("sticky");
    }

    // The white logo sits on the transparent hero; once the header sticks, the
    // variant follows the dark-mode class on the document root.
    if let Some(logo) = dom::query(doc, ".header-logo")
        .and_then(|element| element.dyn_into::<HtmlImageElement>().ok())
    {
        let dark_mode = doc
            .document_element()
            .map(|root| root.class_list().contains("dark"))
            .unwrap_or(false);
        let src = if header.class_list().contains("sticky") {
            if dark_mode {
                LOGO_WHITE
            } else {
                LOGO_DEFAULT
            }
        } else {
            LOGO_WHITE
        };
        logo.set_src(src);
    }

    if let Some(back_to_top) =
        dom::query(doc, ".back-to-top").and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        let display = if root_scroll_top > 50.0 { "flex" } else { "none" };
        let _ = back_to_top.style().set_property("display", display);
    }
}
