//! In-page smooth-scroll navigation plus active-link highlighting. The anchor
//! set is captured once at startup; the highlight is recomputed on every scroll
//! event against the live section geometry.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::dom;

/// Offset between a section's top edge and the scroll position at which its
/// nav link lights up. Matches the sticky header height.
const NAV_OFFSET: f64 = 80.0;

pub fn init() {
    let doc = match dom::document() {
        Some(doc) => doc,
        None => return,
    };

    let links = dom::query_all(&doc, ".ud-menu-scroll");

    for link in &links {
        let doc = doc.clone();
        let link_for_handler = link.clone();
        dom::on_click(link, move |event| {
            let href = match link_for_handler.get_attribute("href") {
                Some(href) => href,
                None => return,
            };
            // Non-fragment links keep default navigation
            if !href.starts_with('#') {
                return;
            }
            let target = match dom::query(&doc, &href) {
                Some(target) => target,
                None => return,
            };
            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }

    dom::on_scroll(move || {
        if let Some(doc) = dom::document() {
            let scroll_pos = current_scroll_pos(&doc);
            update_active_link(&doc, &links, scroll_pos);
        }
    });
}

/// Highlights the nav link whose target section spans the scroll position.
/// Each anchor's band is `[offsetTop - 80, offsetTop - 80 + offsetHeight)`;
/// anchors are visited in document order, so when bands overlap the last match
/// wins. That tie-break is load-bearing for pages that rely on it.
pub fn update_active_link(doc: &Document, links: &[Element], scroll_pos: f64) {
    for link in links {
        let href = match link.get_attribute("href") {
            Some(href) => href,
            None => continue,
        };
        if !href.starts_with('#') {
            continue;
        }
        let section = match dom::query(doc, &href)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        {
            Some(section) => section,
            None => continue,
        };

        let section_top = f64::from(section.offset_top()) - NAV_OFFSET;
        let section_bottom = section_top + f64::from(section.offset_height());

        if scroll_pos >= section_top && scroll_pos < section_bottom {
            for other in links {
                let _ = other.class_list().remove_1("active");
            }
            let _ = link.class_list().add_1("active");
        }
    }
}

fn current_scroll_pos(doc: &Document) -> f64 {
    let page_offset = web_sys::window()
        .and_then(|win| win.page_y_offset().ok())
        .unwrap_or(0.0);
    if page_offset != 0.0 {
        page_offset
    } else {
        doc.document_element()
            .map(|root| f64::from(root.scroll_top()))
            .unwrap_or(0.0)
    }
}
