//! Mobile navigation toggle and submenu wiring. The toggler/panel pair only
//! activates when both elements exist; submenu containers are handled on their
//! own, so a page without the collapsible navbar still gets working submenus.

use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use crate::dom;

pub fn init() {
    let doc = match dom::document() {
        Some(doc) => doc,
        None => return,
    };

    let toggler = dom::query(&doc, "#navbarToggler");
    let collapse = dom::query(&doc, "#navbarCollapse");

    if let (Some(toggler), Some(collapse)) = (toggler, collapse) {
        {
            let toggler_for_handler = toggler.clone();
            let collapse = collapse.clone();
            dom::on_click(&toggler, move |_| {
                let _ = toggler_for_handler.class_list().toggle("navbarTogglerActive");
                let _ = collapse.class_list().toggle("hidden");
            });
        }

        // Close on nav link click; submenu triggers keep the panel open
        for link in dom::query_all(&doc, "#navbarCollapse ul li:not(.submenu-item) a") {
            let toggler = toggler.clone();
            let collapse = collapse.clone();
            dom::on_click(&link, move |_| {
                close_panel(&toggler, &collapse);
            });
        }

        // Close when clicking outside both the toggler and the panel
        {
            let toggler = toggler.clone();
            let collapse = collapse.clone();
            dom::on_click(&doc, move |event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside = collapse.contains(target.as_ref())
                    || toggler.contains(target.as_ref());
                if !inside {
                    close_panel(&toggler, &collapse);
                }
            });
        }
    }

    // Submenu toggles, independent per container
    for item in dom::query_all(&doc, ".submenu-item") {
        let anchor = match item.query_selector("a").ok().flatten() {
            Some(anchor) => anchor,
            None => continue,
        };
        dom::on_click(&anchor, move |_| {
            if let Ok(Some(submenu)) = item.query_selector(".submenu") {
                let _ = submenu.class_list().toggle("hidden");
            }
        });
    }
}

fn close_panel(toggler: &Element, collapse: &Element) {
    let _ = toggler.class_list().remove_1("navbarTogglerActive");
    let _ = collapse.class_list().add_1("hidden");
}
