//! FAQ accordion. Each `.single-faq` item toggles independently; no mutual
//! exclusion, so several answers can stay expanded at once.

use crate::dom;

pub fn init() {
    let doc = match dom::document() {
        Some(doc) => doc,
        None => return,
    };

    for item in dom::query_all(&doc, ".single-faq") {
        let button = match item.query_selector(".faq-btn").ok().flatten() {
            Some(button) => button,
            None => continue,
        };
        dom::on_click(&button, move |_| {
            if let Ok(Some(icon)) = item.query_selector(".icon") {
                let _ = icon.class_list().toggle("rotate-180");
            }
            if let Ok(Some(content)) = item.query_selector(".faq-content") {
                let _ = content.class_list().toggle("hidden");
            }
        });
    }
}
