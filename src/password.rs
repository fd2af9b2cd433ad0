//! Password visibility toggle for the signin/signup pages. Flips the input
//! between masked and plain text and swaps the eye icon to match. Presentation
//! only; the field value is never touched.

use crate::dom;

pub fn init() {
    let doc = match dom::document() {
        Some(doc) => doc,
        None => return,
    };

    let toggle = dom::query(&doc, "#togglePassword");
    let input = dom::query(&doc, r#"input[name="password"]"#);

    if let (Some(toggle), Some(input)) = (toggle, input) {
        let toggle_for_handler = toggle.clone();
        dom::on_click(&toggle, move |_| {
            let next = if input.get_attribute("type").as_deref() == Some("password") {
                "text"
            } else {
                "password"
            };
            let _ = input.set_attribute("type", next);
            let _ = toggle_for_handler.class_list().toggle("bi-eye");
            let _ = toggle_for_handler.class_list().toggle("bi-eye-fill");
        });
    }
}
