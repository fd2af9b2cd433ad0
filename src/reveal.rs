//! Bootstraps the optional scroll-reveal helper (WOW) when the page ships it.
//! Runs once at startup; a missing global simply leaves the animations off.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

pub fn init() {
    let win = match web_sys::window() {
        Some(win) => win,
        None => return,
    };
    let ctor = match Reflect::get(&win, &JsValue::from_str("WOW")) {
        Ok(value) => value,
        Err(_) => return,
    };
    let ctor = match ctor.dyn_into::<Function>() {
        Ok(ctor) => ctor,
        Err(_) => return,
    };
    if let Ok(instance) = Reflect::construct(&ctor, &Array::new()) {
        if let Ok(init_fn) = Reflect::get(&instance, &JsValue::from_str("init")) {
            if let Some(init_fn) = init_fn.dyn_ref::<Function>() {
                let _ = init_fn.call0(&instance);
            }
        }
    }
}
