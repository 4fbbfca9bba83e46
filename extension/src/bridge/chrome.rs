// Chrome extension API bindings
// Only the handful of calls the bridge needs; JS glue just loads the wasm.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["chrome", "runtime"], js_name = getURL)]
    pub fn runtime_url(path: &str) -> String;

    #[wasm_bindgen(js_namespace = ["chrome", "runtime", "onMessage"], js_name = addListener)]
    pub fn on_runtime_message(callback: &Closure<dyn FnMut(JsValue, JsValue, JsValue)>);

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = sendMessage)]
    pub fn send_tab_message(tab_id: f64, message: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

/// Read a numeric field off a JS object, e.g. `tab.id`
pub fn number_field(object: &JsValue, field: &str) -> Option<f64> {
    js_sys::Reflect::get(object, &JsValue::from_str(field))
        .ok()?
        .as_f64()
}
