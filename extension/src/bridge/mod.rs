// Cross-document messaging between the background worker, the host page
// content script and the injected panel.

pub mod chrome;
pub mod host;

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Payload posted across frames and tabs. Serialized as `{"action": "..."}`.
///
/// `closePopup` is used in both directions: the host asks the panel to
/// close, and the panel tells the host its exit animation has finished.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum BridgeMessage {
    OpenPopup,
    ClosePopup,
}

impl BridgeMessage {
    pub fn to_json(self) -> String {
        match serde_json::to_string(&self) {
            Ok(json) => json,
            // Unit variants with an internal tag always serialize
            Err(_) => String::from("{}"),
        }
    }

    /// Parse a JSON payload; unrelated messages yield `None`.
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    pub fn to_js(self) -> Result<JsValue, JsValue> {
        js_sys::JSON::parse(&self.to_json())
    }

    /// Host pages post arbitrary messages; anything that is not ours is ignored.
    pub fn from_js(value: &JsValue) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        let json = js_sys::JSON::stringify(value).ok()?.as_string()?;
        Self::from_json(&json)
    }
}
