// Content script: owns the panel iframe on the host page
// Minimal dependencies - no Dioxus, build with --no-default-features

use std::rc::Rc;

use claim_alert_extension::bridge::host::PanelHost;
use claim_alert_extension::bridge::{chrome, BridgeMessage};
use claim_alert_extension::config::IframeConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;

// Dummy main for binary target
fn main() {}

/// Initialize the content script.
/// `overrides` is an optional JSON string of `IframeConfig` fields.
#[wasm_bindgen]
pub fn init_content_script(overrides: Option<String>) -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::default());

    let config = match overrides {
        Some(json) => IframeConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid panel config: {}", e);
            IframeConfig::default()
        }),
        None => IframeConfig::default(),
    };
    let host = Rc::new(PanelHost::new(config));

    // Open requests from the background worker
    let host_for_runtime = host.clone();
    let on_runtime_message = Closure::wrap(Box::new(
        move |message: JsValue, _sender: JsValue, _respond: JsValue| {
            if BridgeMessage::from_js(&message) == Some(BridgeMessage::OpenPopup) {
                if let Err(e) = host_for_runtime.toggle() {
                    log::error!("Failed to toggle panel: {:?}", e);
                }
            }
        },
    ) as Box<dyn FnMut(JsValue, JsValue, JsValue)>);
    chrome::on_runtime_message(&on_runtime_message);
    on_runtime_message.forget();

    // Close notifications from the panel, registered once per page
    let host_for_window = host.clone();
    let on_window_message = Closure::wrap(Box::new(move |event: MessageEvent| {
        if BridgeMessage::from_js(&event.data()) == Some(BridgeMessage::ClosePopup) {
            if let Err(e) = host_for_window.close() {
                log::error!("Failed to remove panel: {:?}", e);
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .add_event_listener_with_callback("message", on_window_message.as_ref().unchecked_ref())?;
    on_window_message.forget();

    log::info!(
        "Claim alert content script ready (iframe #{})",
        host.config().element_id
    );
    Ok(())
}
