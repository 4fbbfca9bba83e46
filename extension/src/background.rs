// Background service worker for the claim alert extension
// Minimal dependencies - no Dioxus, build with --no-default-features
// The JS glue registers the chrome listeners at top level and forwards to
// the exports below once the wasm is loaded.

use claim_alert_extension::bridge::{chrome, BridgeMessage};
use wasm_bindgen::prelude::*;

// Dummy main for binary target
fn main() {}

/// Initialize background service worker
/// Called from JavaScript glue via wasm_bindgen
#[wasm_bindgen]
pub fn init_background() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Claim alert background service initialized");
}

/// `chrome.runtime.onInstalled`, with `details.reason`
#[wasm_bindgen]
pub fn handle_install(reason: String) {
    if reason == "install" {
        log::info!("Extension installed");
    } else {
        log::debug!("Extension lifecycle event: {}", reason);
    }
}

/// `chrome.action.onClicked`: ask the tab's content script to toggle the panel
#[wasm_bindgen]
pub fn handle_icon_click(tab: JsValue) {
    if let Err(e) = send_open_popup(&tab) {
        log::error!("Failed to open panel: {:?}", e);
    }
}

fn send_open_popup(tab: &JsValue) -> Result<(), JsValue> {
    let tab_id = chrome::number_field(tab, "id")
        .ok_or_else(|| JsValue::from_str("Clicked tab has no id"))?;
    log::info!("Extension icon clicked (tab: {})", tab_id);

    let message = BridgeMessage::OpenPopup.to_js()?;
    let sent = chrome::send_tab_message(tab_id, &message)?;

    // Pages without the content script (chrome://, store pages) reject the send
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = wasm_bindgen_futures::JsFuture::from(sent).await {
            log::warn!("Tab {} did not accept the open message: {:?}", tab_id, e);
        }
    });
    Ok(())
}
