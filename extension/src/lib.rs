pub mod action;
pub mod bridge;
pub mod config;
pub mod error;
pub mod format;
pub mod router;
pub mod state;

#[cfg(feature = "panel")]
pub mod icons;
#[cfg(feature = "panel")]
mod panel;

#[cfg(feature = "panel")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Claim alert panel starting...");
    dioxus::launch(panel::Panel);
}
