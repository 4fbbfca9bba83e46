// Panel slide-in on mount and the delayed close handshake with the host

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::action::CloseLatch;
use crate::bridge::BridgeMessage;
use crate::config::{SLIDE_DURATION_MS, SLIDE_IN_CLASS};
use crate::error::PanelError;

const CONTAINER_SELECTOR: &str = ".container";

#[derive(Clone, Default)]
pub struct PanelLifecycle {
    close: CloseLatch,
}

fn container() -> Result<Element, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(CONTAINER_SELECTOR)?
        .ok_or_else(|| JsValue::from_str(&PanelError::MissingMountPoint(CONTAINER_SELECTOR).to_string()))
}

impl PanelLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the slide-in class on the next frame so the transition runs
    pub fn slide_in(&self) -> Result<(), JsValue> {
        let container = container()?;
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

        let add_class = Closure::once_into_js(move || {
            if let Err(e) = container.class_list().add_1(SLIDE_IN_CLASS) {
                log::warn!("Failed to start slide-in: {:?}", e);
            }
        });
        window.request_animation_frame(add_class.unchecked_ref())?;
        Ok(())
    }

    /// Play the exit animation, then ask the host to remove the iframe.
    /// Only the first call per mount does anything.
    pub fn begin_close(&self) -> Result<(), JsValue> {
        if !self.close.fire() {
            log::debug!("Panel already closing");
            return Ok(());
        }
        log::info!("Closing panel");

        match container() {
            Ok(container) => {
                if let Err(e) = container.class_list().remove_1(SLIDE_IN_CLASS) {
                    log::warn!("Failed to start slide-out: {:?}", e);
                }
            }
            // Still tell the host, it owns the iframe
            Err(e) => log::warn!("{:?}", e),
        }

        let message = BridgeMessage::ClosePopup.to_js()?;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(SLIDE_DURATION_MS).await;

            let parent = web_sys::window().and_then(|w| w.parent().ok().flatten());
            match parent {
                Some(parent) => {
                    if let Err(e) = parent.post_message(&message, "*") {
                        log::error!("Failed to notify host: {:?}", e);
                    }
                }
                None => log::warn!("Panel has no parent frame"),
            }
        });
        Ok(())
    }
}
