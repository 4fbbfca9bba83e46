// Host page side of the bridge: inject and remove the panel iframe

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlIFrameElement};

use super::chrome;
use crate::config::IframeConfig;
use crate::error::PanelError;

pub struct PanelHost {
    config: IframeConfig,
}

impl PanelHost {
    pub fn new(config: IframeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IframeConfig {
        &self.config
    }

    fn document() -> Result<Document, JsValue> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document"))
    }

    pub fn is_open(&self) -> Result<bool, JsValue> {
        Ok(Self::document()?
            .get_element_by_id(&self.config.element_id)
            .is_some())
    }

    /// Remove the panel if it is showing, inject a fresh one otherwise.
    /// Each opening starts from a new iframe, so no panel state survives.
    pub fn toggle(&self) -> Result<(), JsValue> {
        if self.is_open()? {
            self.close()?;
            return Ok(());
        }
        self.open()
    }

    pub fn open(&self) -> Result<(), JsValue> {
        let document = Self::document()?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str(&PanelError::MissingMountPoint("body").to_string()))?;

        let iframe: HtmlIFrameElement = document.create_element("iframe")?.dyn_into()?;
        iframe.set_id(&self.config.element_id);
        iframe.set_src(&chrome::runtime_url(&self.config.page_path));

        let style = iframe.style();
        for (property, value) in self.config.style_properties() {
            style.set_property(property, value)?;
        }

        body.append_child(&iframe)?;
        log::info!("Panel injected ({})", self.config.page_path);
        Ok(())
    }

    /// Returns whether an iframe was removed.
    pub fn close(&self) -> Result<bool, JsValue> {
        match Self::document()?.get_element_by_id(&self.config.element_id) {
            Some(iframe) => {
                iframe.remove();
                log::info!("Panel removed");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Default for PanelHost {
    fn default() -> Self {
        Self::new(IframeConfig::default())
    }
}
