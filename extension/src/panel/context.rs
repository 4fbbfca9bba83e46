// Panel context shared through the Dioxus context API
// Owns the view state; each region re-renders off its own revision signal

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::JsValue;

use super::lifecycle::PanelLifecycle;
use crate::action::{Effect, PanelAction, Region};
use crate::config::DARK_MODE_CLASS;
use crate::state::ViewState;

#[derive(Clone)]
pub struct PanelContext {
    state: Rc<RefCell<ViewState>>,
    revisions: [Signal<u64>; 4],
    lifecycle: PanelLifecycle,
}

// Manual PartialEq implementation (contexts don't need real equality)
impl PartialEq for PanelContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

fn slot(region: Region) -> usize {
    match region {
        Region::SettlementAlert => 0,
        Region::PotentialClaims => 1,
        Region::SettingsMenu => 2,
        Region::MoreOptionsMenu => 3,
    }
}

impl PanelContext {
    /// Must be called while a component is rendering: the revision
    /// signals belong to the calling scope.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(ViewState::new())),
            revisions: Region::ALL.map(|_| Signal::new(0)),
            lifecycle: PanelLifecycle::new(),
        }
    }

    pub fn state(&self) -> Ref<'_, ViewState> {
        self.state.borrow()
    }

    pub fn lifecycle(&self) -> PanelLifecycle {
        self.lifecycle.clone()
    }

    /// Subscribe the rendering component to `region`
    pub fn track(&self, region: Region) {
        let _ = *self.revisions[slot(region)].read();
    }

    fn invalidate(&self, region: Region) {
        let mut revision = self.revisions[slot(region)];
        *revision.write() += 1;
    }

    pub fn dispatch(&self, action: PanelAction) {
        log::debug!("Panel action: {:?}", action);
        let outcome = self.state.borrow_mut().apply(action);

        for region in outcome.regions {
            log::debug!("Re-rendering #{}", region.mount_id());
            self.invalidate(region);
        }
        for effect in outcome.effects {
            if let Err(e) = self.perform(&effect) {
                log::warn!("Panel effect {:?} failed: {:?}", effect, e);
            }
        }
    }

    fn perform(&self, effect: &Effect) -> Result<(), JsValue> {
        match *effect {
            Effect::OpenUrl(url) => {
                let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
                window.open_with_url_and_target(url, "_blank")?;
                Ok(())
            }
            Effect::DarkMode(enabled) => {
                let body = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
                    .ok_or_else(|| JsValue::from_str("No document body"))?;
                // Forced rather than flipped
                body.class_list().toggle_with_force(DARK_MODE_CLASS, enabled)?;
                Ok(())
            }
            Effect::ClosePanel => self.lifecycle.begin_close(),
        }
    }
}
