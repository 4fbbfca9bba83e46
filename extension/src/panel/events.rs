// DOM listeners for the panel document
// One delegated listener per event type; everything is forwarded as a
// `PanelAction` to the dispatcher running inside the Dioxus runtime.

use futures::channel::mpsc::UnboundedSender;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, KeyboardEvent, MessageEvent};

use crate::action::PanelAction;
use crate::bridge::BridgeMessage;
use crate::router::{self, ElementInfo, DATA_ATTRIBUTES};

fn snapshot(element: &Element) -> ElementInfo {
    let id = element.id();
    // `class` attribute rather than className, which is not a string on SVG
    let classes = element
        .get_attribute("class")
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();
    let data = DATA_ATTRIBUTES
        .iter()
        .filter_map(|name| element.get_attribute(name).map(|value| (name.to_string(), value)))
        .collect();
    let checked = element
        .dyn_ref::<HtmlInputElement>()
        .filter(|input| input.type_() == "checkbox")
        .map(|input| input.checked());

    ElementInfo {
        id: (!id.is_empty()).then_some(id),
        classes,
        data,
        checked,
    }
}

/// Event target followed by all of its ancestors
fn target_chain(event: &Event) -> Vec<ElementInfo> {
    let mut chain = Vec::new();
    let mut current = event.target().and_then(|t| t.dyn_into::<Element>().ok());
    while let Some(element) = current {
        chain.push(snapshot(&element));
        current = element.parent_element();
    }
    chain
}

fn forward(actions: &UnboundedSender<PanelAction>, action: PanelAction) {
    if actions.unbounded_send(action).is_err() {
        log::warn!("Panel dispatcher is gone, dropping action");
    }
}

pub fn install(actions: UnboundedSender<PanelAction>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;

    let tx = actions.clone();
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        match router::route_click(&target_chain(&event)) {
            Ok(action) => forward(&tx, action),
            Err(e) => log::warn!("Ignoring click: {}", e),
        }
    }) as Box<dyn FnMut(Event)>);
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let tx = actions.clone();
    let on_change = Closure::wrap(Box::new(move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        match router::route_change(&snapshot(&target)) {
            Ok(Some(action)) => forward(&tx, action),
            Ok(None) => {}
            Err(e) => log::warn!("Ignoring change: {}", e),
        }
    }) as Box<dyn FnMut(Event)>);
    document.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    let tx = actions.clone();
    let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if event.key() == "Escape" {
            forward(&tx, PanelAction::ClosePanel);
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();

    // Close requests posted into the panel frame by the host page
    let tx = actions;
    let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
        if BridgeMessage::from_js(&event.data()) == Some(BridgeMessage::ClosePopup) {
            forward(&tx, PanelAction::ClosePanel);
        }
    }) as Box<dyn FnMut(MessageEvent)>);
    window.add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())?;
    on_message.forget();

    log::info!("Panel listeners installed");
    Ok(())
}
