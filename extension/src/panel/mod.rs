// Panel page: the Dioxus app mounted inside the injected iframe

mod alert;
mod claims;
mod context;
mod events;
mod lifecycle;
mod menus;

use dioxus::prelude::*;
use futures::StreamExt;

use crate::action::PanelAction;
use crate::format;
use alert::SettlementAlert;
use claims::PotentialClaims;
use menus::PanelHeader;

pub use context::PanelContext;

/// Long-form date, or the raw input when it does not parse
fn display_date(date: &str) -> String {
    format::format_date(date).unwrap_or_else(|e| {
        log::warn!("{}", e);
        date.to_string()
    })
}

#[component]
pub fn Panel() -> Element {
    let ctx = use_context_provider(PanelContext::new);

    // Listeners and dispatcher live for the whole mount
    let dispatcher = ctx.clone();
    use_hook(move || {
        let (tx, mut rx) = futures::channel::mpsc::unbounded::<PanelAction>();
        spawn(async move {
            while let Some(action) = rx.next().await {
                dispatcher.dispatch(action);
            }
        });
        if let Err(e) = events::install(tx) {
            log::error!("Failed to install panel listeners: {:?}", e);
        }
    });

    let lifecycle = ctx.lifecycle();
    use_effect(move || {
        if let Err(e) = lifecycle.slide_in() {
            log::warn!("Slide-in skipped: {:?}", e);
        }
    });

    rsx! {
        div { class: "container",
            PanelHeader {}
            SettlementAlert {}
            PotentialClaims {}
        }
    }
}
