use dioxus::prelude::*;

use super::{display_date, PanelContext};
use crate::action::Region;
use crate::icons;
use crate::router::SHOW_DISMISSED_ID;
use crate::state::{ClaimItem, Collection};

/// Render-ready copy of a claim item, so no state borrow outlives the render
struct ClaimRow {
    id: u32,
    name: String,
    deadline: Option<String>,
    subtype: Option<String>,
    dismissed: bool,
}

impl From<&ClaimItem> for ClaimRow {
    fn from(item: &ClaimItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            deadline: item.deadline.as_deref().map(display_date),
            subtype: item.subtype.clone(),
            dismissed: item.dismissed,
        }
    }
}

#[component]
pub fn PotentialClaims() -> Element {
    let ctx = use_context::<PanelContext>();
    ctx.track(Region::PotentialClaims);
    let show_dismissed = ctx.state().show_dismissed;

    rsx! {
        div { id: "potentialClaims",
            div { class: "p-4",
                h2 { class: "text-xl font-bold mb-4", "Your Potential Claims" }
                div { class: "flex items-center justify-end space-x-2 mb-4",
                    label { r#for: SHOW_DISMISSED_ID, class: "text-sm", "Show Dismissed" }
                    label { class: "switch",
                        input { r#type: "checkbox", id: SHOW_DISMISSED_ID, checked: show_dismissed }
                        span { class: "slider" }
                    }
                }
                div { class: "space-y-4",
                    for collection in Collection::ALL {
                        ClaimsTable { key: "{collection}", collection: collection }
                    }
                }
            }
        }
    }
}

#[component]
fn ClaimsTable(collection: Collection) -> Element {
    let ctx = use_context::<PanelContext>();
    // Props never change, so the table subscribes itself
    ctx.track(Region::PotentialClaims);

    let rows: Vec<ClaimRow> = ctx
        .state()
        .visible_items(collection)
        .into_iter()
        .map(ClaimRow::from)
        .collect();
    let title = collection.title();
    let data_type = collection.as_str();

    rsx! {
        section {
            h3 { class: "text-base font-semibold mb-2", "{title}" }
            table { class: "w-full",
                tbody {
                    {rows.into_iter().map(|ClaimRow { id, name, deadline, subtype, dismissed }| rsx! {
                        tr { key: "{id}", class: "border-b",
                            td { class: "py-2",
                                "{name}"
                                {deadline.map(|deadline| rsx! {
                                    div { class: "text-sm text-gray-600", "Deadline: {deadline}" }
                                })}
                                {subtype.map(|subtype| rsx! {
                                    div { class: "text-sm text-gray-600", "{subtype}" }
                                })}
                            }
                            td { class: "py-2 text-right",
                                if dismissed {
                                    button {
                                        class: "text-blue-600 hover:text-blue-800 inline-flex items-center",
                                        "data-action": "undo",
                                        "data-id": "{id}",
                                        "data-type": data_type,
                                        icons::Undo { class: Some("w-4 h-4 mr-1".to_string()) }
                                        span { "Undo" }
                                    }
                                } else {
                                    button {
                                        class: "text-red-600 hover:text-red-800",
                                        "data-action": "dismiss",
                                        "data-id": "{id}",
                                        "data-type": data_type,
                                        "Dismiss"
                                    }
                                }
                            }
                        }
                    })}
                }
            }
            if collection == Collection::Settlements {
                div { class: "mt-2 flex justify-end",
                    button {
                        class: "border border-gray-300 hover:bg-red-500 hover:text-white hover:border-red-500 rounded-full px-4 py-2 text-sm transition-colors duration-200 inline-flex items-center",
                        "Browse More Settlements"
                        icons::ArrowRight { class: Some("w-4 h-4 ml-2".to_string()) }
                    }
                }
            }
        }
    }
}
