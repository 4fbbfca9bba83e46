use chrono::Utc;
use dioxus::prelude::*;

use super::{display_date, PanelContext};
use crate::action::Region;
use crate::format;
use crate::icons;
use crate::state::{AlertMode, SnoozeDuration, SETTLEMENT};

const ACTION_BUTTON: &str =
    "flex-1 bg-gray-700 hover:bg-gray-600 text-white font-bold py-2 px-4 rounded flex items-center justify-center";

#[component]
pub fn SettlementAlert() -> Element {
    let ctx = use_context::<PanelContext>();
    ctx.track(Region::SettlementAlert);

    let (dark, mode) = {
        let state = ctx.state();
        (state.settings.dark_mode, state.alert_mode)
    };

    let title = SETTLEMENT.title;
    let company = SETTLEMENT.company;
    let favicon = SETTLEMENT.favicon;
    let award = SETTLEMENT.award_amount;
    let description = SETTLEMENT.description;
    let deadline = display_date(SETTLEMENT.deadline);
    let remaining = format::time_remaining(SETTLEMENT.deadline, Utc::now()).unwrap_or_else(|e| {
        log::warn!("{}", e);
        String::from("unknown")
    });
    let amount = format::format_currency(SETTLEMENT.settlement_amount);

    rsx! {
        div { id: "settlementAlert",
            div { class: if dark { "bg-[#111926] p-4" } else { "bg-gray-100 p-4" },
                h2 { class: "text-xl font-bold mb-2", "{title}" }
                div { class: "flex items-center space-x-2",
                    div { class: "avatar",
                        img { class: "h-6 w-6 rounded-full", src: favicon, alt: "" }
                    }
                    h3 { class: if dark { "text-gray-200" } else { "text-gray-700" }, "{company}" }
                }
            }

            div { class: "p-4 space-y-4",
                div { class: "flex items-center space-x-2",
                    icons::Calendar { class: Some("w-4 h-4 text-red-500".to_string()) }
                    p { class: "text-sm",
                        span { class: "font-semibold", "Deadline: " }
                        "{deadline}"
                    }
                }
                div { class: "flex items-center space-x-2",
                    icons::Clock { class: Some("w-4 h-4 text-red-500".to_string()) }
                    p { class: "text-sm",
                        span { class: "font-semibold", "Time Remaining: " }
                        "{remaining}"
                    }
                }
                div { class: "flex items-center space-x-2",
                    icons::DollarSign { class: Some("w-4 h-4 text-red-500".to_string()) }
                    p { class: "text-sm",
                        span { class: "font-semibold", "Settlement Amount: " }
                        "{amount}"
                    }
                }
                div { class: "flex items-center space-x-2",
                    icons::Award { class: Some("w-4 h-4 text-red-500".to_string()) }
                    p { class: "text-sm",
                        span { class: "font-semibold", "Potential Award: " }
                        "{award}"
                    }
                }
                div { class: "flex items-start space-x-2",
                    icons::FileText { class: Some("w-4 h-4 text-red-500 mt-1".to_string()) }
                    p { class: "text-sm",
                        span { class: "font-semibold", "Description: " }
                        "{description}"
                    }
                }
            }

            div { class: "p-4 space-y-2",
                button {
                    id: "submitClaimBtn",
                    class: "w-full bg-red-600 hover:bg-red-700 text-white font-bold py-3 px-4 rounded flex items-center justify-center",
                    "Submit a Claim"
                    icons::ExternalLink { class: Some("w-4 h-4 ml-2".to_string()) }
                }

                match mode {
                    AlertMode::Actions => rsx! {
                        div { class: "flex space-x-2",
                            button { id: "snoozeBtn", class: ACTION_BUTTON,
                                "Snooze"
                                icons::Clock { class: Some("w-4 h-4 ml-2".to_string()) }
                            }
                            button { id: "dismissBtn", class: ACTION_BUTTON,
                                "Dismiss"
                                icons::X { class: Some("w-4 h-4 ml-2".to_string()) }
                            }
                        }
                    },
                    AlertMode::SnoozeOptions => rsx! {
                        div { class: "space-y-2",
                            {SnoozeDuration::ALL.into_iter().map(|duration| {
                                let value = duration.as_str();
                                let label = duration.label();
                                rsx! {
                                    button {
                                        key: "{value}",
                                        class: "w-full bg-gray-700 hover:bg-gray-600 text-white font-bold py-2 px-4 rounded",
                                        "data-snooze": value,
                                        "Snooze for {label}"
                                    }
                                }
                            })}
                            button {
                                id: "cancelSnooze",
                                class: "w-full bg-gray-500 hover:bg-gray-400 text-white font-bold py-2 px-4 rounded",
                                "Cancel"
                            }
                        }
                    },
                    AlertMode::DismissConfirmation => rsx! {
                        div { class: "space-y-2",
                            p { class: "text-center text-sm", "Dismiss for this website forever?" }
                            div { class: "flex space-x-2",
                                button {
                                    id: "confirmDismiss",
                                    class: "flex-1 bg-red-600 hover:bg-red-700 text-white font-bold py-2 px-4 rounded",
                                    "Confirm"
                                }
                                button {
                                    id: "cancelDismiss",
                                    class: "flex-1 bg-gray-500 hover:bg-gray-400 text-white font-bold py-2 px-4 rounded",
                                    "Cancel"
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
