use dioxus::prelude::*;

use super::PanelContext;
use crate::action::Region;
use crate::format;
use crate::icons;
use crate::router::SETTINGS_TOGGLE_CLASS;
use crate::state::Menu;

const MENU_CLASS: &str = "absolute right-4 top-12 w-64 bg-white rounded-md shadow-lg z-10";
const MENU_HIDDEN_CLASS: &str = "absolute right-4 top-12 w-64 bg-white rounded-md shadow-lg z-10 hidden";

fn menu_class(open: bool) -> &'static str {
    if open {
        MENU_CLASS
    } else {
        MENU_HIDDEN_CLASS
    }
}

/// Title bar with the menu and close buttons. Static; the menus re-render themselves.
#[component]
pub fn PanelHeader() -> Element {
    let settings_button = Menu::Settings.button_id();
    let more_options_button = Menu::MoreOptions.button_id();

    rsx! {
        header { class: "relative flex items-center justify-between px-4 py-3 border-b",
            span { class: "text-lg font-semibold", "Settlement Alerts" }
            div { class: "flex items-center space-x-2",
                button { id: settings_button, class: "text-gray-400 hover:text-gray-600",
                    icons::Settings { class: Some("w-5 h-5".to_string()) }
                }
                button { id: more_options_button, class: "text-gray-400 hover:text-gray-600",
                    icons::MoreVertical { class: Some("w-5 h-5".to_string()) }
                }
                button { id: "closePanelBtn", class: "text-gray-400 hover:text-gray-600",
                    icons::X { class: Some("w-5 h-5".to_string()) }
                }
            }
            SettingsMenu {}
            MoreOptionsMenu {}
        }
    }
}

#[component]
pub fn SettingsMenu() -> Element {
    let ctx = use_context::<PanelContext>();
    ctx.track(Region::SettingsMenu);

    let (open, rows) = {
        let state = ctx.state();
        let rows: Vec<(&'static str, String, bool)> = state
            .settings
            .iter()
            .map(|(key, value)| (key.as_str(), format::setting_label(key.as_str()), value))
            .collect();
        (state.is_menu_open(Menu::Settings), rows)
    };
    let container_id = Menu::Settings.container_id();

    rsx! {
        div { id: container_id, class: menu_class(open),
            div { class: "py-1",
                {rows.into_iter().map(|(key, label, value)| rsx! {
                    div { key: "{key}", class: "px-4 py-2 flex items-center justify-between",
                        span { class: "text-sm text-gray-800", "{label}" }
                        label { class: "switch",
                            input { r#type: "checkbox", id: key, class: SETTINGS_TOGGLE_CLASS, checked: value }
                            span { class: "slider" }
                        }
                    }
                })}
            }
        }
    }
}

#[component]
pub fn MoreOptionsMenu() -> Element {
    let ctx = use_context::<PanelContext>();
    ctx.track(Region::MoreOptionsMenu);
    let open = ctx.state().is_menu_open(Menu::MoreOptions);
    let container_id = Menu::MoreOptions.container_id();

    rsx! {
        div { id: container_id, class: menu_class(open),
            div { class: "py-1",
                a { href: "#feedback", class: "menu-item", "Feedback" }
                a { href: "#share", class: "menu-item", "Share" }
                a { href: "#rate", class: "menu-item", "Rate Us" }
            }
        }
    }
}
