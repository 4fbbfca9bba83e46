// Declarative event routing
// The DOM listener snapshots the event target chain into `ElementInfo`s and
// this module maps it to a `PanelAction`. No DOM access happens here.

use crate::action::PanelAction;
use crate::error::{PanelError, Result};
use crate::state::{Collection, Menu, SettingKey, SnoozeDuration};

/// Data attributes the listener copies from each element in the chain
pub const DATA_ATTRIBUTES: [&str; 4] = ["data-action", "data-id", "data-type", "data-snooze"];

pub const SHOW_DISMISSED_ID: &str = "show-dismissed";
pub const SETTINGS_TOGGLE_CLASS: &str = "settings-toggle";

/// Snapshot of one element on the path from the event target to the root
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementInfo {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub data: Vec<(String, String)>,
    /// Checkbox state, `None` for non-input elements
    pub checked: Option<bool>,
}

impl ElementInfo {
    pub fn with_id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_data(mut self, name: &str, value: &str) -> Self {
        self.data.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn data(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Copy, Debug)]
enum Matcher {
    Id(&'static str),
    HasData(&'static str),
    DataEquals(&'static str, &'static str),
}

impl Matcher {
    fn matches(self, element: &ElementInfo) -> bool {
        match self {
            Matcher::Id(id) => element.has_id(id),
            Matcher::HasData(name) => element.data(name).is_some(),
            Matcher::DataEquals(name, value) => element.data(name) == Some(value),
        }
    }
}

struct Route {
    matcher: Matcher,
    build: fn(&ElementInfo) -> Result<PanelAction>,
}

const CLICK_ROUTES: &[Route] = &[
    Route { matcher: Matcher::Id("submitClaimBtn"), build: submit_claim },
    Route { matcher: Matcher::Id("snoozeBtn"), build: open_snooze_options },
    Route { matcher: Matcher::Id("dismissBtn"), build: open_dismiss_confirmation },
    Route { matcher: Matcher::HasData("data-snooze"), build: snooze },
    Route { matcher: Matcher::Id("cancelSnooze"), build: cancel_snooze },
    Route { matcher: Matcher::Id("confirmDismiss"), build: confirm_dismiss },
    Route { matcher: Matcher::Id("cancelDismiss"), build: cancel_dismiss },
    Route { matcher: Matcher::DataEquals("data-action", "dismiss"), build: dismiss_item },
    Route { matcher: Matcher::DataEquals("data-action", "undo"), build: undo_dismiss },
    Route { matcher: Matcher::Id("settingsButton"), build: toggle_settings_menu },
    Route { matcher: Matcher::Id("moreOptionsButton"), build: toggle_more_options_menu },
    Route { matcher: Matcher::Id("closePanelBtn"), build: close_panel },
];

fn submit_claim(_: &ElementInfo) -> Result<PanelAction> {
    Ok(PanelAction::SubmitClaim)
}

fn open_snooze_options(_: &ElementInfo) -> Result<PanelAction> {
    Ok(PanelAction::OpenSnoozeOptions)
}

fn open_dismiss_confirmation(_: &ElementInfo) -> Result<PanelAction> {
    Ok(PanelAction::OpenDismissConfirmation)
}

fn snooze(element: &ElementInfo) -> Result<PanelAction> {
    let duration = element.data("data-snooze").unwrap_or_default().parse::<SnoozeDuration>()?;
    Ok(PanelAction::Snooze(duration))
}

fn cancel_snooze(_: &ElementInfo) -> Result<PanelAction> {
    Ok(PanelAction::CancelSnooze)
}

fn confirm_dismiss(_: &ElementInfo) -> Result<PanelAction> {
    Ok(PanelAction::ConfirmDismiss)
}

fn cancel_dismiss(_: &ElementInfo) -> Result<PanelAction> {
    Ok(PanelAction::CancelDismiss)
}

fn item_ref(element: &ElementInfo) -> Result<(Collection, u32)> {
    let collection = element.data("data-type").unwrap_or_default().parse::<Collection>()?;
    let raw_id = element.data("data-id").unwrap_or_default();
    let id = raw_id
        .parse::<u32>()
        .map_err(|_| PanelError::InvalidItemId(raw_id.to_string()))?;
    Ok((collection, id))
}

fn dismiss_item(element: &ElementInfo) -> Result<PanelAction> {
    let (collection, id) = item_ref(element)?;
    Ok(PanelAction::DismissItem { collection, id })
}

fn undo_dismiss(element: &ElementInfo) -> Result<PanelAction> {
    let (collection, id) = item_ref(element)?;
    Ok(PanelAction::UndoDismiss { collection, id })
}

fn toggle_settings_menu(_: &ElementInfo) -> Result<PanelAction> {
    Ok(PanelAction::ToggleMenu(Menu::Settings))
}

fn toggle_more_options_menu(_: &ElementInfo) -> Result<PanelAction> {
    Ok(PanelAction::ToggleMenu(Menu::MoreOptions))
}

fn close_panel(_: &ElementInfo) -> Result<PanelAction> {
    Ok(PanelAction::ClosePanel)
}

/// Route a click. `chain[0]` is the event target, followed by its ancestors.
///
/// The nearest element matching any route wins, so clicks on an icon inside
/// a button resolve to the button. A click matching nothing closes the menus
/// it did not land in.
pub fn route_click(chain: &[ElementInfo]) -> Result<PanelAction> {
    for element in chain {
        if let Some(route) = CLICK_ROUTES.iter().find(|r| r.matcher.matches(element)) {
            return (route.build)(element);
        }
    }

    let inside = Menu::ALL
        .into_iter()
        .filter(|menu| chain.iter().any(|el| el.has_id(menu.container_id())))
        .collect();
    Ok(PanelAction::CloseMenusOutside(inside))
}

/// Route a change event on `target`. Changes on unrelated inputs yield `None`.
pub fn route_change(target: &ElementInfo) -> Result<Option<PanelAction>> {
    let checked = target.checked.unwrap_or(false);

    if target.has_id(SHOW_DISMISSED_ID) {
        return Ok(Some(PanelAction::SetShowDismissed(checked)));
    }

    if target.has_class(SETTINGS_TOGGLE_CLASS) {
        let key = target.id.as_deref().unwrap_or_default().parse::<SettingKey>()?;
        return Ok(Some(PanelAction::SetSetting(key, checked)));
    }

    Ok(None)
}
