// Panel view state
// Created from constants on every mount, dropped on unmount, never persisted

use std::fmt;
use std::str::FromStr;

use crate::error::PanelError;

/// Named boolean toggles shown in the settings menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingKey {
    AutoPopupAlerts,
    SettlementAlerts,
    DataBreachAlerts,
    InvestigationAlerts,
    DarkMode,
}

impl SettingKey {
    /// Display order of the settings menu
    pub const ALL: [SettingKey; 5] = [
        SettingKey::AutoPopupAlerts,
        SettingKey::SettlementAlerts,
        SettingKey::DataBreachAlerts,
        SettingKey::InvestigationAlerts,
        SettingKey::DarkMode,
    ];

    /// camelCase name, also the element id of the settings checkbox
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::AutoPopupAlerts => "autoPopupAlerts",
            SettingKey::SettlementAlerts => "settlementAlerts",
            SettingKey::DataBreachAlerts => "dataBreachAlerts",
            SettingKey::InvestigationAlerts => "investigationAlerts",
            SettingKey::DarkMode => "darkMode",
        }
    }
}

impl FromStr for SettingKey {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| PanelError::UnknownSetting(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub auto_popup_alerts: bool,
    pub settlement_alerts: bool,
    pub data_breach_alerts: bool,
    pub investigation_alerts: bool,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_popup_alerts: true,
            settlement_alerts: true,
            data_breach_alerts: true,
            investigation_alerts: true,
            dark_mode: false,
        }
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::AutoPopupAlerts => self.auto_popup_alerts,
            SettingKey::SettlementAlerts => self.settlement_alerts,
            SettingKey::DataBreachAlerts => self.data_breach_alerts,
            SettingKey::InvestigationAlerts => self.investigation_alerts,
            SettingKey::DarkMode => self.dark_mode,
        }
    }

    fn slot(&mut self, key: SettingKey) -> &mut bool {
        match key {
            SettingKey::AutoPopupAlerts => &mut self.auto_popup_alerts,
            SettingKey::SettlementAlerts => &mut self.settlement_alerts,
            SettingKey::DataBreachAlerts => &mut self.data_breach_alerts,
            SettingKey::InvestigationAlerts => &mut self.investigation_alerts,
            SettingKey::DarkMode => &mut self.dark_mode,
        }
    }

    /// Settings in menu order
    pub fn iter(&self) -> impl Iterator<Item = (SettingKey, bool)> + '_ {
        SettingKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// The three claim lists. Item ids are only unique within one collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Settlements,
    DataBreaches,
    Investigations,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Settlements,
        Collection::DataBreaches,
        Collection::Investigations,
    ];

    /// Value of the `data-type` attribute on item buttons
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Settlements => "settlements",
            Collection::DataBreaches => "dataBreaches",
            Collection::Investigations => "investigations",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Collection::Settlements => "Settlements",
            Collection::DataBreaches => "Data Breaches",
            Collection::Investigations => "Investigations",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| PanelError::InvalidCollectionReference(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimItem {
    pub id: u32,
    pub name: String,
    /// ISO date, settlements only
    pub deadline: Option<String>,
    /// Investigation category
    pub subtype: Option<String>,
    pub url: Option<String>,
    pub dismissed: bool,
}

impl ClaimItem {
    fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            deadline: None,
            subtype: None,
            url: None,
            dismissed: false,
        }
    }

    fn with_deadline(mut self, deadline: &str) -> Self {
        self.deadline = Some(deadline.to_string());
        self
    }

    fn with_subtype(mut self, subtype: &str) -> Self {
        self.subtype = Some(subtype.to_string());
        self
    }

    fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }
}

/// Read-only reference data for the alert region
#[derive(Debug)]
pub struct Settlement {
    pub company: &'static str,
    pub title: &'static str,
    pub favicon: &'static str,
    pub deadline: &'static str,
    pub settlement_amount: i64,
    pub award_amount: &'static str,
    pub description: &'static str,
    pub claim_url: &'static str,
}

pub const SETTLEMENT: Settlement = Settlement {
    company: "TechCorp Inc.",
    title: "Class Action Settlement Alert",
    favicon: "https://example.com/favicon.ico",
    deadline: "2024-12-30",
    settlement_amount: 10_000_000,
    award_amount: "Up to $500 per claim",
    description: "Compensation for users affected by data breach. Eligibility: Customers between 2020-2023. Proof of account required.",
    claim_url: "https://techcorpsettlement.com/claim",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnoozeDuration {
    Day,
    Week,
}

impl SnoozeDuration {
    pub const ALL: [SnoozeDuration; 2] = [SnoozeDuration::Day, SnoozeDuration::Week];

    /// Value of the `data-snooze` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            SnoozeDuration::Day => "24h",
            SnoozeDuration::Week => "1w",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SnoozeDuration::Day => "24 hours",
            SnoozeDuration::Week => "1 week",
        }
    }
}

impl FromStr for SnoozeDuration {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SnoozeDuration::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| PanelError::InvalidSnoozeDuration(s.to_string()))
    }
}

/// What the alert's button area shows below "Submit a Claim".
/// One enum instead of two flags: snooze options and the dismiss
/// confirmation can never be visible at the same time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertMode {
    #[default]
    Actions,
    SnoozeOptions,
    DismissConfirmation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Menu {
    Settings,
    MoreOptions,
}

impl Menu {
    pub const ALL: [Menu; 2] = [Menu::Settings, Menu::MoreOptions];

    pub fn container_id(self) -> &'static str {
        match self {
            Menu::Settings => "settingsMenu",
            Menu::MoreOptions => "moreOptionsMenu",
        }
    }

    pub fn button_id(self) -> &'static str {
        match self {
            Menu::Settings => "settingsButton",
            Menu::MoreOptions => "moreOptionsButton",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub settings: Settings,
    pub alert_mode: AlertMode,
    pub show_dismissed: bool,
    pub settings_menu_open: bool,
    pub more_options_menu_open: bool,
    pub settlements: Vec<ClaimItem>,
    pub data_breaches: Vec<ClaimItem>,
    pub investigations: Vec<ClaimItem>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Fresh state for a newly mounted panel
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            alert_mode: AlertMode::Actions,
            show_dismissed: false,
            settings_menu_open: false,
            more_options_menu_open: false,
            settlements: vec![
                ClaimItem::new(1, "TechCorp Inc. Data Breach").with_deadline("2024-12-30"),
                ClaimItem::new(2, "FinanceApp Overcharging").with_deadline("2024-11-15"),
                ClaimItem::new(3, "EcoProducts False Advertising").with_deadline("2025-01-20"),
            ],
            data_breaches: vec![
                ClaimItem::new(1, "MegaStore").with_url("#"),
                ClaimItem::new(2, "HealthPlus").with_url("#"),
                ClaimItem::new(3, "SecureBank").with_url("#"),
            ],
            investigations: vec![
                ClaimItem::new(1, "Acme Corp").with_subtype("Data Breach").with_url("#"),
                ClaimItem::new(2, "Wells Fargo").with_subtype("Late Fees").with_url("#"),
                ClaimItem::new(3, "TechGiant").with_subtype("Privacy Violation").with_url("#"),
            ],
        }
    }

    pub fn items(&self, collection: Collection) -> &[ClaimItem] {
        match collection {
            Collection::Settlements => &self.settlements,
            Collection::DataBreaches => &self.data_breaches,
            Collection::Investigations => &self.investigations,
        }
    }

    fn items_mut(&mut self, collection: Collection) -> &mut Vec<ClaimItem> {
        match collection {
            Collection::Settlements => &mut self.settlements,
            Collection::DataBreaches => &mut self.data_breaches,
            Collection::Investigations => &mut self.investigations,
        }
    }

    /// Items the claims table shows, in seed order
    pub fn visible_items(&self, collection: Collection) -> Vec<&ClaimItem> {
        self.items(collection)
            .iter()
            .filter(|item| self.show_dismissed || !item.dismissed)
            .collect()
    }

    fn set_dismissed(&mut self, collection: Collection, id: u32, dismissed: bool) -> bool {
        match self.items_mut(collection).iter_mut().find(|item| item.id == id) {
            Some(item) => {
                let changed = item.dismissed != dismissed;
                item.dismissed = dismissed;
                changed
            }
            None => {
                log::debug!("No {} item with id {}", collection, id);
                false
            }
        }
    }

    /// Mark an item dismissed. Unknown ids are a no-op; returns whether anything changed.
    pub fn dismiss(&mut self, collection: Collection, id: u32) -> bool {
        self.set_dismissed(collection, id, true)
    }

    pub fn undo_dismiss(&mut self, collection: Collection, id: u32) -> bool {
        self.set_dismissed(collection, id, false)
    }

    pub fn set_show_dismissed(&mut self, show: bool) {
        self.show_dismissed = show;
    }

    pub fn set_setting(&mut self, key: SettingKey, value: bool) {
        *self.settings.slot(key) = value;
    }

    pub fn show_snooze_options(&self) -> bool {
        self.alert_mode == AlertMode::SnoozeOptions
    }

    pub fn show_dismiss_confirmation(&self) -> bool {
        self.alert_mode == AlertMode::DismissConfirmation
    }

    pub fn open_snooze_options(&mut self) {
        self.alert_mode = AlertMode::SnoozeOptions;
    }

    pub fn cancel_snooze(&mut self) {
        self.alert_mode = AlertMode::Actions;
    }

    /// Snoozing only closes the options; the alert is not suppressed.
    pub fn snooze(&mut self, duration: SnoozeDuration) {
        log::info!("Snoozed for {}", duration.as_str());
        self.alert_mode = AlertMode::Actions;
    }

    pub fn open_dismiss_confirmation(&mut self) {
        self.alert_mode = AlertMode::DismissConfirmation;
    }

    pub fn confirm_dismiss_panel(&mut self) {
        log::info!("Dismissed for this website forever");
        self.alert_mode = AlertMode::Actions;
    }

    pub fn cancel_dismiss_panel(&mut self) {
        self.alert_mode = AlertMode::Actions;
    }

    pub fn is_menu_open(&self, menu: Menu) -> bool {
        match menu {
            Menu::Settings => self.settings_menu_open,
            Menu::MoreOptions => self.more_options_menu_open,
        }
    }

    fn menu_slot(&mut self, menu: Menu) -> &mut bool {
        match menu {
            Menu::Settings => &mut self.settings_menu_open,
            Menu::MoreOptions => &mut self.more_options_menu_open,
        }
    }

    pub fn toggle_menu(&mut self, menu: Menu) {
        let open = self.menu_slot(menu);
        *open = !*open;
    }

    /// Close every open menu the click did not land in.
    /// Returns the menus that were actually closed.
    pub fn close_menus_outside(&mut self, inside: &[Menu]) -> Vec<Menu> {
        let mut closed = Vec::new();
        for menu in Menu::ALL {
            if inside.contains(&menu) {
                continue;
            }
            let open = self.menu_slot(menu);
            if *open {
                *open = false;
                closed.push(menu);
            }
        }
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = ViewState::new();
        assert!(state.settings.auto_popup_alerts);
        assert!(!state.settings.dark_mode);
        assert_eq!(state.alert_mode, AlertMode::Actions);
        assert!(!state.show_dismissed);
        for collection in Collection::ALL {
            assert_eq!(state.items(collection).len(), 3);
            assert!(state.items(collection).iter().all(|item| !item.dismissed));
        }
    }

    #[test]
    fn test_dismiss_then_undo_restores_item() {
        for collection in Collection::ALL {
            let mut state = ViewState::new();
            let before = state.clone();

            assert!(state.dismiss(collection, 2));
            assert!(state.items(collection)[1].dismissed);

            assert!(state.undo_dismiss(collection, 2));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_dismiss_is_scoped_to_collection() {
        let mut state = ViewState::new();
        state.dismiss(Collection::DataBreaches, 1);

        assert!(state.data_breaches[0].dismissed);
        // Same id in the other collections stays untouched
        assert!(!state.settlements[0].dismissed);
        assert!(!state.investigations[0].dismissed);
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut state = ViewState::new();
        let before = state.clone();
        assert!(!state.dismiss(Collection::Settlements, 42));
        assert_eq!(state, before);
    }

    #[test]
    fn test_visible_items_filters_dismissed() {
        let mut state = ViewState::new();
        state.dismiss(Collection::Investigations, 2);

        let names: Vec<&str> = state
            .visible_items(Collection::Investigations)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Acme Corp", "TechGiant"]);

        state.set_show_dismissed(true);
        let ids: Vec<u32> = state
            .visible_items(Collection::Investigations)
            .iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_snooze_cancel_restores_action_row() {
        let mut state = ViewState::new();
        state.open_snooze_options();
        assert!(state.show_snooze_options());
        assert!(!state.show_dismiss_confirmation());

        state.cancel_snooze();
        assert_eq!(state.alert_mode, AlertMode::Actions);
        assert!(!state.show_snooze_options());
        assert!(!state.show_dismiss_confirmation());
    }

    #[test]
    fn test_snooze_and_dismiss_panels_are_exclusive() {
        let mut state = ViewState::new();
        state.open_snooze_options();
        state.open_dismiss_confirmation();
        assert!(state.show_dismiss_confirmation());
        assert!(!state.show_snooze_options());

        state.confirm_dismiss_panel();
        assert_eq!(state.alert_mode, AlertMode::Actions);
    }

    #[test]
    fn test_set_setting_by_key() {
        let mut state = ViewState::new();
        state.set_setting(SettingKey::DarkMode, true);
        state.set_setting(SettingKey::SettlementAlerts, false);

        let values: Vec<bool> = state.settings.iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![true, false, true, true, true]);
    }

    #[test]
    fn test_parse_wire_names() {
        assert_eq!("dataBreaches".parse::<Collection>(), Ok(Collection::DataBreaches));
        assert_eq!(
            "data breaches".parse::<Collection>(),
            Err(PanelError::InvalidCollectionReference("data breaches".to_string()))
        );
        assert_eq!("darkMode".parse::<SettingKey>(), Ok(SettingKey::DarkMode));
        assert!("lightMode".parse::<SettingKey>().is_err());
        assert_eq!("1w".parse::<SnoozeDuration>(), Ok(SnoozeDuration::Week));
    }

    #[test]
    fn test_close_menus_outside() {
        let mut state = ViewState::new();
        state.toggle_menu(Menu::Settings);
        state.toggle_menu(Menu::MoreOptions);

        let closed = state.close_menus_outside(&[Menu::Settings]);
        assert_eq!(closed, vec![Menu::MoreOptions]);
        assert!(state.settings_menu_open);

        let closed = state.close_menus_outside(&[]);
        assert_eq!(closed, vec![Menu::Settings]);
        assert!(state.close_menus_outside(&[]).is_empty());
    }

    #[test]
    fn test_toggle_menu_reports_open_state() {
        let mut state = ViewState::new();
        assert!(!state.is_menu_open(Menu::Settings));

        state.toggle_menu(Menu::Settings);
        assert!(state.is_menu_open(Menu::Settings));
        assert!(!state.is_menu_open(Menu::MoreOptions));

        state.toggle_menu(Menu::Settings);
        assert!(!state.is_menu_open(Menu::Settings));
    }
}
