// Panel actions and their effect on the view state

use std::cell::Cell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::state::{Collection, Menu, SettingKey, SnoozeDuration, ViewState, SETTLEMENT};

/// Everything a user interaction can ask the panel to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelAction {
    SubmitClaim,
    OpenSnoozeOptions,
    Snooze(SnoozeDuration),
    CancelSnooze,
    OpenDismissConfirmation,
    ConfirmDismiss,
    CancelDismiss,
    DismissItem { collection: Collection, id: u32 },
    UndoDismiss { collection: Collection, id: u32 },
    ToggleMenu(Menu),
    /// Click that matched no route; carries the menus it landed inside
    CloseMenusOutside(Vec<Menu>),
    SetShowDismissed(bool),
    SetSetting(SettingKey, bool),
    ClosePanel,
}

/// Independently re-rendered parts of the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    SettlementAlert,
    PotentialClaims,
    SettingsMenu,
    MoreOptionsMenu,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::SettlementAlert,
        Region::PotentialClaims,
        Region::SettingsMenu,
        Region::MoreOptionsMenu,
    ];

    /// Id of the element the region renders into
    pub fn mount_id(self) -> &'static str {
        match self {
            Region::SettlementAlert => "settlementAlert",
            Region::PotentialClaims => "potentialClaims",
            Region::SettingsMenu => "settingsMenu",
            Region::MoreOptionsMenu => "moreOptionsMenu",
        }
    }
}

impl From<Menu> for Region {
    fn from(menu: Menu) -> Self {
        match menu {
            Menu::Settings => Region::SettingsMenu,
            Menu::MoreOptions => Region::MoreOptionsMenu,
        }
    }
}

/// Side effects outside the view state, performed by the panel host
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    OpenUrl(&'static str),
    /// Force the page-level dark mode class on or off
    DarkMode(bool),
    ClosePanel,
}

/// Once-per-mount latch for the close sequence. Clones share the latch.
#[derive(Clone, Debug, Default)]
pub struct CloseLatch {
    fired: Rc<Cell<bool>>,
}

impl CloseLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// True on the first call only
    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub regions: BTreeSet<Region>,
    pub effects: Vec<Effect>,
}

impl Outcome {
    fn render(regions: impl IntoIterator<Item = Region>) -> Self {
        Self {
            regions: regions.into_iter().collect(),
            effects: Vec::new(),
        }
    }

    fn effect(effect: Effect) -> Self {
        Self {
            regions: BTreeSet::new(),
            effects: vec![effect],
        }
    }
}

impl ViewState {
    /// Apply an action, returning the regions to re-render and the
    /// effects to perform. Regions not listed keep their DOM untouched.
    pub fn apply(&mut self, action: PanelAction) -> Outcome {
        match action {
            PanelAction::SubmitClaim => Outcome::effect(Effect::OpenUrl(SETTLEMENT.claim_url)),
            PanelAction::OpenSnoozeOptions => {
                self.open_snooze_options();
                Outcome::render([Region::SettlementAlert])
            }
            PanelAction::Snooze(duration) => {
                self.snooze(duration);
                Outcome::render([Region::SettlementAlert])
            }
            PanelAction::CancelSnooze => {
                self.cancel_snooze();
                Outcome::render([Region::SettlementAlert])
            }
            PanelAction::OpenDismissConfirmation => {
                self.open_dismiss_confirmation();
                Outcome::render([Region::SettlementAlert])
            }
            PanelAction::ConfirmDismiss => {
                self.confirm_dismiss_panel();
                Outcome::render([Region::SettlementAlert])
            }
            PanelAction::CancelDismiss => {
                self.cancel_dismiss_panel();
                Outcome::render([Region::SettlementAlert])
            }
            PanelAction::DismissItem { collection, id } => {
                if self.dismiss(collection, id) {
                    Outcome::render([Region::PotentialClaims])
                } else {
                    Outcome::default()
                }
            }
            PanelAction::UndoDismiss { collection, id } => {
                if self.undo_dismiss(collection, id) {
                    Outcome::render([Region::PotentialClaims])
                } else {
                    Outcome::default()
                }
            }
            PanelAction::ToggleMenu(menu) => {
                self.toggle_menu(menu);
                Outcome::render([Region::from(menu)])
            }
            PanelAction::CloseMenusOutside(inside) => {
                let closed = self.close_menus_outside(&inside);
                Outcome::render(closed.into_iter().map(Region::from))
            }
            PanelAction::SetShowDismissed(show) => {
                self.set_show_dismissed(show);
                Outcome::render([Region::PotentialClaims])
            }
            PanelAction::SetSetting(key, value) => {
                self.set_setting(key, value);
                if key == SettingKey::DarkMode {
                    // The alert header switches background with dark mode
                    Outcome {
                        regions: [Region::SettingsMenu, Region::SettlementAlert]
                            .into_iter()
                            .collect(),
                        effects: vec![Effect::DarkMode(value)],
                    }
                } else {
                    Outcome::render([Region::SettingsMenu])
                }
            }
            PanelAction::ClosePanel => Outcome::effect(Effect::ClosePanel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AlertMode;

    #[test]
    fn test_alert_actions_render_only_alert() {
        let mut state = ViewState::new();
        for action in [
            PanelAction::OpenSnoozeOptions,
            PanelAction::Snooze(SnoozeDuration::Day),
            PanelAction::OpenDismissConfirmation,
            PanelAction::CancelDismiss,
        ] {
            let outcome = state.apply(action);
            assert_eq!(outcome.regions, BTreeSet::from([Region::SettlementAlert]));
            assert!(outcome.effects.is_empty());
        }
        assert_eq!(state.alert_mode, AlertMode::Actions);
    }

    #[test]
    fn test_dismiss_item_renders_claims() {
        let mut state = ViewState::new();
        let outcome = state.apply(PanelAction::DismissItem {
            collection: Collection::Settlements,
            id: 3,
        });
        assert_eq!(outcome.regions, BTreeSet::from([Region::PotentialClaims]));
        assert!(state.settlements[2].dismissed);

        // Dismissing again changes nothing, so nothing re-renders
        let outcome = state.apply(PanelAction::DismissItem {
            collection: Collection::Settlements,
            id: 3,
        });
        assert!(outcome.regions.is_empty());
    }

    #[test]
    fn test_dark_mode_emits_one_effect_per_toggle() {
        let mut state = ViewState::new();

        let on = state.apply(PanelAction::SetSetting(SettingKey::DarkMode, true));
        assert_eq!(on.effects, vec![Effect::DarkMode(true)]);
        assert!(on.regions.contains(&Region::SettingsMenu));
        assert!(on.regions.contains(&Region::SettlementAlert));

        // Re-rendering the settings menu is not an action and emits nothing
        let reopen = state.apply(PanelAction::ToggleMenu(Menu::Settings));
        assert!(reopen.effects.is_empty());

        let off = state.apply(PanelAction::SetSetting(SettingKey::DarkMode, false));
        assert_eq!(off.effects, vec![Effect::DarkMode(false)]);
        assert!(!state.settings.dark_mode);
    }

    #[test]
    fn test_show_dismissed_renders_claims_only() {
        let mut state = ViewState::new();
        for show in [true, false] {
            let outcome = state.apply(PanelAction::SetShowDismissed(show));
            assert_eq!(outcome.regions, BTreeSet::from([Region::PotentialClaims]));
            assert!(outcome.effects.is_empty());
            assert_eq!(state.show_dismissed, show);
        }
    }

    #[test]
    fn test_close_latch_fires_once() {
        let latch = CloseLatch::new();
        let shared = latch.clone();
        assert!(latch.fire());
        assert!(!latch.fire());
        // Escape and a host closePopup hold clones of the same latch
        assert!(!shared.fire());
    }

    #[test]
    fn test_close_panel_action_emits_close_every_time() {
        let mut state = ViewState::new();
        for _ in 0..2 {
            let outcome = state.apply(PanelAction::ClosePanel);
            assert_eq!(outcome.effects, vec![Effect::ClosePanel]);
            assert!(outcome.regions.is_empty());
        }
    }

    #[test]
    fn test_other_settings_have_no_effect() {
        let mut state = ViewState::new();
        let outcome = state.apply(PanelAction::SetSetting(SettingKey::DataBreachAlerts, false));
        assert!(outcome.effects.is_empty());
        assert_eq!(outcome.regions, BTreeSet::from([Region::SettingsMenu]));
    }

    #[test]
    fn test_submit_claim_opens_claim_url() {
        let mut state = ViewState::new();
        let outcome = state.apply(PanelAction::SubmitClaim);
        assert_eq!(
            outcome.effects,
            vec![Effect::OpenUrl("https://techcorpsettlement.com/claim")]
        );
        assert!(outcome.regions.is_empty());
    }

    #[test]
    fn test_outside_click_renders_closed_menus_only() {
        let mut state = ViewState::new();
        let idle = state.apply(PanelAction::CloseMenusOutside(vec![]));
        assert_eq!(idle, Outcome::default());

        state.apply(PanelAction::ToggleMenu(Menu::MoreOptions));
        let outcome = state.apply(PanelAction::CloseMenusOutside(vec![]));
        assert_eq!(outcome.regions, BTreeSet::from([Region::MoreOptionsMenu]));
        assert!(!state.more_options_menu_open);
    }
}
