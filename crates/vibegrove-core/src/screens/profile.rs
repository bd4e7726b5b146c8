//! Profile: journey stats, achievements, and two settings switches.

use serde::Serialize;

use crate::screen::Direction;

use super::{NavRequest, ScreenAction};

pub const STREAK_DAYS: u32 = 14;
pub const TOTAL_CHECK_INS: u32 = 28;
pub const WELLNESS_SCORE: u32 = 78;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Setting {
    DailyReminders,
    PrivacyMode,
}

impl Setting {
    pub const ALL: [Setting; 2] = [Setting::DailyReminders, Setting::PrivacyMode];

    pub fn label(self) -> &'static str {
        match self {
            Setting::DailyReminders => "Daily Reminders",
            Setting::PrivacyMode => "Privacy Mode",
        }
    }
}

#[derive(Debug)]
pub struct ProfileScreen {
    daily_reminders: bool,
    privacy_mode: bool,
    selected: usize,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self {
            daily_reminders: true,
            privacy_mode: false,
            selected: 0,
        }
    }

    pub fn is_enabled(&self, setting: Setting) -> bool {
        match setting {
            Setting::DailyReminders => self.daily_reminders,
            Setting::PrivacyMode => self.privacy_mode,
        }
    }

    pub fn selected(&self) -> Setting {
        Setting::ALL[self.selected]
    }

    pub fn toggle(&mut self, setting: Setting) {
        match setting {
            Setting::DailyReminders => self.daily_reminders = !self.daily_reminders,
            Setting::PrivacyMode => self.privacy_mode = !self.privacy_mode,
        }
    }

    pub fn handle(&mut self, action: ScreenAction) -> Option<NavRequest> {
        match action {
            ScreenAction::Move(Direction::Up) => self.selected = self.selected.saturating_sub(1),
            ScreenAction::Move(Direction::Down) | ScreenAction::NextField => {
                self.selected = (self.selected + 1).min(Setting::ALL.len() - 1)
            }
            ScreenAction::Activate | ScreenAction::Char(' ') => self.toggle(self.selected()),
            ScreenAction::ToggleSetting(setting) => self.toggle(setting),
            _ => {}
        }
        None
    }
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = ProfileScreen::new();
        assert!(p.is_enabled(Setting::DailyReminders));
        assert!(!p.is_enabled(Setting::PrivacyMode));
    }

    #[test]
    fn test_toggle_via_selection() {
        let mut p = ProfileScreen::new();
        p.handle(ScreenAction::Move(Direction::Down));
        p.handle(ScreenAction::Char(' '));
        assert!(p.is_enabled(Setting::PrivacyMode));
        p.handle(ScreenAction::ToggleSetting(Setting::DailyReminders));
        assert!(!p.is_enabled(Setting::DailyReminders));
    }
}
