//! Clickable regions registered while drawing.
//!
//! Every frame rebuilds the map; mouse handling queries the one from the
//! last draw. Later registrations sit on top of earlier ones.

use ratatui::layout::{Position, Rect};

use vibegrove_core::screen::{Feeling, ScreenId, SpecialistId};
use vibegrove_core::screens::profile::Setting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    NavTab(ScreenId),
    Feeling(Feeling),
    CommunityTree(u32),
    PresetReply(usize),
    Send,
    BookSpecialist(SpecialistId),
    Date(usize),
    Time(usize),
    SessionType(usize),
    Confirm,
    Back,
    Setting(Setting),
}

#[derive(Debug, Default)]
pub struct HitMap {
    areas: Vec<(Rect, HitTarget)>,
    /// Where the watering bucket sits when it is not being dragged.
    pub bucket: Option<Rect>,
    /// The tree canopy on the tree screen, the bucket's drop target.
    pub canopy: Option<Rect>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.areas.push((area, target));
        }
    }

    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        self.areas
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| *target)
    }

    pub fn on_bucket(&self, column: u16, row: u16) -> bool {
        self.bucket
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }
}
