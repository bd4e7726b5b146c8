//! Specialist directory.

use crate::catalog::{self, Specialist, SPECIALISTS};
use crate::router::NavigationContext;
use crate::screen::{Direction, ScreenId, SpecialistId};

use super::{NavRequest, ScreenAction};

#[derive(Debug, Default)]
pub struct SpecialistsScreen {
    selected: usize,
}

impl SpecialistsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &'static Specialist {
        &SPECIALISTS[self.selected]
    }

    pub fn handle(&mut self, action: ScreenAction) -> Option<NavRequest> {
        match action {
            ScreenAction::Move(Direction::Up) => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            ScreenAction::Move(Direction::Down) | ScreenAction::NextField => {
                self.selected = (self.selected + 1).min(SPECIALISTS.len() - 1);
                None
            }
            ScreenAction::Activate => Some(book(self.selected().id)),
            ScreenAction::BookSpecialist(id) => catalog::specialist(id).map(|s| book(s.id)),
            _ => None,
        }
    }
}

fn book(id: SpecialistId) -> NavRequest {
    NavRequest::with(ScreenId::Booking, NavigationContext::specialist(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_carries_the_specialist() {
        let mut screen = SpecialistsScreen::new();
        screen.handle(ScreenAction::Move(Direction::Down));
        let req = screen.handle(ScreenAction::Activate).unwrap();
        assert_eq!(req.target, ScreenId::Booking);
        assert_eq!(req.context.specialist, Some(SpecialistId(2)));
        assert_eq!(req.context.feeling, None);
    }

    #[test]
    fn test_selection_clamps() {
        let mut screen = SpecialistsScreen::new();
        screen.handle(ScreenAction::Move(Direction::Up));
        assert_eq!(screen.selected().id, SpecialistId(1));
        for _ in 0..5 {
            screen.handle(ScreenAction::Move(Direction::Down));
        }
        assert_eq!(screen.selected().id, SpecialistId(3));
    }

    #[test]
    fn test_unknown_specialist_is_ignored() {
        let mut screen = SpecialistsScreen::new();
        assert!(screen
            .handle(ScreenAction::BookSpecialist(SpecialistId(42)))
            .is_none());
    }
}
