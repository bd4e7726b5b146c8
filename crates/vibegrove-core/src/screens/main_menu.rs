//! Home screen: "How are you feeling today?"

use crate::router::NavigationContext;
use crate::screen::{Direction, Feeling, ScreenId};

use super::{NavRequest, ScreenAction};

/// The feeling grid followed by the "Instant Help" button.
pub const OPTIONS: [Feeling; 7] = [
    Feeling::Anxious,
    Feeling::Stressed,
    Feeling::Angry,
    Feeling::Sad,
    Feeling::Fatigued,
    Feeling::Unsure,
    Feeling::Emergency,
];

#[derive(Debug, Default)]
pub struct MainMenu {
    selected: usize,
}

impl MainMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Feeling {
        OPTIONS[self.selected]
    }

    pub fn handle(&mut self, action: ScreenAction) -> Option<NavRequest> {
        match action {
            ScreenAction::Move(Direction::Left) => {
                self.selected = (self.selected + OPTIONS.len() - 1) % OPTIONS.len();
                None
            }
            ScreenAction::Move(Direction::Right) | ScreenAction::NextField => {
                self.selected = (self.selected + 1) % OPTIONS.len();
                None
            }
            ScreenAction::Activate => Some(choose(self.selected())),
            ScreenAction::ChooseFeeling(feeling) => Some(choose(feeling)),
            ScreenAction::Char('!') => Some(choose(Feeling::Emergency)),
            ScreenAction::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                Some(choose(OPTIONS[idx]))
            }
            _ => None,
        }
    }
}

fn choose(feeling: Feeling) -> NavRequest {
    NavRequest::with(ScreenId::Call, NavigationContext::feeling(feeling))
}
