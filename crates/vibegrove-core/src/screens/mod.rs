//! Per-screen ephemeral state. A screen is mounted when the router lands on
//! it and torn down when the router leaves; nothing survives a remount.

pub mod booking;
pub mod call;
pub mod forest;
pub mod main_menu;
pub mod profile;
pub mod specialists;
pub mod tree;

use tokio::time::Instant;

use crate::config::Config;
use crate::events::GroveEvent;
use crate::router::NavigationContext;
use crate::screen::{Direction, Feeling, ScreenId, SpecialistId};
use crate::timers::{TimerFired, TimerSender};
use crate::types::{Point, Rect};

use booking::BookingScreen;
use call::CallScreen;
use forest::ForestScreen;
use main_menu::MainMenu;
use profile::{ProfileScreen, Setting};
use specialists::SpecialistsScreen;
use tree::TreeScreen;

/// A screen asking the router to go somewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRequest {
    pub target: ScreenId,
    pub context: NavigationContext,
}

impl NavRequest {
    pub fn to(target: ScreenId) -> Self {
        Self {
            target,
            context: NavigationContext::default(),
        }
    }

    pub fn with(target: ScreenId, context: NavigationContext) -> Self {
        Self { target, context }
    }
}

/// Screen-local input. Screens ignore actions that mean nothing to them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScreenAction {
    /// An arrow key the router did not claim.
    Move(Direction),
    Activate,
    NextField,
    Char(char),
    Backspace,
    Back,
    /// Tap on an empty part of the screen.
    Tap,
    ChooseFeeling(Feeling),
    ToggleTree(u32),
    PresetReply(usize),
    BookSpecialist(SpecialistId),
    SelectDate(usize),
    SelectTime(usize),
    SelectSessionType(usize),
    ToggleSetting(Setting),
    DragStart { pointer: Point, tool: Rect },
    DragMove { pointer: Point, target: Rect },
    DragEnd,
}

/// What a screen can see and touch while handling one action.
pub struct ScreenCx<'a> {
    pub now: Instant,
    pub context: NavigationContext,
    pub events: &'a mut Vec<GroveEvent>,
}

#[derive(Debug)]
pub enum ScreenState {
    Main(MainMenu),
    Call(CallScreen),
    Tree(TreeScreen),
    Forest(ForestScreen),
    Specialists(SpecialistsScreen),
    Profile(ProfileScreen),
    Booking(BookingScreen),
}

impl ScreenState {
    pub fn mount(id: ScreenId, config: &Config, timers: &TimerSender) -> Self {
        match id {
            ScreenId::Main => ScreenState::Main(MainMenu::new()),
            ScreenId::Call => ScreenState::Call(CallScreen::new(timers.clone(), config)),
            ScreenId::Tree => ScreenState::Tree(TreeScreen::new(timers.clone(), config)),
            ScreenId::Forest => ScreenState::Forest(ForestScreen::new(&mut rand::thread_rng())),
            ScreenId::Specialists => ScreenState::Specialists(SpecialistsScreen::new()),
            ScreenId::Profile => ScreenState::Profile(ProfileScreen::new()),
            ScreenId::Booking => ScreenState::Booking(BookingScreen::new(
                timers.clone(),
                config,
                chrono::Local::now().date_naive(),
            )),
        }
    }

    pub fn id(&self) -> ScreenId {
        match self {
            ScreenState::Main(_) => ScreenId::Main,
            ScreenState::Call(_) => ScreenId::Call,
            ScreenState::Tree(_) => ScreenId::Tree,
            ScreenState::Forest(_) => ScreenId::Forest,
            ScreenState::Specialists(_) => ScreenId::Specialists,
            ScreenState::Profile(_) => ScreenId::Profile,
            ScreenState::Booking(_) => ScreenId::Booking,
        }
    }

    pub fn handle(&mut self, action: ScreenAction, cx: &mut ScreenCx<'_>) -> Option<NavRequest> {
        match self {
            ScreenState::Main(s) => s.handle(action),
            ScreenState::Call(s) => s.handle(action),
            ScreenState::Tree(s) => s.handle(action, cx),
            ScreenState::Forest(s) => s.handle(action, cx),
            ScreenState::Specialists(s) => s.handle(action),
            ScreenState::Profile(s) => s.handle(action),
            ScreenState::Booking(s) => s.handle(action, cx),
        }
    }

    pub fn on_timer(&mut self, fired: &TimerFired, cx: &mut ScreenCx<'_>) -> Option<NavRequest> {
        match self {
            ScreenState::Call(s) => s.on_timer(fired, cx),
            ScreenState::Tree(s) => s.on_timer(fired),
            ScreenState::Booking(s) => s.on_timer(fired),
            ScreenState::Main(_)
            | ScreenState::Forest(_)
            | ScreenState::Specialists(_)
            | ScreenState::Profile(_) => None,
        }
    }

    /// Cancel outstanding timers and any drag before the screen goes away.
    pub fn teardown(&mut self, events: &mut Vec<GroveEvent>) {
        match self {
            ScreenState::Call(s) => s.teardown(),
            ScreenState::Tree(s) => {
                if s.teardown() {
                    events.push(GroveEvent::Drag { active: false });
                }
            }
            ScreenState::Booking(s) => s.teardown(),
            ScreenState::Main(_)
            | ScreenState::Forest(_)
            | ScreenState::Specialists(_)
            | ScreenState::Profile(_) => {}
        }
    }
}
