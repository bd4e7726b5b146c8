//! GroveApp: the router plus whichever screen is currently mounted.
//!
//! All input and timer tokens arrive here, one at a time, from the
//! frontend's event loop. A transition that changes screen tears the old
//! screen down (cancelling its timers) before mounting the new one.

use tokio::time::Instant;
use tracing::debug;

use crate::config::Config;
use crate::events::GroveEvent;
use crate::router::{Router, Transition};
use crate::screen::{NavKey, ScreenId};
use crate::screens::{NavRequest, ScreenAction, ScreenCx, ScreenState};
use crate::timers::{TimerFired, TimerSender};
use crate::types::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// A screen or the host asked to go somewhere.
    Navigate(NavRequest),
    NavBar(ScreenId),
    Key(NavKey),
    GestureStart(Point),
    GestureEnd(Point),
    Focus(bool),
    Screen(ScreenAction),
}

pub struct GroveApp {
    config: Config,
    router: Router,
    screen: ScreenState,
    timer_tx: TimerSender,
    events: Vec<GroveEvent>,
}

impl GroveApp {
    pub fn new(config: Config, timer_tx: TimerSender) -> Self {
        let router =
            Router::new(config.start_screen).with_swipe_threshold(config.swipe_threshold_px);
        let screen = ScreenState::mount(config.start_screen, &config, &timer_tx);
        Self {
            config,
            router,
            screen,
            timer_tx,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn current(&self) -> ScreenId {
        self.router.current()
    }

    /// Everything that happened since the last drain.
    pub fn drain_events(&mut self) -> Vec<GroveEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn handle(&mut self, input: Input) {
        match input {
            Input::Navigate(req) => {
                let t = self.router.navigate(req.target, req.context);
                self.settle(t);
            }
            Input::NavBar(target) => {
                let t = self.router.select_tab(target);
                self.settle(t);
            }
            Input::Key(key) => match self.router.on_key(key) {
                Some(t) => self.settle(t),
                None => {
                    if let NavKey::Arrow(direction) = key {
                        if self.router.is_focused() {
                            self.dispatch(ScreenAction::Move(direction));
                        }
                    }
                }
            },
            Input::GestureStart(point) => self.router.begin_gesture(point),
            Input::GestureEnd(point) => {
                if let Some(t) = self.router.end_gesture(point) {
                    self.settle(t);
                }
            }
            Input::Focus(focused) => {
                self.router.set_focused(focused);
                if !focused {
                    // Pointer left the window: treat any drag as released.
                    self.dispatch(ScreenAction::DragEnd);
                }
            }
            Input::Screen(action) => self.dispatch(action),
        }
    }

    pub fn handle_timer(&mut self, fired: TimerFired) {
        let mut cx = ScreenCx {
            now: Instant::now(),
            context: self.router.context(),
            events: &mut self.events,
        };
        if let Some(req) = self.screen.on_timer(&fired, &mut cx) {
            self.handle(Input::Navigate(req));
        }
    }

    fn dispatch(&mut self, action: ScreenAction) {
        let mut cx = ScreenCx {
            now: Instant::now(),
            context: self.router.context(),
            events: &mut self.events,
        };
        if let Some(req) = self.screen.handle(action, &mut cx) {
            self.handle(Input::Navigate(req));
        }
    }

    fn settle(&mut self, t: Transition) {
        if t.changes_screen() {
            self.screen.teardown(&mut self.events);
            self.screen = ScreenState::mount(t.to, &self.config, &self.timer_tx);
            debug!("Mounted {}", t.to);
        }
        self.events.push(GroveEvent::Navigated(t));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::router::{NavCause, NavigationContext};
    use crate::screen::{Direction, Feeling, SpecialistId};
    use crate::timers::{self, TimerKind, TimerReceiver};
    use crate::types::Rect;

    fn app() -> (GroveApp, TimerReceiver) {
        let (tx, rx) = timers::channel();
        (GroveApp::new(Config::default(), tx), rx)
    }

    fn tree_rect() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 200.0)
    }

    fn bucket_rect() -> Rect {
        Rect::new(300.0, 320.0, 48.0, 48.0)
    }

    fn tree_level(app: &GroveApp) -> u32 {
        match app.screen() {
            ScreenState::Tree(tree) => tree.drag().level().value(),
            other => panic!("expected tree screen, got {:?}", other.id()),
        }
    }

    fn water_once(app: &mut GroveApp) {
        let bucket = bucket_rect();
        app.handle(Input::Screen(ScreenAction::DragStart {
            pointer: bucket.center(),
            tool: bucket,
        }));
        app.handle(Input::Screen(ScreenAction::DragMove {
            pointer: tree_rect().center(),
            target: tree_rect(),
        }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_feeling_opens_immersive_call() {
        let (mut app, mut rx) = app();
        app.handle(Input::Screen(ScreenAction::ChooseFeeling(Feeling::Anxious)));
        assert_eq!(app.current(), ScreenId::Call);
        assert_eq!(app.router().feeling(), Some(Feeling::Anxious));
        assert!(!app.router().should_show_chrome());

        let fired = rx.recv().await.unwrap();
        assert_eq!(fired.kind, TimerKind::BreathingStart);
        app.handle_timer(fired);
        match app.screen() {
            ScreenState::Call(call) => assert!(call.is_breathing()),
            other => panic!("expected call screen, got {:?}", other.id()),
        }

        // Tap anywhere to leave; the feeling stays latched.
        app.handle(Input::Screen(ScreenAction::Tap));
        assert_eq!(app.current(), ScreenId::Main);
        assert_eq!(app.router().feeling(), Some(Feeling::Anxious));
    }

    #[tokio::test(start_paused = true)]
    async fn test_swipe_and_keys_drive_screens() {
        let (mut app, _rx) = app();
        app.handle(Input::GestureStart(Point::new(100.0, 100.0)));
        app.handle(Input::GestureEnd(Point::new(100.0, 200.0)));
        assert_eq!(app.current(), ScreenId::Tree);

        app.handle(Input::Key(NavKey::Arrow(Direction::Left)));
        assert_eq!(app.current(), ScreenId::Forest);

        app.handle(Input::Key(NavKey::Escape));
        assert_eq!(app.current(), ScreenId::Main);

        let causes: Vec<NavCause> = app
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                GroveEvent::Navigated(t) => Some(t.cause),
                _ => None,
            })
            .collect();
        assert_eq!(causes, vec![NavCause::Swipe, NavCause::Key, NavCause::Key]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unclaimed_arrows_reach_the_screen() {
        let (mut app, _rx) = app();
        app.handle(Input::Key(NavKey::Arrow(Direction::Right)));
        assert_eq!(app.current(), ScreenId::Main);
        match app.screen() {
            ScreenState::Main(menu) => assert_eq!(menu.selected(), Feeling::Stressed),
            other => panic!("expected main screen, got {:?}", other.id()),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_watering_through_the_app() {
        let (mut app, mut rx) = app();
        app.handle(Input::NavBar(ScreenId::Tree));
        assert_eq!(tree_level(&app), 65);

        water_once(&mut app);
        assert_eq!(tree_level(&app), 75);
        app.handle(Input::Screen(ScreenAction::DragEnd));

        let fired = rx.recv().await.unwrap();
        assert_eq!(fired.kind, TimerKind::WaterEffect);
        app.handle_timer(fired);
        match app.screen() {
            ScreenState::Tree(tree) => {
                assert!(!tree.drag().effect_active());
                assert!(tree.drag().recently_applied());
            }
            other => panic!("expected tree screen, got {:?}", other.id()),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_tree_cancels_timers_and_resets_state() {
        let (mut app, mut rx) = app();
        app.handle(Input::NavBar(ScreenId::Tree));
        water_once(&mut app);

        app.handle(Input::Key(NavKey::Arrow(Direction::Up)));
        assert_eq!(app.current(), ScreenId::Main);
        let events = app.drain_events();
        assert!(events.contains(&GroveEvent::Drag { active: false }));

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());

        app.handle(Input::NavBar(ScreenId::Tree));
        assert_eq!(tree_level(&app), 65);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_token_after_remount_is_ignored() {
        let (mut app, mut rx) = app();
        app.handle(Input::NavBar(ScreenId::Tree));
        water_once(&mut app);
        let fired = rx.recv().await.unwrap();

        // Remount the tree, then deliver the old screen's token.
        app.handle(Input::NavBar(ScreenId::Main));
        app.handle(Input::NavBar(ScreenId::Tree));
        water_once(&mut app);
        app.handle_timer(fired);
        match app.screen() {
            ScreenState::Tree(tree) => assert!(tree.drag().effect_active()),
            other => panic!("expected tree screen, got {:?}", other.id()),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_focus_loss_releases_drag() {
        let (mut app, _rx) = app();
        app.handle(Input::NavBar(ScreenId::Tree));
        let bucket = bucket_rect();
        app.handle(Input::Screen(ScreenAction::DragStart {
            pointer: bucket.center(),
            tool: bucket,
        }));
        app.handle(Input::Focus(false));
        match app.screen() {
            ScreenState::Tree(tree) => assert!(!tree.drag().is_dragging()),
            other => panic!("expected tree screen, got {:?}", other.id()),
        }
        // Keys are ignored until focus returns.
        app.handle(Input::Key(NavKey::Escape));
        assert_eq!(app.current(), ScreenId::Tree);
        app.handle(Input::Focus(true));
        app.handle(Input::Key(NavKey::Escape));
        assert_eq!(app.current(), ScreenId::Main);
    }

    #[tokio::test(start_paused = true)]
    async fn test_booking_round_trip() {
        let (mut app, mut rx) = app();
        app.handle(Input::Key(NavKey::Arrow(Direction::Up)));
        assert_eq!(app.current(), ScreenId::Specialists);

        app.handle(Input::Screen(ScreenAction::BookSpecialist(SpecialistId(1))));
        assert_eq!(app.current(), ScreenId::Booking);
        assert_eq!(app.router().specialist(), Some(SpecialistId(1)));
        assert!(!app.router().should_show_chrome());

        app.handle(Input::Screen(ScreenAction::SelectTime(0)));
        app.handle(Input::Screen(ScreenAction::SelectSessionType(2)));
        app.handle(Input::Screen(ScreenAction::Activate));
        assert!(app
            .drain_events()
            .iter()
            .any(|e| matches!(e, GroveEvent::BookingConfirmed(s) if s.specialist == Some(SpecialistId(1)))));

        let fired = rx.recv().await.unwrap();
        app.handle_timer(fired);
        assert_eq!(app.current(), ScreenId::Specialists);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_screen_navigation_keeps_state() {
        let (mut app, _rx) = app();
        app.handle(Input::NavBar(ScreenId::Tree));
        water_once(&mut app);
        app.handle(Input::Screen(ScreenAction::DragEnd));
        app.handle(Input::Navigate(NavRequest::with(
            ScreenId::Tree,
            NavigationContext::default(),
        )));
        assert_eq!(tree_level(&app), 75);
    }
}
