//! Screen router: the current screen, its latched navigation context, and
//! the translation of swipes and arrow keys into transitions.

use serde::Serialize;
use tracing::{debug, info};

use crate::gesture::{self, GesturePoint};
use crate::screen::{Feeling, NavKey, ScreenId, SpecialistId};

/// Optional payload carried by a navigation request.
///
/// Fields latch independently: a request that leaves a field `None` keeps
/// whatever value the router already holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavigationContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feeling: Option<Feeling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialist: Option<SpecialistId>,
}

impl NavigationContext {
    pub fn feeling(feeling: Feeling) -> Self {
        Self {
            feeling: Some(feeling),
            specialist: None,
        }
    }

    pub fn specialist(id: SpecialistId) -> Self {
        Self {
            feeling: None,
            specialist: Some(id),
        }
    }

    fn latch(&mut self, incoming: NavigationContext) {
        if incoming.feeling.is_some() {
            self.feeling = incoming.feeling;
        }
        if incoming.specialist.is_some() {
            self.specialist = incoming.specialist;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavCause {
    /// A screen asked for it.
    Request,
    NavBar,
    Swipe,
    Key,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: ScreenId,
    pub to: ScreenId,
    pub cause: NavCause,
}

impl Transition {
    pub fn changes_screen(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    current: ScreenId,
    context: NavigationContext,
    pending_gesture: Option<GesturePoint>,
    focused: bool,
    swipe_threshold: Option<f32>,
}

impl Router {
    pub fn new(start: ScreenId) -> Self {
        Self {
            current: start,
            context: NavigationContext::default(),
            pending_gesture: None,
            focused: true,
            swipe_threshold: None,
        }
    }

    /// Override the per-rule swipe distance for every screen.
    pub fn with_swipe_threshold(mut self, px: f32) -> Self {
        self.swipe_threshold = Some(px);
        self
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    pub fn context(&self) -> NavigationContext {
        self.context
    }

    pub fn feeling(&self) -> Option<Feeling> {
        self.context.feeling
    }

    pub fn specialist(&self) -> Option<SpecialistId> {
        self.context.specialist
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn has_pending_gesture(&self) -> bool {
        self.pending_gesture.is_some()
    }

    /// Bottom navigation is hidden on the immersive screens.
    pub fn should_show_chrome(&self) -> bool {
        !self.current.is_immersive()
    }

    /// Unconditionally switch to `target`, latching any supplied context.
    pub fn navigate(&mut self, target: ScreenId, context: NavigationContext) -> Transition {
        self.go(target, context, NavCause::Request)
    }

    /// A tap on the bottom navigation bar.
    pub fn select_tab(&mut self, target: ScreenId) -> Transition {
        self.go(target, NavigationContext::default(), NavCause::NavBar)
    }

    /// Record the start of a swipe candidate, replacing any stale one.
    pub fn begin_gesture(&mut self, point: GesturePoint) {
        if self.pending_gesture.replace(point).is_some() {
            debug!("Discarding unresolved gesture start");
        }
    }

    /// Resolve the pending swipe against the current screen's rules.
    /// The pending start point is consumed whether or not a transition fires.
    pub fn end_gesture(&mut self, point: GesturePoint) -> Option<Transition> {
        let start = self.pending_gesture.take()?;
        let target = gesture::resolve_swipe(self.current, start, point, self.swipe_threshold)?;
        debug!(
            "Swipe on {} ({:.0}, {:.0}) -> {}",
            self.current,
            point.x - start.x,
            point.y - start.y,
            target
        );
        Some(self.go(target, NavigationContext::default(), NavCause::Swipe))
    }

    /// Keyboard equivalent of swiping, plus Escape back to home.
    /// Ignored while the window is unfocused.
    pub fn on_key(&mut self, key: NavKey) -> Option<Transition> {
        if !self.focused {
            return None;
        }
        let target = match key {
            NavKey::Arrow(direction) => gesture::key_target(self.current, direction)?,
            NavKey::Escape if self.current == ScreenId::Main => return None,
            NavKey::Escape => ScreenId::Main,
        };
        Some(self.go(target, NavigationContext::default(), NavCause::Key))
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.pending_gesture = None;
        }
    }

    fn go(&mut self, target: ScreenId, context: NavigationContext, cause: NavCause) -> Transition {
        let from = self.current;
        self.current = target;
        self.context.latch(context);
        if from != target {
            // A press that began on the old screen never resolves on the new one.
            self.pending_gesture = None;
            info!("Navigate {} -> {} ({:?})", from, target, cause);
        }
        Transition {
            from,
            to: target,
            cause,
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(ScreenId::Main)
    }
}
