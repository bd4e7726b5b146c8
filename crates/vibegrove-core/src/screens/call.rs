//! Guided breathing call. Breathing begins shortly after the screen opens,
//! then alternates inhale/exhale; the guidance text rotates on its own timer.

use std::time::Duration;

use serde::Serialize;

use crate::catalog::CALL_MESSAGES;
use crate::config::Config;
use crate::events::GroveEvent;
use crate::screen::ScreenId;
use crate::timers::{TimerFired, TimerKind, TimerSender, Timers};

use super::{NavRequest, ScreenAction, ScreenCx};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathPhase {
    Inhale,
    Exhale,
}

impl BreathPhase {
    pub fn toggled(self) -> Self {
        match self {
            BreathPhase::Inhale => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        }
    }
}

#[derive(Debug)]
pub struct CallScreen {
    timers: Timers,
    breathing: bool,
    phase: BreathPhase,
    message: usize,
    breath_period: Duration,
}

impl CallScreen {
    pub fn new(tx: TimerSender, config: &Config) -> Self {
        let mut timers = Timers::new(tx);
        timers.once(TimerKind::BreathingStart, config.breathing_start_delay());
        timers.every(TimerKind::MessageRotation, config.message_rotation());
        Self {
            timers,
            breathing: false,
            phase: BreathPhase::Inhale,
            message: 0,
            breath_period: config.breath_phase(),
        }
    }

    pub fn is_breathing(&self) -> bool {
        self.breathing
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    /// (main, sub) guidance text currently shown.
    pub fn message(&self) -> (&'static str, &'static str) {
        CALL_MESSAGES[self.message]
    }

    /// Relative size of the breathing circle.
    pub fn circle_scale(&self) -> f32 {
        match (self.breathing, self.phase) {
            (false, _) => 1.0,
            (true, BreathPhase::Inhale) => 1.1,
            (true, BreathPhase::Exhale) => 0.9,
        }
    }

    pub fn handle(&mut self, action: ScreenAction) -> Option<NavRequest> {
        match action {
            ScreenAction::Tap | ScreenAction::Activate => Some(NavRequest::to(ScreenId::Main)),
            _ => None,
        }
    }

    pub fn on_timer(&mut self, fired: &TimerFired, cx: &mut ScreenCx<'_>) -> Option<NavRequest> {
        if !self.timers.accept(fired) {
            return None;
        }
        match fired.kind {
            TimerKind::BreathingStart => {
                self.breathing = true;
                self.timers.every(TimerKind::BreathPhase, self.breath_period);
            }
            TimerKind::BreathPhase => {
                self.phase = self.phase.toggled();
                cx.events.push(GroveEvent::Breath(self.phase));
            }
            TimerKind::MessageRotation => {
                self.message = (self.message + 1) % CALL_MESSAGES.len();
            }
            _ => {}
        }
        None
    }

    pub fn teardown(&mut self) {
        self.timers.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::NavigationContext;
    use crate::timers;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_breathing_cycle() {
        let (tx, mut rx) = timers::channel();
        let mut call = CallScreen::new(tx, &Config::default());
        let mut events = Vec::new();
        let start = Instant::now();
        assert!(!call.is_breathing());
        assert_eq!(call.circle_scale(), 1.0);

        // 0.5s: breathing starts. 4.5s: exhale. 8s: message rotates. 8.5s: inhale.
        let mut seen = Vec::new();
        while start.elapsed() < Duration::from_millis(8500) {
            let fired = rx.recv().await.unwrap();
            let mut cx = ScreenCx {
                now: Instant::now(),
                context: NavigationContext::default(),
                events: &mut events,
            };
            call.on_timer(&fired, &mut cx);
            seen.push(fired.kind);
        }
        assert_eq!(
            seen,
            vec![
                TimerKind::BreathingStart,
                TimerKind::BreathPhase,
                TimerKind::MessageRotation,
                TimerKind::BreathPhase,
            ]
        );
        assert!(call.is_breathing());
        assert_eq!(call.phase(), BreathPhase::Inhale);
        assert_eq!(call.message(), CALL_MESSAGES[1]);
        assert_eq!(
            events,
            vec![
                GroveEvent::Breath(BreathPhase::Exhale),
                GroveEvent::Breath(BreathPhase::Inhale),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_silences_timers() {
        let (tx, mut rx) = timers::channel();
        let mut call = CallScreen::new(tx, &Config::default());
        call.teardown();
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_tap_returns_home() {
        let (tx, _rx) = timers::channel();
        let mut call = CallScreen::new(tx, &Config::default());
        assert_eq!(
            call.handle(ScreenAction::Tap),
            Some(NavRequest::to(ScreenId::Main))
        );
        assert!(call.handle(ScreenAction::Char('x')).is_none());
    }
}
