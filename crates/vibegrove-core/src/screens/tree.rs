//! Tree screen: the watering bucket and the tree's progress bars.

use std::time::Duration;

use crate::config::Config;
use crate::drag::{Applied, DragController, SaturatingCounter};
use crate::events::GroveEvent;
use crate::timers::{TimerFired, TimerKind, TimerSender, Timers};

use super::{NavRequest, ScreenAction, ScreenCx};

pub const TREE_GROWTH: u32 = 78;
pub const TREE_HEALTH: u32 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthStage {
    Sapling,
    Young,
    Mature,
}

pub fn growth_stage(growth: u32) -> GrowthStage {
    if growth > 70 {
        GrowthStage::Mature
    } else if growth > 40 {
        GrowthStage::Young
    } else {
        GrowthStage::Sapling
    }
}

#[derive(Debug)]
pub struct TreeScreen {
    drag: DragController,
    timers: Timers,
    effect_duration: Duration,
    recently_watered: Duration,
}

impl TreeScreen {
    pub fn new(tx: TimerSender, config: &Config) -> Self {
        let level = SaturatingCounter::new(config.initial_water_level, config.water_max);
        Self {
            drag: DragController::new(level, config.drag_settings()),
            timers: Timers::new(tx),
            effect_duration: config.effect_duration(),
            recently_watered: config.recently_watered(),
        }
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn growth(&self) -> u32 {
        TREE_GROWTH
    }

    pub fn health(&self) -> u32 {
        TREE_HEALTH
    }

    pub fn handle(&mut self, action: ScreenAction, cx: &mut ScreenCx<'_>) -> Option<NavRequest> {
        match action {
            ScreenAction::DragStart { pointer, tool } => {
                if self.drag.begin_drag(pointer, tool) {
                    cx.events.push(GroveEvent::Drag { active: true });
                }
            }
            ScreenAction::DragMove { pointer, target } => {
                if let Some(applied) = self.drag.update_drag(pointer, target, cx.now) {
                    self.watered(applied, cx);
                }
            }
            ScreenAction::DragEnd => {
                if self.drag.end_drag() {
                    cx.events.push(GroveEvent::Drag { active: false });
                }
            }
            _ => {}
        }
        None
    }

    fn watered(&mut self, applied: Applied, cx: &mut ScreenCx<'_>) {
        // A repeat watering restarts both windows.
        self.timers.once(TimerKind::WaterEffect, self.effect_duration);
        self.timers.once(TimerKind::RecentlyWatered, self.recently_watered);
        cx.events.push(GroveEvent::Watered {
            level: applied.level,
            saturated: applied.saturated,
        });
    }

    pub fn on_timer(&mut self, fired: &TimerFired) -> Option<NavRequest> {
        if !self.timers.accept(fired) {
            return None;
        }
        match fired.kind {
            TimerKind::WaterEffect => self.drag.clear_effect(),
            TimerKind::RecentlyWatered => self.drag.clear_recently_applied(),
            _ => {}
        }
        None
    }

    /// Returns whether a drag was cut short.
    pub fn teardown(&mut self) -> bool {
        self.timers.cancel_all();
        self.drag.end_drag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::NavigationContext;
    use crate::timers;
    use crate::types::{Point, Rect};
    use tokio::time::Instant;

    fn tree_rect() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 200.0)
    }

    fn bucket_rect() -> Rect {
        Rect::new(300.0, 320.0, 48.0, 48.0)
    }

    fn act(tree: &mut TreeScreen, action: ScreenAction, events: &mut Vec<GroveEvent>) {
        let mut cx = ScreenCx {
            now: Instant::now(),
            context: NavigationContext::default(),
            events,
        };
        tree.handle(action, &mut cx);
    }

    #[test]
    fn test_growth_stage() {
        assert_eq!(growth_stage(TREE_GROWTH), GrowthStage::Mature);
        assert_eq!(growth_stage(50), GrowthStage::Young);
        assert_eq!(growth_stage(40), GrowthStage::Sapling);
    }

    #[tokio::test(start_paused = true)]
    async fn test_watering_flags_clear_on_their_own_timers() {
        let (tx, mut rx) = timers::channel();
        let mut tree = TreeScreen::new(tx, &Config::default());
        let mut events = Vec::new();
        let start = Instant::now();

        let bucket = bucket_rect();
        act(&mut tree, ScreenAction::DragStart { pointer: bucket.center(), tool: bucket }, &mut events);
        act(
            &mut tree,
            ScreenAction::DragMove { pointer: tree_rect().center(), target: tree_rect() },
            &mut events,
        );
        act(&mut tree, ScreenAction::DragEnd, &mut events);

        assert_eq!(tree.drag().level().value(), 75);
        assert!(tree.drag().effect_active());
        assert_eq!(
            events,
            vec![
                GroveEvent::Drag { active: true },
                GroveEvent::Watered { level: 75, saturated: false },
                GroveEvent::Drag { active: false },
            ]
        );

        let fired = rx.recv().await.unwrap();
        assert_eq!(fired.kind, TimerKind::WaterEffect);
        assert!(start.elapsed() >= Duration::from_millis(1500));
        tree.on_timer(&fired);
        assert!(!tree.drag().effect_active());
        assert!(tree.drag().recently_applied());

        let fired = rx.recv().await.unwrap();
        assert_eq!(fired.kind, TimerKind::RecentlyWatered);
        assert!(start.elapsed() >= Duration::from_secs(5));
        tree.on_timer(&fired);
        assert!(!tree.drag().recently_applied());
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_timers_and_drag() {
        let (tx, mut rx) = timers::channel();
        let mut tree = TreeScreen::new(tx, &Config::default());
        let mut events = Vec::new();
        let bucket = bucket_rect();
        act(&mut tree, ScreenAction::DragStart { pointer: bucket.center(), tool: bucket }, &mut events);
        act(
            &mut tree,
            ScreenAction::DragMove { pointer: Point::new(200.0, 200.0), target: tree_rect() },
            &mut events,
        );

        assert!(tree.teardown());
        assert!(!tree.drag().is_dragging());
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_full_tree_refuses_the_bucket() {
        let (tx, _rx) = timers::channel();
        let config = Config {
            initial_water_level: 100,
            ..Config::default()
        };
        let mut tree = TreeScreen::new(tx, &config);
        let mut events = Vec::new();
        let bucket = bucket_rect();
        act(&mut tree, ScreenAction::DragStart { pointer: bucket.center(), tool: bucket }, &mut events);
        assert!(!tree.drag().is_dragging());
        assert!(events.is_empty());
    }
}
