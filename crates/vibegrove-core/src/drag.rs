//! Drag interaction: carrying the watering bucket over the tree.
//!
//! The controller owns the water level and at most one [`DragSession`].
//! Every move re-checks whether the bucket's centre sits inside the tree's
//! bounding box grown by a tolerance margin, and waters again while it does,
//! at most once per `rewater_interval`. Visual flags are set here; clearing
//! them is the owner's job once its timers fire.

use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::types::{Point, Rect, Size};

pub const DROP_TOLERANCE: f32 = 20.0;
pub const WATER_STEP: u32 = 10;
pub const WATER_MAX: u32 = 100;
pub const REWATER_INTERVAL: Duration = Duration::from_millis(100);

/// Bounded counter that increments toward `max` and never past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SaturatingCounter {
    value: u32,
    max: u32,
}

impl SaturatingCounter {
    pub fn new(value: u32, max: u32) -> Self {
        Self {
            value: value.min(max),
            max,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_saturated(&self) -> bool {
        self.value >= self.max
    }

    /// Returns false (and changes nothing) once saturated.
    pub fn increment(&mut self, step: u32) -> bool {
        if self.is_saturated() {
            return false;
        }
        self.value = self.value.saturating_add(step).min(self.max);
        true
    }

    /// Fill level in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        if self.max == 0 {
            return 1.0;
        }
        self.value as f64 / self.max as f64
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DragSettings {
    pub tolerance: f32,
    pub step: u32,
    pub rewater_interval: Duration,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            tolerance: DROP_TOLERANCE,
            step: WATER_STEP,
            rewater_interval: REWATER_INTERVAL,
        }
    }
}

/// One in-progress drag of the bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position relative to the bucket centre at press-down.
    pub grab_offset: Point,
    /// Live bucket centre.
    pub center: Point,
    pub tool_size: Size,
    last_applied: Option<Instant>,
}

impl DragSession {
    pub fn tool_rect(&self) -> Rect {
        Rect::from_center(self.center, self.tool_size)
    }
}

/// Result of a watering that actually raised the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Applied {
    pub level: u32,
    pub saturated: bool,
}

#[derive(Debug, Clone)]
pub struct DragController {
    level: SaturatingCounter,
    session: Option<DragSession>,
    effect_active: bool,
    recently_applied: bool,
    settings: DragSettings,
}

impl DragController {
    pub fn new(level: SaturatingCounter, settings: DragSettings) -> Self {
        Self {
            level,
            session: None,
            effect_active: false,
            recently_applied: false,
            settings,
        }
    }

    pub fn level(&self) -> SaturatingCounter {
        self.level
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Short-lived watering animation.
    pub fn effect_active(&self) -> bool {
        self.effect_active
    }

    /// Longer-lived "just watered" tint.
    pub fn recently_applied(&self) -> bool {
        self.recently_applied
    }

    /// The bucket can no longer be picked up once the tree is full.
    pub fn can_drag(&self) -> bool {
        !self.level.is_saturated()
    }

    pub fn tool_rect(&self) -> Option<Rect> {
        self.session.as_ref().map(DragSession::tool_rect)
    }

    /// Press-down on the bucket. No-op while a drag is already active or
    /// the level is saturated.
    pub fn begin_drag(&mut self, pointer: Point, tool: Rect) -> bool {
        if self.session.is_some() {
            warn!("begin_drag while a drag is already active");
            return false;
        }
        if !self.can_drag() {
            debug!("Bucket locked, water level full");
            return false;
        }
        let center = tool.center();
        self.session = Some(DragSession {
            grab_offset: pointer - center,
            center,
            tool_size: tool.size(),
            last_applied: None,
        });
        debug!("Drag started at ({:.0}, {:.0})", pointer.x, pointer.y);
        true
    }

    /// Pointer moved. Returns the watering this move triggered, if any.
    pub fn update_drag(&mut self, pointer: Point, target: Rect, now: Instant) -> Option<Applied> {
        let tolerance = self.settings.tolerance;
        let interval = self.settings.rewater_interval;

        let session = self.session.as_mut()?;
        session.center = pointer - session.grab_offset;
        if !target.expand(tolerance).contains(session.center) {
            return None;
        }
        let throttled = session
            .last_applied
            .is_some_and(|last| now.saturating_duration_since(last) < interval);
        if throttled {
            return None;
        }

        let applied = self.apply()?;
        if let Some(session) = self.session.as_mut() {
            session.last_applied = Some(now);
        }
        Some(applied)
    }

    /// Release. The bucket snaps back to its rest position on the next draw.
    pub fn end_drag(&mut self) -> bool {
        let ended = self.session.take().is_some();
        if ended {
            debug!("Drag ended");
        }
        ended
    }

    /// Whether the dragged bucket currently hovers over `target`.
    pub fn is_hovering(&self, target: Rect) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| target.expand(self.settings.tolerance).contains(s.center))
    }

    /// Water once. Returns `None` when already saturated.
    pub fn apply(&mut self) -> Option<Applied> {
        if !self.level.increment(self.settings.step) {
            return None;
        }
        self.effect_active = true;
        self.recently_applied = true;
        info!("Watered tree, level {}", self.level.value());
        Some(Applied {
            level: self.level.value(),
            saturated: self.level.is_saturated(),
        })
    }

    pub fn clear_effect(&mut self) {
        self.effect_active = false;
    }

    pub fn clear_recently_applied(&mut self) {
        self.recently_applied = false;
    }
}
