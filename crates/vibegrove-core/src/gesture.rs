//! Swipe rule table: which screen a directional gesture or arrow key leads to.
//!
//! Each screen owns an ordered list of [`SwipeRule`]s. When a swipe resolves,
//! the first rule whose axis condition holds decides the outcome; its target
//! for the delta's sign may be `None`, which means "no transition" and stops
//! the search. Screens with no rules are gesture-inert. The same table drives
//! arrow keys: a key picks the first rule on its axis and the signed target.

use serde::{Deserialize, Serialize};

use crate::screen::{Direction, ScreenId};
use crate::types::Point;

/// A swipe start or end sample, in pixels.
pub type GesturePoint = Point;

/// Minimum travel along the rule's axis before a swipe counts.
pub const MIN_SWIPE_DISTANCE: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Signed travel along this axis.
    pub fn along(self, delta: Point) -> f32 {
        match self {
            Axis::Horizontal => delta.x,
            Axis::Vertical => delta.y,
        }
    }

    /// Signed travel across this axis.
    pub fn across(self, delta: Point) -> f32 {
        match self {
            Axis::Horizontal => delta.y,
            Axis::Vertical => delta.x,
        }
    }
}

impl Direction {
    /// Axis plus whether the direction points toward negative coordinates.
    pub fn axis_sign(self) -> (Axis, bool) {
        match self {
            Direction::Up => (Axis::Vertical, true),
            Direction::Down => (Axis::Vertical, false),
            Direction::Left => (Axis::Horizontal, true),
            Direction::Right => (Axis::Horizontal, false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeRule {
    pub axis: Axis,
    pub min_delta: f32,
    /// Travel along `axis` must strictly exceed travel across it.
    pub require_dominant: bool,
    /// Target for up / left.
    pub negative: Option<ScreenId>,
    /// Target for down / right.
    pub positive: Option<ScreenId>,
}

impl SwipeRule {
    fn matches(&self, delta: Point, min_delta: f32) -> bool {
        let along = self.axis.along(delta).abs();
        let across = self.axis.across(delta).abs();
        (!self.require_dominant || along > across) && along > min_delta
    }

    fn target_for(&self, along: f32) -> Option<ScreenId> {
        if along < 0.0 {
            self.negative
        } else if along > 0.0 {
            self.positive
        } else {
            None
        }
    }
}

const MAIN_RULES: &[SwipeRule] = &[SwipeRule {
    axis: Axis::Vertical,
    min_delta: MIN_SWIPE_DISTANCE,
    require_dominant: true,
    negative: Some(ScreenId::Specialists),
    positive: Some(ScreenId::Tree),
}];

const TREE_RULES: &[SwipeRule] = &[
    SwipeRule {
        axis: Axis::Horizontal,
        min_delta: MIN_SWIPE_DISTANCE,
        require_dominant: true,
        negative: Some(ScreenId::Forest),
        positive: Some(ScreenId::Profile),
    },
    SwipeRule {
        axis: Axis::Vertical,
        min_delta: MIN_SWIPE_DISTANCE,
        require_dominant: false,
        negative: Some(ScreenId::Main),
        positive: None,
    },
];

pub fn swipe_rules(screen: ScreenId) -> &'static [SwipeRule] {
    match screen {
        ScreenId::Main => MAIN_RULES,
        ScreenId::Tree => TREE_RULES,
        // The forest pans internally; the rest have no directional neighbours.
        ScreenId::Call
        | ScreenId::Forest
        | ScreenId::Specialists
        | ScreenId::Profile
        | ScreenId::Booking => &[],
    }
}

/// Resolve a completed swipe. `min_delta` overrides every rule's threshold.
pub fn resolve_swipe(
    screen: ScreenId,
    start: GesturePoint,
    end: GesturePoint,
    min_delta: Option<f32>,
) -> Option<ScreenId> {
    let delta = end - start;
    let rule = swipe_rules(screen)
        .iter()
        .find(|rule| rule.matches(delta, min_delta.unwrap_or(rule.min_delta)))?;
    rule.target_for(rule.axis.along(delta))
}

/// Arrow-key neighbour of `screen` in `direction`.
pub fn key_target(screen: ScreenId, direction: Direction) -> Option<ScreenId> {
    let (axis, negative) = direction.axis_sign();
    let rule = swipe_rules(screen).iter().find(|rule| rule.axis == axis)?;
    if negative {
        rule.negative
    } else {
        rule.positive
    }
}
