//! Community forest: other people's trees, some carrying a short message,
//! plus a box for posting your own.

use rand::Rng;
use tracing::info;

use crate::catalog::{tree_message, PRESET_REPLIES};
use crate::events::GroveEvent;
use crate::screen::Direction;

use super::{NavRequest, ScreenAction, ScreenCx};

pub const TREE_COUNT: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommunityTree {
    pub id: u32,
    /// Percent of board width.
    pub x: f32,
    /// Percent of board height.
    pub y: f32,
    pub has_message: bool,
    pub growth: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Canopy {
    Bright,
    Medium,
    Deep,
}

pub fn canopy(growth: u32) -> Canopy {
    if growth > 85 {
        Canopy::Bright
    } else if growth > 75 {
        Canopy::Medium
    } else {
        Canopy::Deep
    }
}

/// Scatter the board, keeping clear of the edges. The first four trees are
/// fixed so there is always something to read.
pub fn generate_trees<R: Rng>(rng: &mut R) -> Vec<CommunityTree> {
    let mut trees: Vec<CommunityTree> = (1..=TREE_COUNT as u32)
        .map(|id| CommunityTree {
            id,
            x: rng.gen_range(7.5..92.5),
            y: rng.gen_range(7.5..92.5),
            has_message: rng.gen_bool(0.35),
            growth: rng.gen_range(60..100),
        })
        .collect();

    let fixed = [(25.0, 35.0, 85), (50.0, 55.0, 75), (70.0, 30.0, 90), (35.0, 65.0, 80)];
    for (tree, (x, y, growth)) in trees.iter_mut().zip(fixed) {
        tree.x = x;
        tree.y = y;
        tree.growth = growth;
        tree.has_message = true;
    }
    trees
}

#[derive(Debug)]
pub struct ForestScreen {
    trees: Vec<CommunityTree>,
    selected: Option<u32>,
    input: String,
}

impl ForestScreen {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_trees(generate_trees(rng))
    }

    pub fn with_trees(trees: Vec<CommunityTree>) -> Self {
        Self {
            trees,
            selected: None,
            input: String::new(),
        }
    }

    pub fn trees(&self) -> &[CommunityTree] {
        &self.trees
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The open message bubble, if the selected tree has one.
    pub fn selected_message(&self) -> Option<(&CommunityTree, &'static str)> {
        let id = self.selected?;
        let tree = self.trees.iter().find(|t| t.id == id && t.has_message)?;
        Some((tree, tree_message(tree.id)))
    }

    pub fn toggle(&mut self, id: u32) {
        if !self.trees.iter().any(|t| t.id == id) {
            return;
        }
        self.selected = if self.selected == Some(id) { None } else { Some(id) };
    }

    pub fn handle(&mut self, action: ScreenAction, cx: &mut ScreenCx<'_>) -> Option<NavRequest> {
        match action {
            ScreenAction::ToggleTree(id) => self.toggle(id),
            ScreenAction::PresetReply(idx) => {
                if let Some(reply) = PRESET_REPLIES.get(idx) {
                    self.input = reply.to_string();
                }
            }
            ScreenAction::Move(Direction::Right | Direction::Down) => self.cycle(true),
            ScreenAction::Move(Direction::Left | Direction::Up) => self.cycle(false),
            ScreenAction::Char(c) => self.input.push(c),
            ScreenAction::Backspace => {
                self.input.pop();
            }
            ScreenAction::Activate => {
                self.send(cx);
            }
            _ => {}
        }
        None
    }

    /// Post the input box. Blank input is ignored.
    pub fn send(&mut self, cx: &mut ScreenCx<'_>) -> bool {
        let text = self.input.trim();
        if text.is_empty() {
            return false;
        }
        info!("Forest message: {}", text);
        cx.events.push(GroveEvent::MessageSent {
            text: text.to_string(),
        });
        self.input.clear();
        true
    }

    /// Step the selection through the trees that carry a message.
    fn cycle(&mut self, forward: bool) {
        let ids: Vec<u32> = self
            .trees
            .iter()
            .filter(|t| t.has_message)
            .map(|t| t.id)
            .collect();
        if ids.is_empty() {
            return;
        }
        let pos = self.selected.and_then(|id| ids.iter().position(|&i| i == id));
        let next = match (pos, forward) {
            (None, true) => 0,
            (None, false) => ids.len() - 1,
            (Some(p), true) => (p + 1) % ids.len(),
            (Some(p), false) => (p + ids.len() - 1) % ids.len(),
        };
        self.selected = Some(ids[next]);
    }
}
