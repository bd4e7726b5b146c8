//! App state, input handling.
//!
//! The terminal speaks in cells; the core speaks in pixels. Every pointer
//! position is converted with the configured cell size before it reaches
//! the router or the drag controller.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect as CellRect;
use tracing::{debug, info};

use vibegrove_core::app::{GroveApp, Input};
use vibegrove_core::events::GroveEvent;
use vibegrove_core::screen::{Direction, NavKey, ScreenId, NAV_ITEMS};
use vibegrove_core::screens::{ScreenAction, ScreenState};
use vibegrove_core::types::{Point, Rect, Size};

use crate::ui::hits::{HitMap, HitTarget};

/// What the left mouse button is doing.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pointer {
    Idle,
    Gesture { start: Point, screen: ScreenId },
    Drag,
}

pub struct App {
    pub core: GroveApp,
    pub should_quit: bool,
    pointer: Pointer,
    cell: Size,
}

impl App {
    pub fn new(core: GroveApp) -> Self {
        let cell = Size::new(core.config().cell_width_px, core.config().cell_height_px);
        App {
            core,
            should_quit: false,
            pointer: Pointer::Idle,
            cell,
        }
    }

    /// Centre of a terminal cell, in pixels.
    pub fn to_px(&self, column: u16, row: u16) -> Point {
        Point::new(
            (column as f32 + 0.5) * self.cell.width,
            (row as f32 + 0.5) * self.cell.height,
        )
    }

    pub fn rect_to_px(&self, area: CellRect) -> Rect {
        Rect::new(
            area.x as f32 * self.cell.width,
            area.y as f32 * self.cell.height,
            area.width as f32 * self.cell.width,
            area.height as f32 * self.cell.height,
        )
    }

    /// Nearest cell rectangle for a pixel rectangle, clamped at the origin.
    pub fn rect_to_cells(&self, rect: Rect) -> CellRect {
        let x = (rect.left / self.cell.width).round().max(0.0) as u16;
        let y = (rect.top / self.cell.height).round().max(0.0) as u16;
        let width = (rect.width / self.cell.width).round().max(1.0) as u16;
        let height = (rect.height / self.cell.height).round().max(1.0) as u16;
        CellRect::new(x, y, width, height)
    }

    pub fn is_dragging(&self) -> bool {
        match self.core.screen() {
            ScreenState::Tree(tree) => tree.drag().is_dragging(),
            _ => false,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let chrome = self.core.router().should_show_chrome();
        if let Some(input) = key_input(key.code, chrome) {
            self.core.handle(input);
        }
    }

    pub fn on_focus(&mut self, focused: bool) {
        if !focused {
            self.pointer = Pointer::Idle;
        }
        self.core.handle(Input::Focus(focused));
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent, hits: &HitMap) {
        let p = self.to_px(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let on_bucket = self.core.current() == ScreenId::Tree
                    && hits.on_bucket(mouse.column, mouse.row);
                if let Some(bucket) = hits.bucket.filter(|_| on_bucket) {
                    let tool = self.rect_to_px(bucket);
                    self.core
                        .handle(Input::Screen(ScreenAction::DragStart { pointer: p, tool }));
                    // A full tree refuses the bucket; fall through to a gesture.
                    if self.is_dragging() {
                        self.pointer = Pointer::Drag;
                        return;
                    }
                }
                self.core.handle(Input::GestureStart(p));
                self.pointer = Pointer::Gesture {
                    start: p,
                    screen: self.core.current(),
                };
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.pointer == Pointer::Drag {
                    if let Some(canopy) = hits.canopy {
                        let target = self.rect_to_px(canopy);
                        self.core
                            .handle(Input::Screen(ScreenAction::DragMove { pointer: p, target }));
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                match std::mem::replace(&mut self.pointer, Pointer::Idle) {
                    Pointer::Drag => self.core.handle(Input::Screen(ScreenAction::DragEnd)),
                    Pointer::Gesture { start, screen } => {
                        self.core.handle(Input::GestureEnd(p));
                        // A release that went nowhere is a click.
                        let travel = p - start;
                        let threshold = self.core.config().swipe_threshold_px;
                        if self.core.current() == screen
                            && travel.x.abs() <= threshold
                            && travel.y.abs() <= threshold
                        {
                            self.click(hits.target_at(mouse.column, mouse.row));
                        }
                    }
                    Pointer::Idle => {}
                }
            }
            _ => {}
        }
    }

    fn click(&mut self, target: Option<HitTarget>) {
        let Some(target) = target else {
            self.core.handle(Input::Screen(ScreenAction::Tap));
            return;
        };
        debug!("Click {:?}", target);
        let input = match target {
            HitTarget::NavTab(screen) => Input::NavBar(screen),
            HitTarget::Feeling(feeling) => Input::Screen(ScreenAction::ChooseFeeling(feeling)),
            HitTarget::CommunityTree(id) => Input::Screen(ScreenAction::ToggleTree(id)),
            HitTarget::PresetReply(idx) => Input::Screen(ScreenAction::PresetReply(idx)),
            HitTarget::Send | HitTarget::Confirm => Input::Screen(ScreenAction::Activate),
            HitTarget::BookSpecialist(id) => Input::Screen(ScreenAction::BookSpecialist(id)),
            HitTarget::Date(idx) => Input::Screen(ScreenAction::SelectDate(idx)),
            HitTarget::Time(idx) => Input::Screen(ScreenAction::SelectTime(idx)),
            HitTarget::SessionType(idx) => Input::Screen(ScreenAction::SelectSessionType(idx)),
            HitTarget::Back => Input::Screen(ScreenAction::Back),
            HitTarget::Setting(setting) => Input::Screen(ScreenAction::ToggleSetting(setting)),
        };
        self.core.handle(input);
    }

    /// Drain core events into the log. Returns how many there were.
    pub fn log_events(&mut self) -> usize {
        let events = self.core.drain_events();
        for event in &events {
            match event {
                GroveEvent::Watered { .. }
                | GroveEvent::MessageSent { .. }
                | GroveEvent::BookingConfirmed(_) => info!("{}", event.to_json()),
                _ => debug!("{}", event.to_json()),
            }
        }
        events.len()
    }
}

/// Map a key to core input. Function keys pick nav bar tabs while the bar
/// is visible.
fn key_input(code: KeyCode, chrome: bool) -> Option<Input> {
    let input = match code {
        KeyCode::Esc => Input::Key(NavKey::Escape),
        KeyCode::Up => Input::Key(NavKey::Arrow(Direction::Up)),
        KeyCode::Down => Input::Key(NavKey::Arrow(Direction::Down)),
        KeyCode::Left => Input::Key(NavKey::Arrow(Direction::Left)),
        KeyCode::Right => Input::Key(NavKey::Arrow(Direction::Right)),
        KeyCode::Enter => Input::Screen(ScreenAction::Activate),
        KeyCode::Tab => Input::Screen(ScreenAction::NextField),
        KeyCode::Backspace => Input::Screen(ScreenAction::Backspace),
        KeyCode::Char(c) => Input::Screen(ScreenAction::Char(c)),
        KeyCode::F(n) if chrome => {
            let item = NAV_ITEMS.get((n as usize).checked_sub(1)?)?;
            Input::NavBar(item.screen)
        }
        _ => return None,
    };
    Some(input)
}
