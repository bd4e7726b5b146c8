//! TUI layout compositing: the active screen plus nav bar and status line.

mod booking;
mod call;
mod forest;
pub mod hits;
mod main_menu;
mod nav;
mod profile;
mod specialists;
mod status;
mod tree;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use vibegrove_core::screens::ScreenState;

use crate::app::App;
use hits::HitMap;

/// Render the full TUI layout and return the clickable regions it drew.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let area = frame.area();
    let mut hits = HitMap::default();

    // ┌──────────────────────────────────┐
    // │ Screen                           │
    // │                                  │
    // ├──────────────────────────────────┤
    // │ Nav bar (hidden on call/booking) │
    // ├──────────────────────────────────┤
    // │ Status line                      │
    // └──────────────────────────────────┘

    let chrome = app.core.router().should_show_chrome();
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),                                // screen
            Constraint::Length(if chrome { 1 } else { 0 }),    // nav
            Constraint::Length(1),                              // status
        ])
        .split(area);

    let block = Block::default()
        .title(format!(" {} ", app.core.current().title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let content = block.inner(main_layout[0]);
    frame.render_widget(Clear, main_layout[0]);
    frame.render_widget(block, main_layout[0]);

    match app.core.screen() {
        ScreenState::Main(menu) => main_menu::draw(frame, app, menu, content, &mut hits),
        ScreenState::Call(call) => call::draw(frame, app, call, content),
        ScreenState::Tree(tree) => tree::draw(frame, app, tree, content, &mut hits),
        ScreenState::Forest(forest) => forest::draw(frame, forest, content, &mut hits),
        ScreenState::Specialists(list) => specialists::draw(frame, list, content, &mut hits),
        ScreenState::Profile(profile) => profile::draw(frame, app, profile, content, &mut hits),
        ScreenState::Booking(booking) => booking::draw(frame, app, booking, content, &mut hits),
    }

    if chrome {
        nav::draw(frame, app, main_layout[1], &mut hits);
    }
    status::draw(frame, app, main_layout[2]);

    hits
}

/// Bordered, optionally highlighted button. Returns the area it occupied.
fn button(frame: &mut Frame, label: &str, area: Rect, selected: bool, enabled: bool) -> Rect {
    let color = match (enabled, selected) {
        (false, _) => Color::DarkGray,
        (true, true) => Color::Cyan,
        (true, false) => Color::Gray,
    };
    let mut style = Style::default().fg(color);
    if selected {
        style = style.bold();
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let text = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(text, area);
    area
}
