//! Bottom navigation bar.

use ratatui::prelude::*;
use ratatui::widgets::Tabs;

use vibegrove_core::screen::NAV_ITEMS;

use super::hits::{HitMap, HitTarget};
use crate::app::App;

const DIVIDER: &str = "|";

pub fn draw(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    let titles: Vec<String> = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| format!(" F{} {} ", i + 1, item.label))
        .collect();

    let current = app.core.current();
    let selected = NAV_ITEMS
        .iter()
        .position(|item| item.screen == current)
        .unwrap_or(0);

    // Tabs draws titles left to right with no padding, one divider between.
    let mut x = area.x;
    for (title, item) in titles.iter().zip(NAV_ITEMS) {
        let width = title.len() as u16;
        hits.push(
            Rect::new(x, area.y, width.min(area.right().saturating_sub(x)), 1),
            HitTarget::NavTab(item.screen),
        );
        x = x.saturating_add(width + DIVIDER.len() as u16);
    }

    let tabs = Tabs::new(titles)
        .select(selected)
        .padding("", "")
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Green).bold())
        .divider(DIVIDER);

    frame.render_widget(tabs, area);
}
