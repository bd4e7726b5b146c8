//! Home screen: greeting, feeling grid, instant help.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use vibegrove_core::screen::Feeling;
use vibegrove_core::screens::main_menu::MainMenu;

use super::button;
use super::hits::{HitMap, HitTarget};
use crate::app::App;

const COLUMNS: usize = 3;

pub fn draw(frame: &mut Frame, app: &App, menu: &MainMenu, area: Rect, hits: &mut HitMap) {
    let rows = Feeling::SELECTABLE.len().div_ceil(COLUMNS);
    let mut constraints = vec![
        Constraint::Length(1), // swipe hint
        Constraint::Length(3), // greeting
    ];
    constraints.extend(std::iter::repeat(Constraint::Length(3)).take(rows));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(3)); // instant help
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // swipe hint

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let hint = Style::default().fg(Color::DarkGray);
    frame.render_widget(
        Paragraph::new("↑ swipe up for specialists").style(hint).alignment(Alignment::Center),
        layout[0],
    );

    let greeting = vec![
        Line::styled(
            format!("Hello, {}", app.core.config().user_name),
            Style::default().fg(Color::Green).bold(),
        ),
        Line::raw("How are you feeling today?"),
    ];
    frame.render_widget(Paragraph::new(greeting).alignment(Alignment::Center), layout[1]);

    for (row, feelings) in Feeling::SELECTABLE.chunks(COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(layout[2 + row]);
        for (cell, feeling) in cells.iter().zip(feelings) {
            let selected = menu.selected() == *feeling;
            let area = button(frame, feeling.label(), *cell, selected, true);
            hits.push(area, HitTarget::Feeling(*feeling));
        }
    }

    let help_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(layout[3 + rows]);
    let selected = menu.selected() == Feeling::Emergency;
    let area = button(frame, Feeling::Emergency.label(), help_row[1], selected, true);
    hits.push(area, HitTarget::Feeling(Feeling::Emergency));

    let last = layout.len() - 1;
    frame.render_widget(
        Paragraph::new("↓ swipe down to visit your tree").style(hint).alignment(Alignment::Center),
        layout[last],
    );
}
