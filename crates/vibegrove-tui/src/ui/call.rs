//! Call screen: breathing circle and rotating guidance.

use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::Paragraph;

use vibegrove_core::screen::support_title;
use vibegrove_core::screens::call::{BreathPhase, CallScreen};

use crate::app::App;

/// Circle radius at scale 1.0, in canvas units.
const BASE_RADIUS: f64 = 30.0;

pub fn draw(frame: &mut Frame, app: &App, call: &CallScreen, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Min(8),    // circle
            Constraint::Length(4), // message
            Constraint::Length(1), // hint
        ])
        .split(area);

    let title = support_title(app.core.router().feeling());
    frame.render_widget(
        Paragraph::new(Line::styled(title, Style::default().fg(Color::Magenta).bold()))
            .alignment(Alignment::Center),
        layout[0],
    );

    let color = match (call.is_breathing(), call.phase()) {
        (false, _) => Color::DarkGray,
        (true, BreathPhase::Inhale) => Color::Cyan,
        (true, BreathPhase::Exhale) => Color::Blue,
    };
    let radius = BASE_RADIUS * call.circle_scale() as f64;
    let circle = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-50.0, 50.0])
        .y_bounds([-50.0, 50.0])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius,
                color,
            });
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: radius * 0.6,
                color,
            });
        });
    frame.render_widget(circle, layout[1]);

    let (main, sub) = call.message();
    let mut lines: Vec<Line> = main
        .lines()
        .map(|l| Line::styled(l, Style::default().fg(Color::White).bold()))
        .collect();
    lines.extend(
        sub.lines()
            .map(|l| Line::styled(l, Style::default().fg(Color::Gray).italic())),
    );
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), layout[2]);

    frame.render_widget(
        Paragraph::new("Tap anywhere to return")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        layout[3],
    );
}
