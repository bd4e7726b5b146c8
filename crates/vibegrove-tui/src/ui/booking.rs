//! Session booking form and its confirmation summary.

use chrono::Datelike;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use vibegrove_core::catalog::{self, SESSION_TYPES, TIME_SLOTS};
use vibegrove_core::events::BookingSummary;
use vibegrove_core::screens::booking::{BookingField, BookingScreen};

use super::button;
use super::hits::{HitMap, HitTarget};
use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, booking: &BookingScreen, area: Rect, hits: &mut HitMap) {
    let specialist = app
        .core
        .router()
        .specialist()
        .and_then(catalog::specialist);
    let name = specialist.map(|s| s.name).unwrap_or("a specialist");

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(10), Constraint::Min(10)])
        .split(layout[0]);
    let back = button(frame, "← Back", header[0], false, true);
    hits.push(back, HitTarget::Back);
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(format!("Book with {}", name), Style::default().bold()),
            Line::styled(
                specialist.map(|s| s.specialty).unwrap_or(""),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        header[1].inner(Margin::new(1, 0)),
    );

    match booking.booked() {
        Some(summary) => draw_summary(frame, name, summary, layout[1], hits),
        None => draw_form(frame, booking, layout[1], hits),
    }
}

fn section(title: &str, focused: bool) -> Block<'static> {
    let color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

/// Evenly split `area` into `n` columns.
fn columns(area: Rect, n: usize) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(std::iter::repeat(Constraint::Ratio(1, n.max(1) as u32)).take(n))
        .split(area)
}

fn draw_form(frame: &mut Frame, booking: &BookingScreen, area: Rect, hits: &mut HitMap) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // date
            Constraint::Length(5), // time
            Constraint::Length(5), // session type
            Constraint::Length(3), // notes
            Constraint::Length(3), // confirm
            Constraint::Min(0),
        ])
        .split(area);

    let focus = booking.focus();

    let block = section("Date", focus == BookingField::Date);
    let inner = block.inner(layout[0]);
    frame.render_widget(block, layout[0]);
    let cells = columns(inner, booking.dates().len());
    for (idx, (date, cell)) in booking.dates().iter().zip(cells.iter()).enumerate() {
        let label = format!("{} {}", date.format("%a"), date.day());
        let area = button(frame, &label, *cell, booking.date_index() == idx, true);
        hits.push(area, HitTarget::Date(idx));
    }

    let block = section("Time", focus == BookingField::Time);
    let inner = block.inner(layout[1]);
    frame.render_widget(block, layout[1]);
    let cells = columns(inner, TIME_SLOTS.len());
    for (idx, (slot, cell)) in TIME_SLOTS.iter().zip(cells.iter()).enumerate() {
        let area = button(frame, slot.time, *cell, booking.time() == Some(idx), slot.available);
        if slot.available {
            hits.push(area, HitTarget::Time(idx));
        }
    }

    let block = section("Session type", focus == BookingField::SessionType);
    let inner = block.inner(layout[2]);
    frame.render_widget(block, layout[2]);
    let cells = columns(inner, SESSION_TYPES.len());
    for (idx, (kind, cell)) in SESSION_TYPES.iter().zip(cells.iter()).enumerate() {
        let label = format!("{} ({})", kind.name, kind.duration);
        let area = button(frame, &label, *cell, booking.session_type() == Some(idx), true);
        hits.push(area, HitTarget::SessionType(idx));
    }

    let notes = Paragraph::new(booking.notes())
        .style(Style::default().fg(Color::White))
        .block(section("Notes (optional)", focus == BookingField::Notes));
    frame.render_widget(notes, layout[3]);

    let confirm_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(layout[4]);
    let ready = booking.can_confirm();
    let confirm = button(frame, "Confirm booking", confirm_row[1], ready, ready);
    hits.push(confirm, HitTarget::Confirm);
}

fn draw_summary(
    frame: &mut Frame,
    name: &str,
    summary: &BookingSummary,
    area: Rect,
    hits: &mut HitMap,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let mut lines = vec![
        Line::styled("Session booked!", Style::default().fg(Color::Green).bold()),
        Line::raw(""),
        Line::raw(format!("With: {}", name)),
        Line::raw(format!("When: {} at {}", summary.date.format("%A, %B %-d"), summary.time)),
        Line::raw(format!("Type: {}", summary.session_type)),
    ];
    if !summary.notes.is_empty() {
        lines.push(Line::raw(format!("Notes: {}", summary.notes)));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(section("Confirmed", true)),
        layout[0],
    );

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(layout[1]);
    let back = button(frame, "Back to specialists", row[1], true, true);
    hits.push(back, HitTarget::Back);
}
