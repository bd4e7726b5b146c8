//! Specialist directory.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use vibegrove_core::catalog::SPECIALISTS;
use vibegrove_core::screens::specialists::SpecialistsScreen;

use super::hits::{HitMap, HitTarget};

const CARD_HEIGHT: u16 = 5;

pub fn draw(frame: &mut Frame, list: &SpecialistsScreen, area: Rect, hits: &mut HitMap) {
    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(std::iter::repeat(Constraint::Length(CARD_HEIGHT)).take(SPECIALISTS.len()));
    constraints.push(Constraint::Min(0));
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled("Campus Mental Health Specialists", Style::default().bold()),
            Line::styled(
                "Professional support when you need it",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        layout[0],
    );

    let selected = list.selected().id;
    for (specialist, card) in SPECIALISTS.iter().zip(layout.iter().skip(1)) {
        let highlighted = specialist.id == selected;
        let border = if highlighted { Color::Cyan } else { Color::DarkGray };
        let status = if specialist.online {
            Span::styled(" ● online ", Style::default().fg(Color::Green))
        } else {
            Span::styled(" ○ away ", Style::default().fg(Color::DarkGray))
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::styled(format!(" {} ", specialist.name), Style::default().bold()),
                status,
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(*card);
        frame.render_widget(block, *card);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(10)])
            .split(inner);
        let details = Paragraph::new(vec![
            Line::raw(format!(
                "{} · ★ {:.1} · {}",
                specialist.specialty, specialist.rating, specialist.experience
            )),
            Line::styled(
                format!("Next: {} · {}", specialist.next_available, specialist.location),
                Style::default().fg(Color::Gray),
            ),
        ]);
        frame.render_widget(details, columns[0]);

        let book = super::button(frame, "Book", columns[1], highlighted, true);
        hits.push(*card, HitTarget::BookSpecialist(specialist.id));
        hits.push(book, HitTarget::BookSpecialist(specialist.id));
    }
}
