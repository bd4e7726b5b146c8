//! Profile: streak stats, achievements, settings toggles.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use vibegrove_core::catalog::ACHIEVEMENTS;
use vibegrove_core::screens::profile::{
    ProfileScreen, Setting, STREAK_DAYS, TOTAL_CHECK_INS, WELLNESS_SCORE,
};

use super::hits::{HitMap, HitTarget};
use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, profile: &ProfileScreen, area: Rect, hits: &mut HitMap) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                                   // name
            Constraint::Length(3),                                   // stats
            Constraint::Length(3),                                   // wellness
            Constraint::Length(ACHIEVEMENTS.len() as u16 + 2),       // achievements
            Constraint::Length(Setting::ALL.len() as u16 + 2),       // settings
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(app.core.config().user_name.as_str(), Style::default().bold()),
            Line::styled("Student", Style::default().fg(Color::DarkGray)),
        ]),
        layout[0],
    );

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(layout[1]);
    stat(frame, "Day streak", STREAK_DAYS, stats[0]);
    stat(frame, "Check-ins", TOTAL_CHECK_INS, stats[1]);

    let wellness = Gauge::default()
        .block(Block::default().title(" Wellness ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(WELLNESS_SCORE.min(100) as u16);
    frame.render_widget(wellness, layout[2]);

    let achievements: Vec<Line> = ACHIEVEMENTS
        .iter()
        .map(|(title, detail)| {
            Line::from(vec![
                Span::styled(format!("★ {} ", title), Style::default().fg(Color::Yellow)),
                Span::styled(*detail, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(achievements)
            .block(Block::default().title(" Achievements ").borders(Borders::ALL)),
        layout[3],
    );

    let block = Block::default().title(" Settings ").borders(Borders::ALL);
    let inner = block.inner(layout[4]);
    frame.render_widget(block, layout[4]);
    for (i, setting) in Setting::ALL.iter().enumerate() {
        let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        if row.y >= inner.bottom() {
            break;
        }
        let (mark, color) = if profile.is_enabled(*setting) {
            ("[on] ", Color::Green)
        } else {
            ("[off]", Color::DarkGray)
        };
        let mut label = Style::default();
        if profile.selected() == *setting {
            label = label.fg(Color::Cyan).bold();
        }
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {} ", mark), Style::default().fg(color)),
                Span::styled(setting.label(), label),
            ])),
            row,
        );
        hits.push(row, HitTarget::Setting(*setting));
    }
}

fn stat(frame: &mut Frame, title: &str, value: u32, area: Rect) {
    let text = Paragraph::new(Line::styled(
        value.to_string(),
        Style::default().fg(Color::Green).bold(),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().title(format!(" {} ", title)).borders(Borders::ALL));
    frame.render_widget(text, area);
}
