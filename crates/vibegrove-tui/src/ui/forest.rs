//! Community forest: scattered trees, message bubble, reply box.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use vibegrove_core::catalog::PRESET_REPLIES;
use vibegrove_core::screens::forest::{canopy, Canopy, ForestScreen};

use super::hits::{HitMap, HitTarget};

pub fn draw(frame: &mut Frame, forest: &ForestScreen, area: Rect, hits: &mut HitMap) {
    let bubble_height = if forest.selected_message().is_some() { 4 } else { 0 };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),                                // board
            Constraint::Length(bubble_height),                 // message
            Constraint::Length(PRESET_REPLIES.len() as u16),   // presets
            Constraint::Length(3),                             // input
        ])
        .split(area);

    draw_board(frame, forest, layout[0], hits);

    if let Some((tree, message)) = forest.selected_message() {
        let bubble = Paragraph::new(message)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .title(format!(" Tree #{} ", tree.id))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        frame.render_widget(bubble, layout[1]);
    }

    let presets = layout[2];
    for (i, reply) in PRESET_REPLIES.iter().enumerate() {
        let row = Rect::new(presets.x, presets.y + i as u16, presets.width, 1);
        if row.y >= presets.bottom() {
            break;
        }
        frame.render_widget(
            Paragraph::new(format!(" + {}", reply)).style(Style::default().fg(Color::Gray)),
            row,
        );
        hits.push(row, HitTarget::PresetReply(i));
    }

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(10)])
        .split(layout[3]);
    let input = Paragraph::new(forest.input())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(" Share a kind word ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(input, input_row[0]);
    let send = super::button(frame, "Send", input_row[1], false, !forest.input().trim().is_empty());
    hits.push(send, HitTarget::Send);
}

fn draw_board(frame: &mut Frame, forest: &ForestScreen, area: Rect, hits: &mut HitMap) {
    if area.width < 3 || area.height == 0 {
        return;
    }
    let selected = forest.selected();
    for tree in forest.trees() {
        let col = area.x + ((tree.x / 100.0) * (area.width - 1) as f32) as u16;
        let row = area.y + ((tree.y / 100.0) * (area.height.saturating_sub(1)) as f32) as u16;
        let color = match canopy(tree.growth) {
            Canopy::Bright => Color::LightGreen,
            Canopy::Medium => Color::Green,
            Canopy::Deep => Color::Rgb(34, 102, 51),
        };
        let mut style = Style::default().fg(color);
        if selected == Some(tree.id) {
            style = style.bg(Color::DarkGray).bold();
        }
        let glyph = if tree.has_message { "♣*" } else { "♣" };
        let room = area.right().saturating_sub(col);
        frame
            .buffer_mut()
            .set_stringn(col, row, glyph, room as usize, style);
        // Message trees are two cells wide so the marker is clickable too.
        let width = if tree.has_message { 2.min(room) } else { 1 };
        hits.push(Rect::new(col, row, width, 1), HitTarget::CommunityTree(tree.id));
    }
}
