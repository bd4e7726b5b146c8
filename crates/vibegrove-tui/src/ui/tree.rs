//! Tree screen: the canopy drop target, progress gauges, and the bucket.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph};

use vibegrove_core::screens::tree::{growth_stage, GrowthStage, TreeScreen};

use super::hits::HitMap;
use crate::app::App;

const BUCKET_WIDTH: u16 = 8;
const BUCKET_HEIGHT: u16 = 4;

fn tree_art(stage: GrowthStage) -> &'static [&'static str] {
    match stage {
        GrowthStage::Sapling => &["   ,   ", "  \\|/  ", "   |   ", "   |   "],
        GrowthStage::Young => &[
            "    ###    ",
            "  #######  ",
            " ######### ",
            "  #######  ",
            "     |     ",
            "     |     ",
        ],
        GrowthStage::Mature => &[
            "     #####     ",
            "  ###########  ",
            " ############# ",
            "###############",
            " ############# ",
            "  ###########  ",
            "      |||      ",
            "      |||      ",
            "     /|||\\     ",
        ],
    }
}

pub fn draw(frame: &mut Frame, app: &App, tree: &TreeScreen, area: Rect, hits: &mut HitMap) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let drag = tree.drag();
    let canopy_area = columns[0];
    let canopy_px = app.rect_to_px(canopy_area);
    hits.canopy = Some(canopy_area);

    let border = if drag.is_hovering(canopy_px) {
        Color::Yellow
    } else if drag.effect_active() {
        Color::Cyan
    } else if drag.recently_applied() {
        Color::Green
    } else {
        Color::DarkGray
    };
    let title = if drag.effect_active() {
        " Your tree ~ watering ~ "
    } else {
        " Your tree "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(canopy_area);
    frame.render_widget(block, canopy_area);

    let leaf = if drag.recently_applied() {
        Color::LightGreen
    } else {
        Color::Green
    };
    let art = tree_art(growth_stage(tree.growth()));
    let top_pad = inner.height.saturating_sub(art.len() as u16) / 2;
    let mut lines: Vec<Line> = vec![Line::raw(""); top_pad as usize];
    for row in art {
        let style = if row.contains('#') || row.contains(',') {
            Style::default().fg(leaf)
        } else {
            Style::default().fg(Color::Rgb(139, 90, 43))
        };
        lines.push(Line::styled(*row, style));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

    draw_panel(frame, tree, columns[1], hits);

    // While dragging, the bucket follows the pointer on top of everything.
    if let Some(tool) = drag.tool_rect() {
        let bucket = app.rect_to_cells(tool).intersection(frame.area());
        draw_bucket(frame, bucket, true, false);
    }
}

fn draw_panel(frame: &mut Frame, tree: &TreeScreen, area: Rect, hits: &mut HitMap) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // water
            Constraint::Length(3), // growth
            Constraint::Length(3), // health
            Constraint::Min(1),
            Constraint::Length(BUCKET_HEIGHT),
            Constraint::Length(1), // hint
        ])
        .split(area);

    let drag = tree.drag();
    let level = drag.level();
    let water_label = if level.is_saturated() {
        format!("{}% full", level.value())
    } else {
        format!("{}%", level.value())
    };
    gauge(frame, " Water ", level.ratio(), water_label, Color::Cyan, layout[0]);
    gauge(
        frame,
        " Growth ",
        tree.growth() as f64 / 100.0,
        format!("{}%", tree.growth()),
        Color::Green,
        layout[1],
    );
    gauge(
        frame,
        " Health ",
        tree.health() as f64 / 100.0,
        format!("{}%", tree.health()),
        Color::LightGreen,
        layout[2],
    );

    let slot = layout[4];
    let home = Rect::new(
        slot.x + slot.width.saturating_sub(BUCKET_WIDTH) / 2,
        slot.y,
        BUCKET_WIDTH.min(slot.width),
        slot.height,
    );
    if !drag.is_dragging() {
        let locked = !drag.can_drag();
        draw_bucket(frame, home, false, locked);
        hits.bucket = Some(home);
    }

    let hint = if level.is_saturated() {
        "Your tree is fully watered"
    } else if drag.is_dragging() {
        "Drop it on the tree"
    } else {
        "Drag the bucket onto the tree"
    };
    frame.render_widget(
        Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        layout[5],
    );
}

fn gauge(frame: &mut Frame, title: &str, ratio: f64, label: String, color: Color, area: Rect) {
    let gauge = Gauge::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, area);
}

fn draw_bucket(frame: &mut Frame, area: Rect, lifted: bool, locked: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let color = if locked {
        Color::DarkGray
    } else if lifted {
        Color::Yellow
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let body = Paragraph::new(vec![Line::raw("~~~~"), Line::raw("\\__/")])
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(Clear, area);
    frame.render_widget(body, area);
}
