//! Status line: screen, latched feeling, focus, key hints.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use vibegrove_core::screen::ScreenId;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let router = app.core.router();
    let current = router.current();

    let screen_color = match current {
        ScreenId::Call | ScreenId::Booking => Color::Magenta,
        ScreenId::Tree | ScreenId::Forest => Color::Green,
        _ => Color::Cyan,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", current.as_str()),
        Style::default().fg(Color::Black).bg(screen_color),
    )];

    if let Some(feeling) = router.feeling() {
        spans.push(Span::raw(format!(" feeling: {} ", feeling)));
    }

    if !router.is_focused() {
        spans.push(Span::styled(" unfocused ", Style::default().fg(Color::Yellow)));
    }

    let hint = match current {
        ScreenId::Main => "↑ specialists  ↓ tree  ←→ choose  Enter select",
        ScreenId::Tree => "↑ home  ← forest  → profile  drag the bucket",
        ScreenId::Call => "click or Enter to return",
        ScreenId::Booking => "Tab/↑↓ field  ←→ choose  Enter confirm",
        _ => "Esc home",
    };
    spans.push(Span::styled(
        format!(" {}  Ctrl+Q quit ", hint),
        Style::default().fg(Color::DarkGray),
    ));

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}
