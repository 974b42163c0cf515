//! Modal yes/no confirmation.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Rectangle of `width` x `height` centered in `area`, clipped to it.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Render `prompt` in a bordered popup over whatever is beneath.
pub fn render_confirm(frame: &mut Frame, area: Rect, prompt: &str) {
    let theme = ColorTheme::default();
    let popup = centered_rect(36, 5, area);

    let text = vec![
        Line::from(Span::styled(prompt.to_string(), theme.danger_style())),
        Line::from(vec![
            Span::styled("y", theme.key_style(true)),
            Span::raw(" yes   "),
            Span::styled("n", theme.key_style(true)),
            Span::raw(" no"),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm ")
        .border_style(theme.danger_style());

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(block),
        popup,
    );
}
