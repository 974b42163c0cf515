//! Amount input box.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

const PLACEHOLDER: &str = "Enter tip amount";

/// Render the input box. Shows a placeholder when empty and a cursor
/// when focused.
pub fn render_input(frame: &mut Frame, area: Rect, text: &str, focused: bool) {
    let theme = ColorTheme::default();
    let line = if text.is_empty() && !focused {
        Line::from(Span::styled(PLACEHOLDER, theme.muted_style()))
    } else {
        Line::from(Span::styled(format!("${text}"), theme.text_style()))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Add tip (Enter) ")
        .border_style(theme.border_style(focused));

    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        let offset = u16::try_from(text.chars().count() + 1).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(offset)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{draw, row_text};

    #[test]
    fn placeholder_when_unfocused_and_empty() {
        let buf = draw(40, 3, |frame| render_input(frame, frame.area(), "", false));
        assert!(row_text(&buf, 1).contains(PLACEHOLDER));
    }

    #[test]
    fn shows_typed_text() {
        let buf = draw(40, 3, |frame| render_input(frame, frame.area(), "12.5", true));
        assert!(row_text(&buf, 1).contains("$12.5"));
        assert!(row_text(&buf, 0).contains("Add tip"));
    }

    #[test]
    fn long_text_does_not_panic() {
        let long = "9".repeat(200);
        draw(20, 3, |frame| render_input(frame, frame.area(), &long, true));
    }
}
