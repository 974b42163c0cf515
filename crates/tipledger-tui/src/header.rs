//! TUI header panel: title and running total.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header with the total and entry count.
pub fn render_header(frame: &mut Frame, area: Rect, total: &str, count: usize) {
    let theme = ColorTheme::default();
    let noun = if count == 1 { "tip" } else { "tips" };
    let text = vec![Line::from(vec![
        Span::styled("Total: ", theme.text_style()),
        Span::styled(format!("${total}"), theme.total_style()),
        Span::styled(format!("  ({count} {noun})"), theme.muted_style()),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(Span::styled(" Tip Ledger ", theme.header_style()));

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{row_text, draw};

    #[test]
    fn header_shows_total() {
        let buf = draw(60, 3, |frame| render_header(frame, frame.area(), "5.50", 2));
        assert!(row_text(&buf, 0).contains("Tip Ledger"));
        assert!(row_text(&buf, 1).contains("Total: $5.50"));
        assert!(row_text(&buf, 1).contains("(2 tips)"));
    }

    #[test]
    fn header_singular() {
        let buf = draw(60, 3, |frame| render_header(frame, frame.area(), "3.00", 1));
        assert!(row_text(&buf, 1).contains("(1 tip)"));
    }
}
