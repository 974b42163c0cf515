//! Render helpers shared by the widget tests.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

/// Draw once into a `width` x `height` test terminal and return the buffer.
pub fn draw(width: u16, height: u16, f: impl FnOnce(&mut Frame)) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let completed = terminal.draw(f).unwrap();
    completed.buffer.clone()
}

/// Text of row `y`.
pub fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

/// All rows joined by newlines.
pub fn buffer_text(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| row_text(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}
