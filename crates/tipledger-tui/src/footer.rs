//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::keymap::{Focus, Mode};
use crate::styles::ColorTheme;

/// Render keyboard shortcuts for the current state.
///
/// List actions are hidden while the ledger is empty, and the delete
/// hint is dimmed until something is checked.
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    focus: Focus,
    mode: Mode,
    has_entries: bool,
    any_checked: bool,
) {
    let theme = ColorTheme::default();
    let hint = |key: &'static str, label: &'static str, enabled: bool| {
        vec![
            Span::styled(key, theme.key_style(enabled)),
            Span::styled(label, if enabled { theme.text_style() } else { theme.muted_style() }),
        ]
    };

    let mut spans = Vec::new();
    match (mode, focus) {
        (Mode::ConfirmClear, _) => {
            spans.extend(hint("y", ": clear all | ", true));
            spans.extend(hint("n", ": keep", true));
        }
        (Mode::Normal, Focus::Input) => {
            spans.extend(hint("Enter", ": add | ", true));
            if has_entries {
                spans.extend(hint("Tab", ": list | ", true));
            }
            spans.extend(hint("Esc", ": quit", true));
        }
        (Mode::Normal, Focus::List) => {
            if has_entries {
                spans.extend(hint("Space", ": select | ", true));
                spans.extend(hint("d", ": delete selected | ", any_checked));
                spans.extend(hint("c", ": clear all | ", true));
            }
            spans.extend(hint("Tab", ": input | ", true));
            spans.extend(hint("q", ": quit", true));
        }
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
