//! Entry list with checkboxes.

use std::collections::BTreeSet;

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use tipledger_core::{Amount, EMPTY_STATE};

use crate::styles::ColorTheme;

/// Render the entries, most recent first.
///
/// Checked rows are marked `[x]` and struck through; the cursor row is
/// highlighted while the list has focus.
pub fn render_list(
    frame: &mut Frame,
    area: Rect,
    entries: &[Amount],
    checked: &BTreeSet<usize>,
    cursor: usize,
    focused: bool,
) {
    let theme = ColorTheme::default();
    let title = if checked.is_empty() {
        " Tips ".to_string()
    } else {
        format!(" Tips ({} selected) ", checked.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.border_style(focused));

    if entries.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(EMPTY_STATE, theme.muted_style())))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, amount)| {
            let is_checked = checked.contains(&i);
            let mark = if is_checked { "[x]" } else { "[ ]" };
            let style = if is_checked {
                theme.checked_style()
            } else {
                theme.text_style()
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{mark} ")),
                Span::styled(format!("${amount}"), style),
            ]))
        })
        .collect();

    let mut list = List::new(items).block(block);
    if focused {
        list = list.highlight_style(theme.cursor_style());
    }
    let mut state = ListState::default().with_selected(Some(cursor.min(entries.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}
