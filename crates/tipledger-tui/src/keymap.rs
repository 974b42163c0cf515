//! Keyboard shortcut handling.
//!
//! The same key means different things depending on which pane has focus
//! and whether the clear confirmation is open, so mapping takes both.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Pane receiving keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

/// Modal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    ConfirmClear,
}

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Insert(char),
    Backspace,
    Submit,
    FocusInput,
    FocusList,
    CursorUp,
    CursorDown,
    ToggleChecked,
    DeleteChecked,
    ClearAll,
    ConfirmYes,
    ConfirmNo,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent, focus: Focus, mode: Mode) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    if mode == Mode::ConfirmClear {
        return match key.code {
            KeyCode::Char('y' | 'Y') => KeyAction::ConfirmYes,
            KeyCode::Char('n' | 'N') | KeyCode::Esc => KeyAction::ConfirmNo,
            _ => KeyAction::None,
        };
    }

    match focus {
        Focus::Input => match key.code {
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Tab | KeyCode::Down => KeyAction::FocusList,
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyAction::Insert(c)
            }
            _ => KeyAction::None,
        },
        Focus::List => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::CursorUp,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::CursorDown,
            KeyCode::Char(' ') => KeyAction::ToggleChecked,
            KeyCode::Char('d') | KeyCode::Delete => KeyAction::DeleteChecked,
            KeyCode::Char('c') => KeyAction::ClearAll,
            KeyCode::Tab | KeyCode::Char('a' | 'i') => KeyAction::FocusInput,
            _ => KeyAction::None,
        },
    }
}
