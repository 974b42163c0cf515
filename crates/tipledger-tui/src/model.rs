//! TUI application model (Elm architecture).
//!
//! `handle_key_action` is the update step, `render` the view. Every ledger
//! mutation clears the checked set because positions are only meaningful
//! for the rendering they were taken from.

use std::collections::BTreeSet;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use tipledger_core::{AddOutcome, AssumeYes, KeyValueStore, StorageError, TipLedger, CLEAR_PROMPT};

use crate::dialog::render_confirm;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::input::render_input;
use crate::keymap::{map_key, Focus, KeyAction, Mode};
use crate::list::render_list;

/// Errors that stop the TUI.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// TUI application state (Elm Model).
pub struct TuiApp<S: KeyValueStore> {
    ledger: TipLedger<S>,
    /// Text typed into the amount box.
    pub input: String,
    /// Pane receiving keystrokes.
    pub focus: Focus,
    /// Whether the clear confirmation is open.
    pub mode: Mode,
    /// List row under the cursor.
    pub cursor: usize,
    /// Positions checked for deletion in the current rendering.
    pub checked: BTreeSet<usize>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<S: KeyValueStore> TuiApp<S> {
    /// Create a new TUI app over an opened ledger.
    #[must_use]
    pub fn new(ledger: TipLedger<S>) -> Self {
        Self {
            ledger,
            input: String::new(),
            focus: Focus::Input,
            mode: Mode::Normal,
            cursor: 0,
            checked: BTreeSet::new(),
            should_quit: false,
        }
    }

    /// Borrow the ledger.
    #[must_use]
    pub fn ledger(&self) -> &TipLedger<S> {
        &self.ledger
    }

    /// Release the ledger.
    pub fn into_ledger(self) -> TipLedger<S> {
        self.ledger
    }

    /// Handle a keyboard action (Elm Update).
    pub fn handle_key_action(&mut self, action: KeyAction) -> Result<(), StorageError> {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Insert(c) => self.input.push(c),
            KeyAction::Backspace => {
                self.input.pop();
            }
            KeyAction::Submit => self.submit()?,
            KeyAction::FocusInput => self.focus = Focus::Input,
            KeyAction::FocusList => {
                if !self.ledger.is_empty() {
                    self.focus = Focus::List;
                }
            }
            KeyAction::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            KeyAction::CursorDown => {
                if self.cursor + 1 < self.ledger.len() {
                    self.cursor += 1;
                }
            }
            KeyAction::ToggleChecked => {
                if self.cursor < self.ledger.len() && !self.checked.remove(&self.cursor) {
                    self.checked.insert(self.cursor);
                }
            }
            KeyAction::DeleteChecked => {
                if !self.checked.is_empty() {
                    let picks = std::mem::take(&mut self.checked);
                    self.ledger.delete_at(picks)?;
                    self.after_mutation();
                }
            }
            KeyAction::ClearAll => {
                if !self.ledger.is_empty() {
                    self.mode = Mode::ConfirmClear;
                }
            }
            KeyAction::ConfirmYes => {
                if self.mode == Mode::ConfirmClear {
                    self.mode = Mode::Normal;
                    self.ledger.clear(&mut AssumeYes)?;
                    self.after_mutation();
                }
            }
            KeyAction::ConfirmNo => self.mode = Mode::Normal,
            KeyAction::None => {}
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<(), StorageError> {
        match self.ledger.add(&self.input)? {
            AddOutcome::Added(_) => {
                self.input.clear();
                self.after_mutation();
            }
            AddOutcome::Rejected(reason) => {
                tracing::debug!(input = %self.input, %reason, "input not accepted");
            }
        }
        Ok(())
    }

    /// Reset per-render state after the entries changed.
    fn after_mutation(&mut self) {
        self.checked.clear();
        self.cursor = self.cursor.min(self.ledger.len().saturating_sub(1));
        if self.ledger.is_empty() {
            self.focus = Focus::Input;
        }
    }

    /// Compute the layout.
    ///
    /// Returns (header, input, list, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // input
                Constraint::Min(3),    // list
                Constraint::Length(2), // footer
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2], chunks[3])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, input_area, list_area, footer_area) =
            Self::compute_layout(frame.area());

        render_header(frame, header_area, &self.ledger.total(), self.ledger.len());
        render_input(
            frame,
            input_area,
            &self.input,
            self.focus == Focus::Input && self.mode == Mode::Normal,
        );
        render_list(
            frame,
            list_area,
            self.ledger.entries(),
            &self.checked,
            self.cursor,
            self.focus == Focus::List,
        );
        render_footer(
            frame,
            footer_area,
            self.focus,
            self.mode,
            !self.ledger.is_empty(),
            !self.checked.is_empty(),
        );

        if self.mode == Mode::ConfirmClear {
            render_confirm(frame, frame.area(), CLEAR_PROMPT);
        }
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// The terminal is restored even when a storage write fails; the
    /// failure is returned afterwards.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let mut terminal = Self::setup_terminal()?;
        let outcome = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        outcome
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), TuiError> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                if let Event::Key(key_event) = event::read()? {
                    let action = map_key(key_event, self.focus, self.mode);
                    self.handle_key_action(action)?;
                }
            }
        }
    }
}
