//! Line-oriented interactive shell over a ledger.
//!
//! Each line is one action. A bare amount adds it; other commands are
//! `del <i>...`, `clear`, `list`, `total`, `help`, and `quit`. The list is
//! re-rendered after every change, so positions typed for `del` always
//! refer to the most recent listing.

use std::io::{self, BufRead, Write};

use tipledger_core::{AddOutcome, KeyValueStore, StorageError, TipLedger};

use crate::output::{format_count, format_currency};
use crate::presenter::render_ledger;
use crate::prompt::parse_answer;

const PROMPT: &str = "tip> ";

const HELP: &str = "\
Commands:
  <amount>          add an amount (e.g. 2.50)
  add <amount>      same as above
  del <i> [<i>...]  delete entries by position
  clear             delete everything (asks first)
  list              show entries and total
  total             show the total
  help              show this help
  quit              leave the shell
";

/// Errors that end a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Delete(Vec<usize>),
    Clear,
    List,
    Total,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

/// Parse one input line.
#[must_use]
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "q" | "quit" | "exit" => Command::Quit,
        "?" | "h" | "help" => Command::Help,
        "ls" | "list" => Command::List,
        "total" => Command::Total,
        "clear" => Command::Clear,
        "add" => Command::Add(rest.to_string()),
        "del" | "delete" | "rm" => parse_positions(rest),
        _ => Command::Add(line.to_string()),
    }
}

fn parse_positions(args: &str) -> Command {
    let mut positions = Vec::new();
    for token in args.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        match token.parse::<usize>() {
            Ok(i) => positions.push(i),
            Err(_) => return Command::Invalid(format!("not a position: {token}")),
        }
    }
    Command::Delete(positions)
}

/// Interactive session bound to a ledger, an input, and an output.
pub struct Session<S: KeyValueStore, R: BufRead, W: Write> {
    ledger: TipLedger<S>,
    input: R,
    output: W,
}

impl<S: KeyValueStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(ledger: TipLedger<S>, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
        }
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.render()?;
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.next_line()? else {
                writeln!(self.output)?;
                break;
            };
            if !self.execute(parse_command(&line))? {
                break;
            }
        }
        Ok(())
    }

    /// Apply one command. Returns `false` when the session should end.
    pub fn execute(&mut self, command: Command) -> Result<bool, SessionError> {
        match command {
            Command::Empty => {}
            Command::Quit => return Ok(false),
            Command::Help => write!(self.output, "{HELP}")?,
            Command::List => self.render()?,
            Command::Total => writeln!(self.output, "{}", format_currency(&self.ledger.total()))?,
            Command::Invalid(message) => writeln!(self.output, "{message}")?,
            Command::Add(raw) => match self.ledger.add(&raw)? {
                AddOutcome::Added(_) => self.render()?,
                AddOutcome::Rejected(reason) => {
                    tracing::debug!(input = %raw, %reason, "input not accepted");
                }
            },
            Command::Delete(positions) => {
                let removed = self.ledger.delete_at(positions)?;
                if removed > 0 {
                    writeln!(self.output, "Removed {}", format_count(removed))?;
                    self.render()?;
                }
            }
            Command::Clear => self.clear()?,
        }
        Ok(true)
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        let Self {
            ledger,
            input,
            output,
        } = self;
        let mut io_error = None;
        let mut gate = |prompt: &str| -> bool {
            let answer = write!(output, "{prompt} [y/N] ")
                .and_then(|()| output.flush())
                .and_then(|()| {
                    let mut line = String::new();
                    input.read_line(&mut line).map(|_| line)
                });
            match answer {
                Ok(line) => parse_answer(&line),
                Err(e) => {
                    io_error = Some(e);
                    false
                }
            }
        };
        let cleared = ledger.clear(&mut gate)?;
        if let Some(e) = io_error {
            return Err(e.into());
        }
        if cleared {
            writeln!(self.output, "Cleared all tips")?;
            self.render()?;
        }
        Ok(())
    }

    fn next_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn render(&mut self) -> Result<(), SessionError> {
        let text = render_ledger(self.ledger.entries(), &self.ledger.total());
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Borrow the ledger.
    pub fn ledger(&self) -> &TipLedger<S> {
        &self.ledger
    }

    /// Finish the session and hand back the ledger.
    pub fn into_ledger(self) -> TipLedger<S> {
        self.ledger
    }
}
