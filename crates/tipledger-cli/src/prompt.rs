//! Interactive yes/no confirmation.

use console::Term;

use tipledger_core::ConfirmGate;

/// Interpret a typed answer. Only `y`/`yes` (any case) proceed.
#[must_use]
pub fn parse_answer(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Confirmation gate that asks on the terminal.
///
/// The prompt goes to stderr so stdout stays scriptable; the answer is
/// read from stdin. Read failures count as "no".
pub struct ConsoleConfirm {
    term: Term,
}

impl ConsoleConfirm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for ConsoleConfirm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmGate for ConsoleConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        if let Err(e) = self.term.write_str(&format!("{prompt} [y/N] ")) {
            tracing::warn!(error = %e, "could not write confirmation prompt");
            return false;
        }
        match self.term.read_line() {
            Ok(answer) => parse_answer(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "could not read confirmation answer");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_answers() {
        assert!(parse_answer("y"));
        assert!(parse_answer("Y"));
        assert!(parse_answer(" yes \n"));
        assert!(parse_answer("YES"));
    }

    #[test]
    fn everything_else_is_no() {
        assert!(!parse_answer(""));
        assert!(!parse_answer("n"));
        assert!(!parse_answer("no"));
        assert!(!parse_answer("yep"));
        assert!(!parse_answer("sure"));
    }
}
