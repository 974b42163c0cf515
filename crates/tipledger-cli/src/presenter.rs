//! CLI ledger presenter.

use tipledger_core::{Amount, AmountError, LedgerPresenter, EMPTY_STATE};

use crate::output::{format_count, format_currency, format_entry, index_width};
use crate::ui::{print_success, styled_muted, styled_total};

/// Render the ledger as plain text lines: one row per entry, then the total.
///
/// An empty ledger renders the empty-state hint in place of the rows.
#[must_use]
pub fn render_ledger(entries: &[Amount], total: &str) -> String {
    let mut out = String::new();
    if entries.is_empty() {
        out.push_str(EMPTY_STATE);
        out.push('\n');
    } else {
        let width = index_width(entries.len());
        for (i, amount) in entries.iter().enumerate() {
            out.push_str(&format_entry(i, *amount, width));
            out.push('\n');
        }
    }
    out.push_str(&format!("Total: {}", format_currency(total)));
    out.push('\n');
    out
}

/// Quiet rendering: one bare amount per line, nothing else.
#[must_use]
pub fn render_quiet(entries: &[Amount]) -> String {
    entries.iter().map(|amount| format!("{amount}\n")).collect()
}

/// Terminal rendering: rows, a rule, and a styled total with the tip count.
#[must_use]
pub fn render_styled(entries: &[Amount], total: &str) -> String {
    let mut out = String::new();
    if entries.is_empty() {
        out.push_str(&styled_muted(EMPTY_STATE));
        out.push('\n');
    } else {
        let width = index_width(entries.len());
        for (i, amount) in entries.iter().enumerate() {
            out.push_str(&format_entry(i, *amount, width));
            out.push('\n');
        }
        out.push_str(&format!("{:-<24}\n", ""));
    }
    out.push_str(&format!(
        "Total: {} ({})\n",
        styled_total(&format_currency(total)),
        format_count(entries.len())
    ));
    out
}

/// The total on its own; bare in quiet mode.
#[must_use]
pub fn render_total(total: &str, quiet: bool) -> String {
    if quiet {
        total.to_string()
    } else {
        styled_total(&format_currency(total))
    }
}

/// CLI presenter writing to stdout.
pub struct CliLedgerPresenter {
    quiet: bool,
}

impl CliLedgerPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl LedgerPresenter for CliLedgerPresenter {
    fn present_ledger(&self, entries: &[Amount], total: &str) {
        if self.quiet {
            print!("{}", render_quiet(entries));
        } else {
            print!("{}", render_styled(entries, total));
        }
    }

    fn present_total(&self, total: &str) {
        println!("{}", render_total(total, self.quiet));
    }

    fn present_rejected(&self, raw: &str, reason: &AmountError) {
        // Rejection is silent on stdout; the reason only reaches the log.
        tracing::info!(input = raw, %reason, "input not accepted");
    }

    fn present_removed(&self, count: usize) {
        if !self.quiet {
            print_success(&format!("Removed {}", format_count(count)));
        }
    }

    fn present_cleared(&self, cleared: bool) {
        if !self.quiet && cleared {
            print_success("Cleared all tips");
        }
    }
}
