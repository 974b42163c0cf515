//! CLI output formatting.

use tipledger_core::Amount;

/// Currency sign prefixed to every displayed amount.
pub const CURRENCY_SIGN: &str = "$";

/// Prefix a formatted total with the currency sign: `"5.50"` → `"$5.50"`.
#[must_use]
pub fn format_currency(total: &str) -> String {
    format!("{CURRENCY_SIGN}{total}")
}

/// Format a single entry: `250` cents → `"$2.50"`.
#[must_use]
pub fn format_amount(amount: Amount) -> String {
    format_currency(&amount.to_string())
}

/// Format one list row with its position, e.g. `"  0  $3.00"`.
#[must_use]
pub fn format_entry(index: usize, amount: Amount, width: usize) -> String {
    format!("{index:>width$}  {}", format_amount(amount))
}

/// Width needed to right-align positions `0..len`.
#[must_use]
pub fn index_width(len: usize) -> usize {
    len.saturating_sub(1).to_string().len()
}

/// `1 tip`, `3 tips`.
#[must_use]
pub fn format_count(count: usize) -> String {
    if count == 1 {
        "1 tip".to_string()
    } else {
        format!("{count} tips")
    }
}
