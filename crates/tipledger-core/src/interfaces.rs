//! Capabilities the ledger consumes from its callers.

use crate::amount::{Amount, AmountError};

/// Yes/no gate consulted before a destructive operation.
pub trait ConfirmGate {
    /// Return `true` to proceed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> ConfirmGate for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Gate that always proceeds (e.g. `clear --yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl ConfirmGate for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Gate that always refuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeNo;

impl ConfirmGate for AssumeNo {
    fn confirm(&mut self, _prompt: &str) -> bool {
        false
    }
}

/// Trait for presenting ledger state to the user.
pub trait LedgerPresenter {
    /// Render the entry list (with positions) and the total.
    fn present_ledger(&self, entries: &[Amount], total: &str);

    /// Present the total only.
    fn present_total(&self, total: &str);

    /// Report that an input was not accepted.
    fn present_rejected(&self, raw: &str, reason: &AmountError);

    /// Report how many entries a delete removed.
    fn present_removed(&self, count: usize);

    /// Report the outcome of a clear.
    fn present_cleared(&self, cleared: bool);
}
