//! The tip ledger: an ordered list of amounts, most recent first, written
//! back to its store after every mutation.

use std::collections::BTreeSet;

use crate::amount::{format_cents, parse_amount, Amount, AmountError};
use crate::constants::{CLEAR_PROMPT, DEFAULT_STORAGE_KEY};
use crate::error::StorageError;
use crate::interfaces::ConfirmGate;
use crate::snapshot;
use crate::storage::KeyValueStore;

/// Result of [`TipLedger::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The amount was rounded, placed at the front, and persisted.
    Added(Amount),
    /// The input was not accepted; the ledger is unchanged.
    Rejected(AmountError),
}

impl AddOutcome {
    #[must_use]
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

/// Ledger state bound to one slot of a key-value store.
pub struct TipLedger<S: KeyValueStore> {
    entries: Vec<Amount>,
    store: S,
    storage_key: String,
}

impl<S: KeyValueStore> TipLedger<S> {
    /// Open the ledger stored under the default key.
    pub fn open(store: S) -> Self {
        Self::open_with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Open the ledger stored under `key`, loading its snapshot.
    pub fn open_with_key(store: S, key: impl Into<String>) -> Self {
        let mut ledger = Self {
            entries: Vec::new(),
            store,
            storage_key: key.into(),
        };
        ledger.load();
        ledger
    }

    /// Replace in-memory state with the persisted snapshot.
    ///
    /// Missing, unreadable, or malformed snapshots leave the ledger empty.
    pub fn load(&mut self) {
        self.entries = match self.store.get_item(&self.storage_key) {
            Ok(Some(raw)) => match snapshot::decode(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(key = %self.storage_key, error = %e, "discarding malformed snapshot");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.storage_key, error = %e, "snapshot unreadable");
                Vec::new()
            }
        };
        tracing::debug!(entries = self.entries.len(), "ledger loaded");
    }

    /// Write the current entries to the store, replacing any prior snapshot.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let encoded = snapshot::encode(&self.entries)?;
        self.store.set_item(&self.storage_key, &encoded)
    }

    /// Make `next` the current entries and save them. A failed write
    /// restores the previous entries.
    fn commit(&mut self, next: Vec<Amount>) -> Result<(), StorageError> {
        let previous = std::mem::replace(&mut self.entries, next);
        if let Err(e) = self.save() {
            self.entries = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Parse `raw` and, if it is a valid amount, insert it at the front.
    pub fn add(&mut self, raw: &str) -> Result<AddOutcome, StorageError> {
        let amount = match parse_amount(raw) {
            Ok(amount) => amount,
            Err(reason) => {
                tracing::debug!(input = raw, %reason, "amount rejected");
                return Ok(AddOutcome::Rejected(reason));
            }
        };
        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.push(amount);
        next.extend_from_slice(&self.entries);
        self.commit(next)?;
        tracing::debug!(%amount, "amount added");
        Ok(AddOutcome::Added(amount))
    }

    /// Remove every entry whose current position is in `indices`.
    ///
    /// Positions refer to the sequence before any removal. Out-of-range
    /// positions are ignored. An empty set is a no-op and writes nothing.
    pub fn delete_at<I>(&mut self, indices: I) -> Result<usize, StorageError>
    where
        I: IntoIterator<Item = usize>,
    {
        let selected: BTreeSet<usize> = indices.into_iter().collect();
        if selected.is_empty() {
            tracing::debug!("delete with nothing selected");
            return Ok(0);
        }

        let next: Vec<Amount> = self
            .positions()
            .filter(|(i, _)| !selected.contains(i))
            .map(|(_, amount)| amount)
            .collect();
        let removed = self.entries.len() - next.len();

        self.commit(next)?;
        tracing::debug!(removed, "entries deleted");
        Ok(removed)
    }

    /// Empty the ledger after the gate approves.
    ///
    /// Returns `false` without consulting the gate when there is nothing to
    /// clear, and `false` when the gate refuses.
    pub fn clear(&mut self, gate: &mut dyn ConfirmGate) -> Result<bool, StorageError> {
        if self.entries.is_empty() {
            return Ok(false);
        }
        if !gate.confirm(CLEAR_PROMPT) {
            tracing::debug!("clear cancelled");
            return Ok(false);
        }
        self.commit(Vec::new())?;
        tracing::debug!("ledger cleared");
        Ok(true)
    }

    /// Total of all entries with two decimals and no currency sign.
    #[must_use]
    pub fn total(&self) -> String {
        format_cents(self.total_cents())
    }

    /// Exact total in cents.
    #[must_use]
    pub fn total_cents(&self) -> u128 {
        self.entries.iter().map(|a| u128::from(a.cents())).sum()
    }

    /// Entries, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[Amount] {
        &self.entries
    }

    /// Entries paired with their display positions.
    pub fn positions(&self) -> impl Iterator<Item = (usize, Amount)> + '_ {
        self.entries.iter().copied().enumerate()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key of the persisted slot.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Borrow the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Release the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}
