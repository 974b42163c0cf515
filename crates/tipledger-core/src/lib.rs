//! # tipledger-core
//!
//! Core library for TipLedger: a running tally of tip amounts that is
//! persisted to a key-value store after every change.
//!
//! The [`TipLedger`] owns the entries and the persistence; presenters
//! render it and turn user actions into calls against it.

pub mod amount;
pub mod constants;
pub mod error;
pub mod interfaces;
pub mod ledger;
pub mod snapshot;
pub mod storage;

// Re-exports
pub use amount::{parse_amount, Amount, AmountError};
pub use constants::{exit_codes, CLEAR_PROMPT, DEFAULT_STORAGE_KEY, EMPTY_STATE, MAX_CENTS};
pub use error::StorageError;
pub use interfaces::{AssumeNo, AssumeYes, ConfirmGate, LedgerPresenter};
pub use ledger::{AddOutcome, TipLedger};
pub use storage::{default_store_path, FileStore, KeyValueStore, MemoryStore};
