//! Constants for storage slots, amount limits, and exit codes.

/// Default key of the persisted ledger slot.
pub const DEFAULT_STORAGE_KEY: &str = "tip_counter_tips";

/// Prompt shown by the confirmation gate before clearing the ledger.
pub const CLEAR_PROMPT: &str = "Clear all tips?";

/// Line shown in place of the list when the ledger is empty.
pub const EMPTY_STATE: &str = "No tips yet. Add an amount to get started.";

/// Number of cents in one currency unit.
pub const CENTS_PER_UNIT: u64 = 100;

/// Largest accepted amount in cents: 9 999 999 999 999.99.
///
/// Snapshots store amounts as JSON numbers, i.e. `f64` units. Below 10^13
/// units the spacing of `f64` is at most 2^-9, so `cents / 100` read back
/// and multiplied by 100 stays within 0.4 of the original cent count and
/// rounds to it, even with a one-ulp error from the JSON float parser.
pub const MAX_CENTS: u64 = 999_999_999_999_999;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Input was not accepted as an amount.
    pub const ERROR_REJECTED: i32 = 2;
    /// Reading or writing the store failed.
    pub const ERROR_STORAGE: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
