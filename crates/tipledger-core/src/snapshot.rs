//! Snapshot codec: the ledger as a JSON array of numbers, most recent first.

use crate::amount::Amount;
use crate::error::StorageError;

/// Encode entries as a JSON array, e.g. `[3,2.5]`.
pub fn encode(entries: &[Amount]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(entries)?)
}

/// Decode a snapshot. Anything other than an array of positive finite
/// numbers is an error; callers treat that as an absent snapshot.
pub fn decode(raw: &str) -> Result<Vec<Amount>, serde_json::Error> {
    serde_json::from_str(raw)
}
