//! Cross-crate integration tests for the TipLedger workspace.
//!
//! The tests live under `tests/`; this library target is intentionally empty.
