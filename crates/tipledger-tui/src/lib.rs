//! # tipledger-tui
//!
//! Full-screen tip ledger using ratatui with Elm architecture.

pub mod dialog;
pub mod footer;
pub mod header;
pub mod input;
pub mod keymap;
pub mod list;
pub mod model;
pub mod styles;

#[cfg(test)]
pub(crate) mod test_util;

pub use keymap::{Focus, KeyAction, Mode};
pub use model::{TuiApp, TuiError};
