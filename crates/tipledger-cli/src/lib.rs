//! # tipledger-cli
//!
//! CLI presenter, confirmation prompt, interactive shell, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod prompt;
pub mod session;
pub mod ui;

pub use presenter::CliLedgerPresenter;
pub use prompt::ConsoleConfirm;
pub use session::{Session, SessionError};
