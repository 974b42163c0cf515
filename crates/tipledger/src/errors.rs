//! Error handling and exit codes.

use tipledger_cli::SessionError;
use tipledger_core::{exit_codes, StorageError};
use tipledger_tui::TuiError;

/// Map an application error to its process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    let storage = err.downcast_ref::<StorageError>().is_some()
        || matches!(err.downcast_ref::<SessionError>(), Some(SessionError::Storage(_)))
        || matches!(err.downcast_ref::<TuiError>(), Some(TuiError::Storage(_)));
    if storage {
        exit_codes::ERROR_STORAGE
    } else {
        exit_codes::ERROR_GENERIC
    }
}
