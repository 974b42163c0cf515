//! Application entry point and dispatch.

use std::io;

use anyhow::{Context, Result};

use tipledger_cli::{CliLedgerPresenter, ConsoleConfirm, Session};
use tipledger_core::{
    exit_codes, AddOutcome, AssumeYes, ConfirmGate, FileStore, LedgerPresenter, TipLedger,
};
use tipledger_tui::TuiApp;

use crate::config::{AppConfig, Command};

/// Run the application. Returns the process exit code on success.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        tipledger_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let store = FileStore::new(config.store_path());
    tracing::debug!(path = %store.path().display(), key = %config.key, "opening ledger");
    let mut ledger = TipLedger::open_with_key(store, config.key.as_str());
    let presenter = CliLedgerPresenter::new(config.quiet);

    match config.resolved_command() {
        Command::Add { amount } => match ledger.add(&amount).context("saving new tip")? {
            AddOutcome::Added(_) => present(&presenter, &ledger),
            AddOutcome::Rejected(reason) => {
                presenter.present_rejected(&amount, &reason);
                return Ok(exit_codes::ERROR_REJECTED);
            }
        },
        Command::Delete { indices } => {
            let removed = ledger.delete_at(indices).context("deleting tips")?;
            presenter.present_removed(removed);
            present(&presenter, &ledger);
        }
        Command::Clear { yes } => {
            let mut gate: Box<dyn ConfirmGate> = if yes {
                Box::new(AssumeYes)
            } else {
                Box::new(ConsoleConfirm::new())
            };
            let cleared = ledger.clear(gate.as_mut()).context("clearing tips")?;
            presenter.present_cleared(cleared);
            present(&presenter, &ledger);
        }
        Command::List => present(&presenter, &ledger),
        Command::Total => presenter.present_total(&ledger.total()),
        Command::Shell => run_shell(ledger)?,
        Command::Tui => run_tui(ledger)?,
    }
    Ok(exit_codes::SUCCESS)
}

fn present(presenter: &dyn LedgerPresenter, ledger: &TipLedger<FileStore>) {
    presenter.present_ledger(ledger.entries(), &ledger.total());
}

fn run_shell(ledger: TipLedger<FileStore>) -> Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(ledger, stdin.lock(), io::stdout());
    session.run()?;
    Ok(())
}

fn run_tui(ledger: TipLedger<FileStore>) -> Result<()> {
    let mut app = TuiApp::new(ledger);
    app.run()?;
    Ok(())
}
