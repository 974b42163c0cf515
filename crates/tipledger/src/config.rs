//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tipledger_core::{default_store_path, DEFAULT_STORAGE_KEY};

/// Keep a running tally of tips.
#[derive(Parser, Debug)]
#[command(name = "tipledger", version, about)]
pub struct AppConfig {
    /// Store file path (defaults to the user config directory).
    #[arg(long, global = true, env = "TIPLEDGER_STORE")]
    pub store: Option<PathBuf>,

    /// Storage slot holding the ledger.
    #[arg(long, global = true, default_value = DEFAULT_STORAGE_KEY, env = "TIPLEDGER_KEY")]
    pub key: String,

    /// Quiet mode (only output values).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Ledger actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add an amount to the front of the ledger.
    Add {
        /// Amount, e.g. 2.50.
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Delete entries by their listed positions.
    #[command(visible_alias = "del")]
    Delete {
        /// Zero-based positions as shown by `list`.
        indices: Vec<usize>,
    },
    /// Delete every entry.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Show entries with their positions and the total.
    #[command(visible_alias = "ls")]
    List,
    /// Show the total.
    Total,
    /// Interactive line shell.
    Shell,
    /// Full-screen interface.
    Tui,
}

impl AppConfig {
    /// Store path, falling back to the default location.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.store.clone().unwrap_or_else(default_store_path)
    }

    /// The requested command; `list` when none is given.
    #[must_use]
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::List)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("tipledger").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_to_list() {
        let config = parse(&[]);
        assert_eq!(config.resolved_command(), Command::List);
        assert_eq!(config.key, DEFAULT_STORAGE_KEY);
        assert!(!config.quiet);
    }

    #[test]
    fn add_accepts_negative_text() {
        let config = parse(&["add", "-5"]);
        assert_eq!(
            config.resolved_command(),
            Command::Add {
                amount: "-5".into()
            }
        );
    }

    #[test]
    fn delete_positions() {
        let config = parse(&["del", "0", "2"]);
        assert_eq!(
            config.resolved_command(),
            Command::Delete {
                indices: vec![0, 2]
            }
        );
    }

    #[test]
    fn delete_rejects_non_numeric() {
        let result = AppConfig::try_parse_from(["tipledger", "delete", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn clear_yes_flag() {
        let config = parse(&["clear", "-y"]);
        assert_eq!(config.resolved_command(), Command::Clear { yes: true });
    }

    #[test]
    fn global_flags_after_subcommand() {
        let config = parse(&["total", "--store", "/tmp/x.json", "-q"]);
        assert_eq!(config.store_path(), PathBuf::from("/tmp/x.json"));
        assert!(config.quiet);
    }

    #[test]
    fn custom_key() {
        let config = parse(&["--key", "work", "list"]);
        assert_eq!(config.key, "work");
    }

    #[test]
    fn verify_command() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }
}
