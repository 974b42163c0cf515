//! Running tally of tips.

use clap::Parser;
use tipledger_core::exit_codes;
use tipledger_lib::{app, config, errors};

fn main() {
    // Logs go to stderr so stdout and the TUI stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Parse CLI args; help and version print and exit cleanly
    let config = match config::AppConfig::try_parse() {
        Ok(config) => config,
        Err(err) => {
            let _ = err.print();
            if err.use_stderr() {
                std::process::exit(exit_codes::ERROR_CONFIG);
            }
            return;
        }
    };
    let code = match app::run(&config) {
        Ok(code) => code,
        Err(err) => {
            tipledger_cli::ui::print_error(&format!("{err:#}"));
            errors::exit_code(&err)
        }
    };
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
}
