//! Application logic for the `tipledger` binary.

pub mod app;
pub mod config;
pub mod errors;
