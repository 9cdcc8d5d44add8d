//! Doxa CLI library.
//!
//! This library provides the core functionality for the doxa command-line
//! interface: argument parsing, configuration loading, and report
//! formatting. The binary itself is a thin wrapper around these pieces.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
