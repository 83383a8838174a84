//! FNOL CLI library.
//!
//! Core functionality for the `fnol` command-line interface: argument
//! definitions, configuration management, reasoning prompt construction,
//! and output emission. The binary in `main.rs` is a thin wrapper.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod prompt;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
