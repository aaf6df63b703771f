//! # reservas-cli
//!
//! Command-line front end for the reservation API. The binary at the
//! workspace root parses [`Cli`], loads the configuration and calls
//! [`Cli::execute`].

pub mod commands;
pub mod output;
pub mod prompt;

pub use commands::{Cli, Context};
pub use output::OutputFormat;
