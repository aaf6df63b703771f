//! Core traits defined in `reservas-core` and implemented by other crates.

pub mod token_store;

pub use token_store::{TokenPair, TokenStore};
