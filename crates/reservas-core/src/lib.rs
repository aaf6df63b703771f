//! # reservas-core
//!
//! Core crate for the Sistema de Reservas client. Contains the unified error
//! system, configuration schemas, typed identifiers, the REST envelope and
//! pagination types, session events and the token-store trait.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
