//! # reservas-entity
//!
//! Domain models for the Sistema de Reservas client. Every struct mirrors a
//! JSON payload of the reservation API (camelCase on the wire) or a request
//! body sent to it. The crate also owns the reservation status policy, the
//! query filters and the display helpers shared by the front ends.

pub mod dashboard;
pub mod dto;
pub mod filters;
pub mod format;
pub mod libras;
pub mod periodo;
pub mod reserva;
pub mod user;

pub use libras::Libras;
