//! Events emitted by the client while it manages credentials.
//!
//! The transport publishes them on a broadcast channel so front ends can
//! react to a forced re-authentication without inspecting every error.

pub mod session;

pub use session::SessionEvent;
