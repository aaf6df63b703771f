//! # reservas-client
//!
//! Typed client for the reservation REST API.
//!
//! - [`transport::ApiClient`] sends requests, injects the bearer credential
//!   and runs the single-flight refresh on `401` through
//!   [`refresh::RefreshGuard`].
//! - [`token`] holds the credential backends.
//! - [`api`] exposes one accessor per resource.
//! - [`session::AuthSession`] ties login and logout to the token store.

pub mod api;
pub mod error;
pub mod refresh;
pub mod session;
pub mod token;
pub mod transport;

pub use refresh::RefreshGuard;
pub use session::{AuthSession, SessionStatus};
pub use transport::{ApiClient, ApiRequest, FileUpload, RequestBody};
