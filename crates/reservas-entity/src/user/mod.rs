//! User domain entities.

pub mod model;
pub mod role;

pub use model::{AuthResponse, ProfileData, RecordCount, RefreshResponse, Session, User};
pub use role::Role;
