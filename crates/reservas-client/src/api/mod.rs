//! Typed accessors for each REST resource.
//!
//! Every accessor borrows the [`ApiClient`] and validates request bodies
//! before they are sent.

pub mod auth;
pub mod dashboard;
pub mod periodos;
pub mod profile;
pub mod reservas;
pub mod users;

pub use auth::AuthApi;
pub use dashboard::DashboardApi;
pub use periodos::PeriodosApi;
pub use profile::ProfileApi;
pub use reservas::ReservasApi;
pub use users::UsersApi;

use crate::transport::ApiClient;

impl ApiClient {
    /// `/auth` endpoints.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// `/users` endpoints (admin).
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// `/reservas` endpoints.
    pub fn reservas(&self) -> ReservasApi<'_> {
        ReservasApi::new(self)
    }

    /// `/periodos` endpoints.
    pub fn periodos(&self) -> PeriodosApi<'_> {
        PeriodosApi::new(self)
    }

    /// `/dashboard` endpoints (admin).
    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi::new(self)
    }

    /// `/profile` endpoints.
    pub fn profile(&self) -> ProfileApi<'_> {
        ProfileApi::new(self)
    }
}
