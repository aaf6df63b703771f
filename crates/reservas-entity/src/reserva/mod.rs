//! Reservation domain entities.

pub mod model;
pub mod policy;
pub mod status;

pub use model::{Reserva, ReservaPeriodo, ReservaUser};
pub use policy::{available_statuses, can_transition, ensure_transition, is_read_only};
pub use status::StatusReserva;
