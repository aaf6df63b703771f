//! Capacity period entities and their archived form.

pub mod historico;
pub mod model;

pub use historico::{HistoricoPeriodo, HistoricoReserva};
pub use model::{Periodo, PeriodoActivo};
