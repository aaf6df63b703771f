//! Status transition policy: which statuses a role may select for a
//! reservation in a given status.
//!
//! The table is keyed by `(role, current status)`. Pairs missing from the
//! table are read-only, and terminal statuses are read-only for every role
//! before the table is consulted.

use reservas_core::error::AppError;

use super::status::StatusReserva;
use crate::user::Role;

use StatusReserva::{Cancelada, Confirmada, Entregada, Enviada, Pendiente};

/// Selectable statuses for each mutable `(role, current)` pair, current first.
fn transition_table(role: Role, current: StatusReserva) -> Option<&'static [StatusReserva]> {
    match (role, current) {
        (Role::AdminPrincipal, Pendiente) => Some(&[Pendiente, Confirmada, Cancelada]),
        (Role::AdminPrincipal, Confirmada) => Some(&[Confirmada, Enviada, Cancelada]),
        (Role::AdminPrincipal, Enviada) => Some(&[Enviada, Entregada, Cancelada]),
        (Role::Usuario, Confirmada) => Some(&[Confirmada, Enviada]),
        _ => None,
    }
}

/// Statuses selectable for a reservation currently in `current`, as seen by
/// `role`. The current status is always the first element.
pub fn available_statuses(current: StatusReserva, role: Role) -> Vec<StatusReserva> {
    if current.is_terminal() {
        return vec![current];
    }
    match transition_table(role, current) {
        Some(statuses) => statuses.to_vec(),
        None => vec![current],
    }
}

/// Whether `role` sees the status of a reservation in `current` as read-only.
pub fn is_read_only(current: StatusReserva, role: Role) -> bool {
    available_statuses(current, role).len() == 1
}

/// Whether `role` may move a reservation from `from` to a different `to`.
pub fn can_transition(from: StatusReserva, to: StatusReserva, role: Role) -> bool {
    from != to && available_statuses(from, role).contains(&to)
}

/// Check a transition, returning a validation error when it is not allowed.
pub fn ensure_transition(from: StatusReserva, to: StatusReserva, role: Role) -> Result<(), AppError> {
    if from == to {
        return Err(AppError::validation(format!(
            "La reserva ya está en estado {}",
            to.label()
        )));
    }
    if from.is_terminal() {
        return Err(AppError::validation(format!(
            "La reserva está {} y no admite más cambios de estado",
            from.label().to_lowercase()
        )));
    }
    if !can_transition(from, to, role) {
        return Err(AppError::authorization(format!(
            "El rol {} no puede cambiar una reserva de {} a {}",
            role.label(),
            from.label(),
            to.label()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_status_always_first() {
        for role in Role::ALL {
            for status in StatusReserva::ALL {
                let available = available_statuses(status, role);
                assert_eq!(available.first(), Some(&status), "{role} / {status}");
            }
        }
    }

    #[test]
    fn test_terminal_statuses_are_read_only_for_every_role() {
        for role in Role::ALL {
            for status in [Entregada, Cancelada] {
                assert_eq!(available_statuses(status, role), vec![status]);
                assert!(is_read_only(status, role));
            }
        }
    }

    #[test]
    fn test_admin_transitions() {
        assert_eq!(
            available_statuses(Pendiente, Role::AdminPrincipal),
            vec![Pendiente, Confirmada, Cancelada]
        );
        assert_eq!(
            available_statuses(Confirmada, Role::AdminPrincipal),
            vec![Confirmada, Enviada, Cancelada]
        );
        assert_eq!(
            available_statuses(Enviada, Role::AdminPrincipal),
            vec![Enviada, Entregada, Cancelada]
        );
    }

    #[test]
    fn test_usuario_only_ships_confirmed() {
        assert_eq!(
            available_statuses(Confirmada, Role::Usuario),
            vec![Confirmada, Enviada]
        );
        for status in [Pendiente, Enviada, Entregada, Cancelada] {
            assert_eq!(available_statuses(status, Role::Usuario), vec![status]);
        }
    }

    #[test]
    fn test_no_duplicates_in_result() {
        for role in Role::ALL {
            for status in StatusReserva::ALL {
                let mut available = available_statuses(status, role);
                let len = available.len();
                available.sort();
                available.dedup();
                assert_eq!(available.len(), len);
            }
        }
    }

    #[test]
    fn test_can_transition() {
        assert!(can_transition(Pendiente, Confirmada, Role::AdminPrincipal));
        assert!(!can_transition(Pendiente, Enviada, Role::AdminPrincipal));
        assert!(!can_transition(Pendiente, Pendiente, Role::AdminPrincipal));
        assert!(can_transition(Confirmada, Enviada, Role::Usuario));
        assert!(!can_transition(Confirmada, Cancelada, Role::Usuario));
    }

    #[test]
    fn test_ensure_transition_errors() {
        use reservas_core::error::ErrorKind;

        let err = ensure_transition(Entregada, Cancelada, Role::AdminPrincipal)
            .expect_err("terminal");
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = ensure_transition(Pendiente, Confirmada, Role::Usuario).expect_err("role");
        assert_eq!(err.kind, ErrorKind::Authorization);

        assert!(ensure_transition(Enviada, Entregada, Role::AdminPrincipal).is_ok());
    }
}
