//! Unified application error types for the reservation client.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// Authentication failed (missing credentials, expired session, etc.).
    Authentication,
    /// The caller does not have permission to perform the action.
    Authorization,
    /// Input validation failed, locally or on the server.
    Validation,
    /// A conflict occurred (duplicate email, overlapping period, etc.).
    Conflict,
    /// A rate limit was exceeded.
    RateLimit,
    /// The server could not be reached or the connection failed.
    Network,
    /// The server answered with a 5xx status.
    ExternalService,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// A configuration error occurred.
    Configuration,
    /// Local credential storage failed.
    Storage,
    /// An unexpected client-side error occurred.
    Internal,
}

impl ErrorKind {
    /// Map an HTTP status code onto an error kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::Validation,
            401 => Self::Authentication,
            403 => Self::Authorization,
            404 => Self::NotFound,
            409 => Self::Conflict,
            429 => Self::RateLimit,
            500..=599 => Self::ExternalService,
            _ => Self::Internal,
        }
    }

    /// Generic user-facing message shown when the server gave none.
    pub fn generic_message(&self) -> &'static str {
        match self {
            Self::Network => "Error de conexión. Verifica tu internet.",
            Self::Authentication => "No autorizado. Inicia sesión nuevamente.",
            Self::Authorization => "No tienes permisos para realizar esta acción.",
            Self::NotFound => "Recurso no encontrado.",
            Self::Validation => "Por favor verifica los datos ingresados.",
            Self::ExternalService => "Error del servidor. Inténtalo más tarde.",
            _ => "Ha ocurrido un error. Inténtalo de nuevo.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Authentication => write!(f, "AUTHENTICATION"),
            Self::Authorization => write!(f, "AUTHORIZATION"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::RateLimit => write!(f, "RATE_LIMIT"),
            Self::Network => write!(f, "NETWORK"),
            Self::ExternalService => write!(f, "EXTERNAL_SERVICE"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout the workspace.
///
/// HTTP failures carry the status they came from so callers can tell a
/// rejected credential apart from a rejected payload.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// HTTP status of the response that produced this error, if any.
    pub status: Option<u16>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            source: Some(Box::new(source)),
        }
    }

    /// Build an error from an HTTP status and the best message available.
    ///
    /// Blank server messages fall back to the generic message of the kind.
    pub fn from_status(status: u16, server_message: Option<String>) -> Self {
        let kind = ErrorKind::from_status(status);
        let message = server_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| kind.generic_message().to_string());
        Self {
            kind,
            message,
            status: Some(status),
            source: None,
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Create the error returned when the session can no longer be renewed.
    pub fn session_expired() -> Self {
        Self::new(
            ErrorKind::Authentication,
            ErrorKind::Authentication.generic_message(),
        )
    }

    /// Create an authorization error.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    /// Whether the local session is gone and the user has to log in again.
    ///
    /// Only raised client-side when credentials could not be renewed. A
    /// `401` answered by the server (wrong password, rejected replay) keeps
    /// its status and does not count.
    pub fn is_login_required(&self) -> bool {
        self.kind == ErrorKind::Authentication && self.status.is_none()
    }

    /// Whether the server rejected the credential of the request.
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            status: self.status,
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut parts: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{field}: {msg}"),
                    None => format!("{field}: {}", e.code),
                })
            })
            .collect();
        parts.sort();

        let message = if parts.is_empty() {
            ErrorKind::Validation.generic_message().to_string()
        } else {
            parts.join("; ")
        };
        Self::new(ErrorKind::Validation, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Authentication);
        assert_eq!(ErrorKind::from_status(403), ErrorKind::Authorization);
        assert_eq!(ErrorKind::from_status(422), ErrorKind::Validation);
        assert_eq!(ErrorKind::from_status(503), ErrorKind::ExternalService);
        assert_eq!(ErrorKind::from_status(418), ErrorKind::Internal);
    }

    #[test]
    fn test_server_message_preferred() {
        let err = AppError::from_status(409, Some("El email ya existe".to_string()));
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "El email ya existe");
        assert_eq!(err.status, Some(409));
    }

    #[test]
    fn test_blank_message_falls_back_to_generic() {
        let err = AppError::from_status(404, Some("   ".to_string()));
        assert_eq!(err.message, "Recurso no encontrado.");

        let err = AppError::from_status(500, None);
        assert_eq!(err.message, "Error del servidor. Inténtalo más tarde.");
    }

    #[test]
    fn test_clone_keeps_status() {
        let err = AppError::from_status(401, None);
        let cloned = err.clone();
        assert!(cloned.is_unauthorized());
        assert!(!cloned.is_login_required());
    }

    #[test]
    fn test_login_required_only_for_lost_session() {
        assert!(AppError::session_expired().is_login_required());
        assert!(AppError::session_expired().clone().is_login_required());

        let wrong_password = AppError::from_status(401, Some("Credenciales inválidas".to_string()));
        assert_eq!(wrong_password.kind, ErrorKind::Authentication);
        assert!(!wrong_password.is_login_required());
    }
}
