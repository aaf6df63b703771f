//! Mapping of transport failures into [`AppError`].

use reservas_core::error::{AppError, ErrorKind};

/// Convert a `reqwest` failure into an application error.
///
/// Connection, timeout and request-building failures are network errors;
/// a body that cannot be decoded is a serialization error.
pub fn from_reqwest(err: reqwest::Error) -> AppError {
    let kind = if err.is_decode() {
        ErrorKind::Serialization
    } else if err.is_builder() {
        ErrorKind::Internal
    } else {
        ErrorKind::Network
    };

    let message = if err.is_timeout() {
        "La solicitud excedió el tiempo de espera".to_string()
    } else {
        kind.generic_message().to_string()
    };

    let status = err.status().map(|s| s.as_u16());
    let mut app = AppError::with_source(kind, message, err);
    app.status = status;
    app
}

/// Decode a JSON body, mapping failures to a serialization error.
pub fn decode<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            "Respuesta inesperada del servidor",
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_failure_is_serialization() {
        let err = decode::<serde_json::Value>(b"<html>").expect_err("not json");
        assert_eq!(err.kind, ErrorKind::Serialization);
        assert!(err.source.is_some());
    }
}
