//! Response envelopes returned by every API endpoint.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Standard `{success, data, message}` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the server considers the call successful.
    pub success: bool,
    /// Payload, absent on most mutations and failures.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Machine-oriented error text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Best message the server gave: `message`, then `error`.
    pub fn server_message(&self) -> Option<String> {
        self.message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .or_else(|| self.error.clone().filter(|e| !e.trim().is_empty()))
    }

    /// Extract the payload, failing on `success: false` or a missing body.
    pub fn into_data(self) -> AppResult<T> {
        if !self.success {
            let message = self.server_message();
            return Err(AppError::validation(message.unwrap_or_else(|| {
                crate::error::ErrorKind::Internal
                    .generic_message()
                    .to_string()
            })));
        }
        self.data
            .ok_or_else(|| AppError::serialization("Response envelope has no data"))
    }

    /// Check `success` and return the message, ignoring any payload.
    pub fn into_message(self) -> AppResult<Option<String>> {
        if !self.success {
            return Err(AppError::validation(self.server_message().unwrap_or_else(
                || {
                    crate::error::ErrorKind::Internal
                        .generic_message()
                        .to_string()
                },
            )));
        }
        Ok(self.message)
    }
}

/// Loose shape used to pull a message out of a failed response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Machine-oriented error text.
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Parse an error body, tolerating non-JSON payloads.
    pub fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Best message available: `message`, then `error`.
    pub fn best_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.trim().is_empty())
            .or(self.error.filter(|e| !e.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_data_success() {
        let resp: ApiResponse<u32> =
            serde_json::from_str(r#"{"success":true,"data":5}"#).expect("parse");
        assert_eq!(resp.into_data().expect("data"), 5);
    }

    #[test]
    fn test_into_data_failure_uses_message() {
        let resp: ApiResponse<u32> =
            serde_json::from_str(r#"{"success":false,"message":"Periodo cerrado"}"#)
                .expect("parse");
        let err = resp.into_data().expect_err("should fail");
        assert_eq!(err.message, "Periodo cerrado");
    }

    #[test]
    fn test_error_body_prefers_message_then_error() {
        let body = ApiErrorBody::parse(br#"{"error":"Unauthorized"}"#);
        assert_eq!(body.best_message().as_deref(), Some("Unauthorized"));

        let body = ApiErrorBody::parse(b"<html>bad gateway</html>");
        assert!(body.best_message().is_none());
    }
}
