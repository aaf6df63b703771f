//! Reservation and period request bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::reserva::StatusReserva;

/// Body of `POST /reservas`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReservaDto {
    #[validate(range(min = 0.01, max = 10000.0, message = "Las libras deben estar entre 0.01 y 10000"))]
    pub libras: f64,
    #[validate(custom(function = "super::rules::validate_iso_date"))]
    pub fecha: String,
    #[validate(custom(function = "super::rules::validate_not_blank"))]
    pub estado: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000, message = "Las observaciones no pueden exceder 1000 caracteres"))]
    pub observaciones: Option<String>,
}

/// Body of `PATCH /reservas/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateReservaDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.01, max = 10000.0, message = "Las libras deben estar entre 0.01 y 10000"))]
    pub libras: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "super::rules::validate_iso_date"))]
    pub fecha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "super::rules::validate_not_blank"))]
    pub estado: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000, message = "Las observaciones no pueden exceder 1000 caracteres"))]
    pub observaciones: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusReserva>,
}

/// Body of `PATCH /reservas/{id}/status`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpdateStatusDto {
    pub status: StatusReserva,
}

/// Body of `POST /periodos`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePeriodoDto {
    #[validate(range(min = 1.0, max = 100000.0, message = "Las libras totales deben estar entre 1 y 100000"))]
    pub libras_totales: f64,
    #[validate(custom(function = "super::rules::validate_iso_date"))]
    pub fecha_envio: String,
}

/// Body of `PATCH /periodos/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePeriodoDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1.0, max = 100000.0, message = "Las libras totales deben estar entre 1 y 100000"))]
    pub libras_totales: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "super::rules::validate_iso_date"))]
    pub fecha_envio: Option<String>,
}
