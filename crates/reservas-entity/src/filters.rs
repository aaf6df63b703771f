//! Query filters for the list endpoints.
//!
//! Every filter renders to camelCase query pairs; absent values are omitted.

use std::fmt;
use std::str::FromStr;

use reservas_core::error::AppError;
use reservas_core::types::{PageRequest, PeriodoId, SortDirection, UserId};

use crate::reserva::StatusReserva;
use crate::user::Role;

type QueryPairs = Vec<(String, String)>;

fn push<T: ToString>(pairs: &mut QueryPairs, key: &str, value: &Option<T>) {
    if let Some(v) = value {
        pairs.push((key.to_string(), v.to_string()));
    }
}

fn push_page(pairs: &mut QueryPairs, page: &Option<PageRequest>) {
    if let Some(p) = page {
        pairs.extend(p.query_pairs());
    }
}

/// Filters for `GET /reservas`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservaFilters {
    pub page: Option<PageRequest>,
    pub user_id: Option<UserId>,
    pub status: Option<StatusReserva>,
    pub estado: Option<String>,
    pub periodo_id: Option<PeriodoId>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ReservaFilters {
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push_page(&mut pairs, &self.page);
        push(&mut pairs, "userId", &self.user_id);
        push(&mut pairs, "status", &self.status);
        push(&mut pairs, "estado", &self.estado);
        push(&mut pairs, "periodoId", &self.periodo_id);
        push(&mut pairs, "startDate", &self.start_date);
        push(&mut pairs, "endDate", &self.end_date);
        pairs
    }
}

/// Filters for `GET /users`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilters {
    pub page: Option<PageRequest>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    /// Matches name or email.
    pub search: Option<String>,
}

impl UserFilters {
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push_page(&mut pairs, &self.page);
        push(&mut pairs, "role", &self.role);
        push(&mut pairs, "isActive", &self.is_active);
        push(&mut pairs, "search", &self.search);
        pairs
    }
}

/// Filters for `GET /periodos`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodoFilters {
    pub page: Option<PageRequest>,
    pub is_active: Option<bool>,
}

impl PeriodoFilters {
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push_page(&mut pairs, &self.page);
        push(&mut pairs, "isActive", &self.is_active);
        pairs
    }
}

/// Sort key accepted by `GET /dashboard/history`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoricoOrderBy {
    FechaArchivado,
    FechaEnvio,
    LibrasTotales,
    TotalReservas,
}

impl HistoricoOrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FechaArchivado => "fechaArchivado",
            Self::FechaEnvio => "fechaEnvio",
            Self::LibrasTotales => "librasTotales",
            Self::TotalReservas => "totalReservas",
        }
    }
}

impl fmt::Display for HistoricoOrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoricoOrderBy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fechaArchivado" | "fecha-archivado" => Ok(Self::FechaArchivado),
            "fechaEnvio" | "fecha-envio" => Ok(Self::FechaEnvio),
            "librasTotales" | "libras-totales" => Ok(Self::LibrasTotales),
            "totalReservas" | "total-reservas" => Ok(Self::TotalReservas),
            _ => Err(AppError::validation(format!(
                "Campo de ordenamiento inválido: '{s}'"
            ))),
        }
    }
}

/// Filters for `GET /dashboard/history`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricoFilters {
    pub page: Option<PageRequest>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub order_by: Option<HistoricoOrderBy>,
    pub order_direction: Option<SortDirection>,
}

impl HistoricoFilters {
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push_page(&mut pairs, &self.page);
        push(&mut pairs, "startDate", &self.start_date);
        push(&mut pairs, "endDate", &self.end_date);
        push(&mut pairs, "orderBy", &self.order_by);
        push(&mut pairs, "orderDirection", &self.order_direction);
        pairs
    }
}

/// Filters for `GET /dashboard/reportes`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportesFilters {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub user_id: Option<UserId>,
    pub estado: Option<String>,
    pub periodo_id: Option<PeriodoId>,
}

impl ReportesFilters {
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push(&mut pairs, "startDate", &self.start_date);
        push(&mut pairs, "endDate", &self.end_date);
        push(&mut pairs, "userId", &self.user_id);
        push(&mut pairs, "estado", &self.estado);
        push(&mut pairs, "periodoId", &self.periodo_id);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(pairs: &QueryPairs) -> Vec<&str> {
        pairs.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn test_empty_filters_produce_no_pairs() {
        assert!(ReservaFilters::default().query_pairs().is_empty());
        assert!(UserFilters::default().query_pairs().is_empty());
        assert!(ReportesFilters::default().query_pairs().is_empty());
    }

    #[test]
    fn test_reserva_filters_camel_case() {
        let filters = ReservaFilters {
            page: Some(PageRequest::new(2, 50)),
            status: Some(StatusReserva::Confirmada),
            periodo_id: Some(PeriodoId::new(7)),
            ..Default::default()
        };
        let pairs = filters.query_pairs();
        assert_eq!(keys(&pairs), vec!["page", "limit", "status", "periodoId"]);
        assert_eq!(pairs[2].1, "CONFIRMADA");
        assert_eq!(pairs[3].1, "7");
    }

    #[test]
    fn test_user_filters_role_and_active() {
        let filters = UserFilters {
            role: Some(Role::AdminPrincipal),
            is_active: Some(true),
            ..Default::default()
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("role".to_string(), "ADMIN_PRINCIPAL".to_string()),
                ("isActive".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_historico_ordering() {
        let filters = HistoricoFilters {
            order_by: Some("libras-totales".parse().expect("order by")),
            order_direction: Some(SortDirection::Asc),
            ..Default::default()
        };
        let pairs = filters.query_pairs();
        assert_eq!(pairs[0], ("orderBy".into(), "librasTotales".into()));
        assert_eq!(pairs[1], ("orderDirection".into(), "asc".into()));
        assert!("tamaño".parse::<HistoricoOrderBy>().is_err());
    }
}
