//! Dashboard statistics and archived-period commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use reservas_core::error::AppError;
use reservas_core::types::{HistoricoPeriodoId, SortDirection};
use reservas_entity::dashboard::{DashboardStats, PeriodoStats};
use reservas_entity::filters::{HistoricoFilters, HistoricoOrderBy};
use reservas_entity::format::{format_date, format_datetime, format_libras, format_percentage};
use reservas_entity::periodo::{HistoricoPeriodo, HistoricoReserva};
use reservas_entity::reserva::StatusReserva;

use super::{Context, PageArgs};
use crate::output::{self, OutputFormat};

/// Arguments for dashboard commands
#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Dashboard subcommand
    #[command(subcommand)]
    pub command: DashboardCommand,
}

/// Dashboard subcommands
#[derive(Debug, Subcommand)]
pub enum DashboardCommand {
    /// Occupancy and status breakdown of open periods
    Stats,
    /// Archived periods
    History {
        /// Earliest archive date (YYYY-MM-DD)
        #[arg(long)]
        desde: Option<String>,
        /// Latest archive date (YYYY-MM-DD)
        #[arg(long)]
        hasta: Option<String>,
        /// Sort key: fecha-archivado, fecha-envio, libras-totales, total-reservas
        #[arg(long)]
        order_by: Option<HistoricoOrderBy>,
        /// Sort direction: asc or desc
        #[arg(long)]
        order: Option<SortDirection>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Reservations archived with a period
    HistoryReservas {
        /// Archived period ID
        id: HistoricoPeriodoId,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct PeriodoStatsRow {
    periodo: i64,
    fecha_envio: String,
    reservadas: String,
    disponibles: String,
    ocupacion: String,
    en_central: String,
    en_transito: String,
    pendientes: String,
    reservas: u64,
}

impl From<&PeriodoStats> for PeriodoStatsRow {
    fn from(p: &PeriodoStats) -> Self {
        Self {
            periodo: p.periodo.id.get(),
            fecha_envio: format_date(Some(&p.periodo.fecha_envio)),
            reservadas: format_libras(p.libras_reservadas),
            disponibles: format_libras(p.libras_disponibles),
            ocupacion: format_percentage(p.porcentaje_ocupacion),
            en_central: format_libras(p.libras_en_central),
            en_transito: format_libras(p.libras_en_transito),
            pendientes: format_libras(p.libras_pendientes),
            reservas: p.total_reservas,
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct StatusRow {
    periodo: i64,
    status: String,
    en_transito: String,
    reservas: u64,
}

/// One row per period and status, zero counts included.
fn status_rows(periodos: &[PeriodoStats]) -> Vec<StatusRow> {
    periodos
        .iter()
        .flat_map(|p| {
            StatusReserva::ALL.iter().map(move |status| StatusRow {
                periodo: p.periodo.id.get(),
                status: status.label().to_string(),
                en_transito: if status.is_in_transit() { "Sí" } else { "No" }.to_string(),
                reservas: p.count_for(*status),
            })
        })
        .collect()
}

#[derive(Debug, Serialize, Tabled)]
struct HistoricoRow {
    id: i64,
    fecha_envio: String,
    libras_totales: String,
    reservadas: String,
    ocupacion: String,
    reservas: u64,
    usuarios: u64,
    archivado: String,
}

impl From<&HistoricoPeriodo> for HistoricoRow {
    fn from(h: &HistoricoPeriodo) -> Self {
        Self {
            id: h.id.get(),
            fecha_envio: format_date(Some(&h.fecha_envio)),
            libras_totales: format_libras(h.libras_totales),
            reservadas: format_libras(h.libras_reservadas),
            ocupacion: format_percentage(h.porcentaje_ocupacion()),
            reservas: h.total_reservas,
            usuarios: h.total_usuarios,
            archivado: format_datetime(h.fecha_archivado),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct HistoricoReservaRow {
    original: i64,
    usuario: String,
    libras: String,
    fecha: String,
    estado: String,
    status: String,
}

impl From<&HistoricoReserva> for HistoricoReservaRow {
    fn from(r: &HistoricoReserva) -> Self {
        Self {
            original: r.reserva_original_id.get(),
            usuario: r.user_name.clone(),
            libras: format_libras(r.libras),
            fecha: format_date(Some(&r.fecha)),
            estado: r.estado.clone(),
            status: r.status.label().to_string(),
        }
    }
}

/// Execute dashboard commands
pub async fn execute(args: &DashboardArgs, ctx: &Context) -> Result<(), AppError> {
    let client = ctx.client()?;
    let dashboard = client.dashboard();

    match &args.command {
        DashboardCommand::Stats => {
            let stats = dashboard.stats().await?;
            print_stats(&stats, ctx.format);
        }
        DashboardCommand::History {
            desde,
            hasta,
            order_by,
            order,
            page,
        } => {
            let filters = HistoricoFilters {
                page: Some(ctx.page(*page)),
                start_date: desde.clone(),
                end_date: hasta.clone(),
                order_by: *order_by,
                order_direction: *order,
            };
            let result = dashboard.history(&filters).await?;
            let rows: Vec<HistoricoRow> = result.data.iter().map(HistoricoRow::from).collect();
            output::print_page(&rows, &result.pagination, ctx.format);
        }
        DashboardCommand::HistoryReservas { id } => {
            let reservas = dashboard.history_reservas(*id).await?;
            let rows: Vec<HistoricoReservaRow> = reservas.iter().map(HistoricoReservaRow::from).collect();
            output::print_list(&rows, ctx.format);
        }
    }

    Ok(())
}

fn print_stats(stats: &DashboardStats, format: OutputFormat) {
    if format == OutputFormat::Json {
        output::print_json(stats);
        return;
    }

    output::print_kv("Libras reservadas", &format_libras(stats.total_libras_reservadas));
    output::print_kv("Libras disponibles", &format_libras(stats.total_libras_disponibles));
    output::print_kv("Reservas", &stats.total_reservas.to_string());
    output::print_kv("Usuarios con reservas", &stats.total_usuarios_con_reservas.to_string());
    println!();

    let rows: Vec<PeriodoStatsRow> = stats.periodos.iter().map(PeriodoStatsRow::from).collect();
    output::print_list(&rows, format);

    let status_rows = status_rows(&stats.periodos);
    if !status_rows.is_empty() {
        println!();
        output::print_list(&status_rows, format);
    }
}
