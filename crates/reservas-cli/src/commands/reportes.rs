//! Aggregated report commands (admin).

use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use reservas_core::error::AppError;
use reservas_core::types::{PeriodoId, UserId};
use reservas_entity::dashboard::ReportesData;
use reservas_entity::filters::ReportesFilters;
use reservas_entity::format::{capitalize, format_date, format_libras, format_percentage};

use super::Context;
use crate::output::{self, OutputFormat};

/// Report section to print
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Seccion {
    /// Global totals
    #[default]
    Resumen,
    /// Totals per user
    Usuarios,
    /// Totals per month
    Meses,
    /// Totals per period
    Periodos,
    /// Totals per origin region
    Estados,
}

/// Arguments for the reportes command
#[derive(Debug, Args)]
pub struct ReportesArgs {
    /// Section to print
    #[arg(value_enum, default_value = "resumen")]
    pub seccion: Seccion,
    /// Earliest date (YYYY-MM-DD)
    #[arg(long)]
    pub desde: Option<String>,
    /// Latest date (YYYY-MM-DD)
    #[arg(long)]
    pub hasta: Option<String>,
    /// Restrict to one user
    #[arg(long)]
    pub usuario: Option<UserId>,
    /// Restrict to one origin region
    #[arg(long)]
    pub estado: Option<String>,
    /// Restrict to one period
    #[arg(long)]
    pub periodo: Option<PeriodoId>,
}

impl ReportesArgs {
    fn filters(&self) -> ReportesFilters {
        ReportesFilters {
            start_date: self.desde.clone(),
            end_date: self.hasta.clone(),
            user_id: self.usuario,
            estado: self.estado.clone(),
            periodo_id: self.periodo,
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct UsuarioRow {
    usuario: String,
    email: String,
    libras: String,
    reservas: u64,
    periodos: u64,
    porcentaje: String,
}

#[derive(Debug, Serialize, Tabled)]
struct MesRow {
    mes: String,
    libras: String,
    reservas: u64,
    usuarios: u64,
    periodos: u64,
}

#[derive(Debug, Serialize, Tabled)]
struct PeriodoRow {
    periodo: i64,
    fecha_envio: String,
    totales: String,
    reservadas: String,
    ocupacion: String,
    reservas: u64,
    usuarios: u64,
}

#[derive(Debug, Serialize, Tabled)]
struct EstadoRow {
    estado: String,
    libras: String,
    reservas: u64,
    usuarios: u64,
    porcentaje: String,
}

/// Execute the reportes command
pub async fn execute(args: &ReportesArgs, ctx: &Context) -> Result<(), AppError> {
    let client = ctx.client()?;
    let data = client.dashboard().reportes(&args.filters()).await?;
    print_section(&data, args.seccion, ctx.format);
    Ok(())
}

fn print_section(data: &ReportesData, seccion: Seccion, format: OutputFormat) {
    match seccion {
        Seccion::Resumen => {
            let r = &data.resumen;
            let top = data
                .top_usuario()
                .map(|u| format!("{} ({})", u.user_name, format_libras(u.total_libras)));
            output::print_record(
                r,
                &[
                    ("Libras totales", format_libras(r.total_libras_global)),
                    ("Reservas", r.total_reservas_global.to_string()),
                    ("Usuarios", r.total_usuarios_unicos.to_string()),
                    ("Periodos", r.total_periodos.to_string()),
                    ("Promedio por usuario", format_libras(r.promedio_libras_por_usuario)),
                    ("Promedio por periodo", format_libras(r.promedio_libras_por_periodo)),
                    ("Mayor usuario", output::or_dash(top)),
                ],
                format,
            );
        }
        Seccion::Usuarios => {
            let rows: Vec<UsuarioRow> = data
                .por_usuario
                .iter()
                .map(|u| UsuarioRow {
                    usuario: u.user_name.clone(),
                    email: u.user_email.clone(),
                    libras: format_libras(u.total_libras),
                    reservas: u.total_reservas,
                    periodos: u.periodo_count,
                    porcentaje: format_percentage(u.porcentaje_del_total),
                })
                .collect();
            output::print_list(&rows, format);
        }
        Seccion::Meses => {
            let rows: Vec<MesRow> = data
                .por_mes
                .iter()
                .map(|m| MesRow {
                    mes: format!("{} {}", capitalize(&m.mes), m.year),
                    libras: format_libras(m.total_libras),
                    reservas: m.total_reservas,
                    usuarios: m.total_usuarios,
                    periodos: m.periodos,
                })
                .collect();
            output::print_list(&rows, format);
        }
        Seccion::Periodos => {
            let rows: Vec<PeriodoRow> = data
                .por_periodo
                .iter()
                .map(|p| PeriodoRow {
                    periodo: p.periodo_id.get(),
                    fecha_envio: format_date(Some(&p.fecha_envio)),
                    totales: format_libras(p.libras_totales),
                    reservadas: format_libras(p.libras_reservadas),
                    ocupacion: format_percentage(p.porcentaje_ocupacion),
                    reservas: p.total_reservas,
                    usuarios: p.total_usuarios,
                })
                .collect();
            output::print_list(&rows, format);
        }
        Seccion::Estados => {
            let rows: Vec<EstadoRow> = data
                .por_estado
                .iter()
                .map(|e| EstadoRow {
                    estado: e.estado.clone(),
                    libras: format_libras(e.total_libras),
                    reservas: e.total_reservas,
                    usuarios: e.total_usuarios,
                    porcentaje: format_percentage(e.porcentaje_del_total),
                })
                .collect();
            output::print_list(&rows, format);
        }
    }
}
