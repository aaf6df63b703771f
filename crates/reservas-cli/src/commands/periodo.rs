//! Capacity period CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use reservas_core::error::AppError;
use reservas_core::types::PeriodoId;
use reservas_entity::dto::{CreatePeriodoDto, UpdatePeriodoDto};
use reservas_entity::filters::PeriodoFilters;
use reservas_entity::format::{format_date, format_datetime, format_libras, format_percentage};
use reservas_entity::periodo::Periodo;

use super::{Context, PageArgs};
use crate::output;
use crate::prompt;

/// Arguments for periodo commands
#[derive(Debug, Args)]
pub struct PeriodoArgs {
    /// Periodo subcommand
    #[command(subcommand)]
    pub command: PeriodoCommand,
}

/// Periodo subcommands
#[derive(Debug, Subcommand)]
pub enum PeriodoCommand {
    /// List periods
    List {
        /// Only active (true) or inactive (false) periods
        #[arg(long)]
        activo: Option<bool>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show the active period and its occupancy
    Active,
    /// Show one period
    Show {
        /// Period ID
        id: PeriodoId,
    },
    /// Open a new period (admin)
    Create {
        /// Total capacity in libras
        #[arg(short, long)]
        libras: f64,
        /// Shipping date (YYYY-MM-DD)
        #[arg(long)]
        fecha_envio: String,
    },
    /// Edit a period (admin)
    Update {
        /// Period ID
        id: PeriodoId,
        /// Total capacity in libras
        #[arg(short, long)]
        libras: Option<f64>,
        /// Shipping date (YYYY-MM-DD)
        #[arg(long)]
        fecha_envio: Option<String>,
    },
    /// Close a period and archive its reservations (admin)
    Close {
        /// Period ID
        id: PeriodoId,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Period display row for table output
#[derive(Debug, Serialize, Tabled)]
struct PeriodoRow {
    id: i64,
    libras_totales: String,
    fecha_envio: String,
    activo: String,
    reservas: String,
    creado: String,
}

impl From<&Periodo> for PeriodoRow {
    fn from(p: &Periodo) -> Self {
        Self {
            id: p.id.get(),
            libras_totales: format_libras(p.libras_totales),
            fecha_envio: format_date(Some(&p.fecha_envio)),
            activo: if p.is_active { "Sí" } else { "No" }.to_string(),
            reservas: output::or_dash(p.reservas_count()),
            creado: format_datetime(p.created_at),
        }
    }
}

/// Execute periodo commands
pub async fn execute(args: &PeriodoArgs, ctx: &Context) -> Result<(), AppError> {
    let client = ctx.client()?;
    let periodos = client.periodos();

    match &args.command {
        PeriodoCommand::List { activo, page } => {
            let filters = PeriodoFilters {
                page: Some(ctx.page(*page)),
                is_active: *activo,
            };
            let result = periodos.list(&filters).await?;
            let rows: Vec<PeriodoRow> = result.data.iter().map(PeriodoRow::from).collect();
            output::print_page(&rows, &result.pagination, ctx.format);
        }
        PeriodoCommand::Active => {
            let activo = periodos.active().await?;
            output::print_record(
                &activo,
                &[
                    ("ID", activo.periodo.id.to_string()),
                    ("Fecha de envío", format_date(Some(&activo.periodo.fecha_envio))),
                    ("Libras totales", format_libras(activo.periodo.libras_totales)),
                    ("Reservadas", format_libras(activo.libras_reservadas)),
                    ("Disponibles", format_libras(activo.libras_disponibles)),
                    ("Ocupación", format_percentage(activo.porcentaje_ocupacion)),
                ],
                ctx.format,
            );
        }
        PeriodoCommand::Show { id } => {
            let periodo = periodos.get(*id).await?;
            output::print_record(
                &periodo,
                &[
                    ("ID", periodo.id.to_string()),
                    ("Fecha de envío", format_date(Some(&periodo.fecha_envio))),
                    ("Libras totales", format_libras(periodo.libras_totales)),
                    ("Activo", if periodo.is_active { "Sí" } else { "No" }.to_string()),
                    ("Reservas", output::or_dash(periodo.reservas_count())),
                    ("Creado", format_datetime(periodo.created_at)),
                ],
                ctx.format,
            );
        }
        PeriodoCommand::Create {
            libras,
            fecha_envio,
        } => {
            let dto = CreatePeriodoDto {
                libras_totales: *libras,
                fecha_envio: fecha_envio.clone(),
            };
            let periodo = periodos.create(&dto).await?;
            output::print_success(&format!(
                "Periodo #{} creado con {} para el {}",
                periodo.id,
                format_libras(periodo.libras_totales),
                format_date(Some(&periodo.fecha_envio))
            ));
        }
        PeriodoCommand::Update {
            id,
            libras,
            fecha_envio,
        } => {
            if libras.is_none() && fecha_envio.is_none() {
                return Err(AppError::validation("No hay cambios que guardar"));
            }
            let dto = UpdatePeriodoDto {
                libras_totales: *libras,
                fecha_envio: fecha_envio.clone(),
            };
            let periodo = periodos.update(*id, &dto).await?;
            output::print_success(&format!("Periodo #{} actualizado", periodo.id));
        }
        PeriodoCommand::Close { id, yes } => {
            let prompt_text = format!("¿Cerrar el periodo #{id}? Sus reservas pasarán al histórico");
            if !prompt::confirm(&prompt_text, *yes)? {
                output::print_warning("Cancelado");
                return Ok(());
            }
            let historico = periodos.close(*id).await?;
            output::print_success(&format!(
                "Periodo cerrado: {} reservas de {} usuarios archivadas ({} de ocupación)",
                historico.total_reservas,
                historico.total_usuarios,
                format_percentage(historico.porcentaje_ocupacion())
            ));
        }
    }

    Ok(())
}
