//! Reservation CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use reservas_core::error::AppError;
use reservas_core::types::{PeriodoId, ReservaId, UserId};
use reservas_entity::dto::rules::ESTADOS_MEXICO;
use reservas_entity::dto::{CreateReservaDto, UpdateReservaDto};
use reservas_entity::filters::ReservaFilters;
use reservas_entity::format::{format_date, format_datetime, format_libras, truncate_text};
use reservas_entity::reserva::{Reserva, StatusReserva, ensure_transition};

use super::{Context, PageArgs};
use crate::output;
use crate::prompt;

/// Arguments for reserva commands
#[derive(Debug, Args)]
pub struct ReservaArgs {
    /// Reserva subcommand
    #[command(subcommand)]
    pub command: ReservaCommand,
}

/// List filters
#[derive(Debug, Clone, Default, Args)]
pub struct ReservaFilterArgs {
    /// Filter by status
    #[arg(short, long)]
    pub status: Option<StatusReserva>,
    /// Filter by period ID
    #[arg(long)]
    pub periodo: Option<PeriodoId>,
    /// Filter by owner (admin)
    #[arg(long)]
    pub usuario: Option<UserId>,
    /// Filter by origin region
    #[arg(long)]
    pub estado: Option<String>,
    /// Earliest date (YYYY-MM-DD)
    #[arg(long)]
    pub desde: Option<String>,
    /// Latest date (YYYY-MM-DD)
    #[arg(long)]
    pub hasta: Option<String>,
}

/// Reserva subcommands
#[derive(Debug, Subcommand)]
pub enum ReservaCommand {
    /// List reservations
    List {
        #[command(flatten)]
        filters: ReservaFilterArgs,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one reservation with its timeline
    Show {
        /// Reservation ID
        id: ReservaId,
    },
    /// Create a reservation in the active period
    Create {
        /// Quantity in libras
        #[arg(short, long)]
        libras: Option<f64>,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        fecha: Option<String>,
        /// Origin region
        #[arg(long)]
        estado: Option<String>,
        /// Notes
        #[arg(long)]
        observaciones: Option<String>,
    },
    /// Edit a reservation
    Update {
        /// Reservation ID
        id: ReservaId,
        #[arg(short, long)]
        libras: Option<f64>,
        #[arg(long)]
        fecha: Option<String>,
        #[arg(long)]
        estado: Option<String>,
        #[arg(long)]
        observaciones: Option<String>,
    },
    /// Move a reservation to another status
    Status {
        /// Reservation ID
        id: ReservaId,
        /// Target status
        status: StatusReserva,
    },
    /// Show the statuses you may select for a reservation
    Transitions {
        /// Reservation ID
        id: ReservaId,
    },
    /// Delete a reservation
    Delete {
        /// Reservation ID
        id: ReservaId,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

impl ReservaFilterArgs {
    fn to_filters(&self, page: reservas_core::types::PageRequest) -> ReservaFilters {
        ReservaFilters {
            page: Some(page),
            user_id: self.usuario,
            status: self.status,
            estado: self.estado.clone(),
            periodo_id: self.periodo,
            start_date: self.desde.clone(),
            end_date: self.hasta.clone(),
        }
    }
}

/// Reservation display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ReservaRow {
    id: i64,
    libras: String,
    fecha: String,
    estado: String,
    status: String,
    usuario: String,
    observaciones: String,
}

impl From<&Reserva> for ReservaRow {
    fn from(r: &Reserva) -> Self {
        Self {
            id: r.id.get(),
            libras: format_libras(r.libras),
            fecha: format_date(Some(&r.fecha)),
            estado: r.estado.clone(),
            status: r.status.label().to_string(),
            usuario: output::or_dash(r.user.as_ref().map(|u| u.name.as_str())),
            observaciones: r
                .observaciones
                .as_deref()
                .map(|o| truncate_text(o, 30))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute reserva commands
pub async fn execute(args: &ReservaArgs, ctx: &Context) -> Result<(), AppError> {
    let client = ctx.client()?;
    let reservas = client.reservas();

    match &args.command {
        ReservaCommand::List { filters, page } => {
            let result = reservas.list(&filters.to_filters(ctx.page(*page))).await?;
            let rows: Vec<ReservaRow> = result.data.iter().map(ReservaRow::from).collect();
            output::print_page(&rows, &result.pagination, ctx.format);
        }
        ReservaCommand::Show { id } => {
            let reserva = reservas.get(*id).await?;
            print_reserva(&reserva, ctx);
        }
        ReservaCommand::Create {
            libras,
            fecha,
            estado,
            observaciones,
        } => {
            let activo = client.periodos().active().await?;
            let libras = match libras {
                Some(l) => *l,
                None => prompt::text_or_prompt(&None, "Libras")?
                    .trim()
                    .parse()
                    .map_err(|_| AppError::validation("Las libras deben ser un número"))?,
            };
            if !activo.can_fit(libras.into()) {
                return Err(AppError::validation(format!(
                    "Solo quedan {} disponibles en el periodo activo",
                    format_libras(activo.libras_disponibles)
                )));
            }

            let dto = CreateReservaDto {
                libras,
                fecha: fecha.clone().unwrap_or_else(|| activo.periodo.fecha_envio.clone()),
                estado: prompt::select_or_prompt(estado, "Estado de origen", &ESTADOS_MEXICO)?,
                observaciones: observaciones.clone(),
            };
            let reserva = reservas.create(&dto).await?;
            output::print_success(&format!(
                "Reserva #{} creada por {}",
                reserva.id,
                format_libras(reserva.libras)
            ));
        }
        ReservaCommand::Update {
            id,
            libras,
            fecha,
            estado,
            observaciones,
        } => {
            let dto = UpdateReservaDto {
                libras: *libras,
                fecha: fecha.clone(),
                estado: estado.clone(),
                observaciones: observaciones.clone(),
                status: None,
            };
            if dto.libras.is_none() && dto.fecha.is_none() && dto.estado.is_none() && dto.observaciones.is_none() {
                return Err(AppError::validation("No hay cambios que guardar"));
            }
            let reserva = reservas.update(*id, &dto).await?;
            output::print_success(&format!("Reserva #{} actualizada", reserva.id));
        }
        ReservaCommand::Status { id, status } => {
            let role = client.auth().me().await?.role;
            let current = reservas.get(*id).await?;
            ensure_transition(current.status, *status, role)?;
            debug!(reserva_id = %id, from = %current.status, to = %status, "Changing status");

            let reserva = reservas.update_status(*id, *status).await?;
            output::print_success(&format!(
                "Reserva #{}: {} → {}",
                reserva.id,
                current.status.label(),
                reserva.status.label()
            ));
        }
        ReservaCommand::Transitions { id } => {
            let role = client.auth().me().await?.role;
            let reserva = reservas.get(*id).await?;
            let available = reserva.available_statuses(role);
            if available.len() == 1 {
                output::print_warning(&format!(
                    "La reserva #{} está {} y es de solo lectura para ti",
                    reserva.id,
                    reserva.status.label().to_lowercase()
                ));
            } else {
                let labels: Vec<&str> = available.iter().skip(1).map(|s| s.label()).collect();
                output::print_kv("Estado actual", reserva.status.label());
                output::print_kv("Puedes cambiar a", &labels.join(", "));
            }
        }
        ReservaCommand::Delete { id, yes } => {
            if !prompt::confirm(&format!("¿Eliminar la reserva #{id}?"), *yes)? {
                output::print_warning("Cancelado");
                return Ok(());
            }
            let message = reservas.delete(*id).await?;
            output::print_success(message.as_deref().unwrap_or("Reserva eliminada"));
        }
    }

    Ok(())
}

fn print_reserva(reserva: &Reserva, ctx: &Context) {
    output::print_record(
        reserva,
        &[
            ("ID", reserva.id.to_string()),
            ("Libras", format_libras(reserva.libras)),
            ("Fecha", format_date(Some(&reserva.fecha))),
            ("Estado", reserva.estado.clone()),
            ("Status", reserva.status.label().to_string()),
            ("Periodo", reserva.periodo_id.to_string()),
            (
                "Usuario",
                output::or_dash(reserva.user.as_ref().map(|u| format!("{} <{}>", u.name, u.email))),
            ),
            ("Observaciones", output::or_dash(reserva.observaciones.as_deref())),
        ],
        ctx.format,
    );
    if ctx.format == output::OutputFormat::Table {
        println!();
        println!("  Historial:");
        for (status, at) in reserva.timeline() {
            println!("    {:<12} {}", status.label(), format_datetime(at));
        }
    }
}
