//! CLI command definitions and dispatch.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod perfil;
pub mod periodo;
pub mod reportes;
pub mod reserva;
pub mod usuario;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use reservas_client::token::FileTokenStore;
use reservas_client::{ApiClient, AuthSession};
use reservas_core::config::ClientConfig;
use reservas_core::error::AppError;
use reservas_core::types::PageRequest;

use crate::output::OutputFormat;

/// Sistema de Reservas: reservation management from the terminal
#[derive(Debug, Parser)]
#[command(name = "reservas", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Login, logout and sessions
    Auth(auth::AuthArgs),
    /// Reservation management
    Reserva(reserva::ReservaArgs),
    /// Capacity period management
    Periodo(periodo::PeriodoArgs),
    /// User management (admin)
    Usuario(usuario::UsuarioArgs),
    /// Dashboard statistics and archived periods
    Dashboard(dashboard::DashboardArgs),
    /// Aggregated reports (admin)
    Reportes(reportes::ReportesArgs),
    /// Own profile
    Perfil(perfil::PerfilArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

/// Pagination flags shared by list commands
#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Items per page (defaults to output.page_size)
    #[arg(long)]
    pub limit: Option<u32>,
}

impl PageArgs {
    /// Page request with the configured default size.
    pub fn to_request(self, default_limit: u32) -> PageRequest {
        PageRequest::new(self.page, self.limit.unwrap_or(default_limit))
    }
}

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: ClientConfig,
    pub format: OutputFormat,
    pub config_path: String,
}

impl Context {
    /// API client whose credentials persist in the configured token file.
    pub fn client(&self) -> Result<ApiClient, AppError> {
        let store = Arc::new(FileTokenStore::new(&self.config.auth.token_file));
        ApiClient::new(&self.config, store)
    }

    /// Session helper on top of [`Context::client`].
    pub fn session(&self) -> Result<AuthSession, AppError> {
        Ok(AuthSession::new(self.client()?))
    }

    /// Page request for a list command.
    pub fn page(&self, args: PageArgs) -> PageRequest {
        args.to_request(self.config.output.page_size)
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: ClientConfig) -> Result<(), AppError> {
        let ctx = Context {
            config,
            format: self.format,
            config_path: self.config.clone(),
        };

        match &self.command {
            Commands::Auth(args) => auth::execute(args, &ctx).await,
            Commands::Reserva(args) => reserva::execute(args, &ctx).await,
            Commands::Periodo(args) => periodo::execute(args, &ctx).await,
            Commands::Usuario(args) => usuario::execute(args, &ctx).await,
            Commands::Dashboard(args) => dashboard::execute(args, &ctx).await,
            Commands::Reportes(args) => reportes::execute(args, &ctx).await,
            Commands::Perfil(args) => perfil::execute(args, &ctx).await,
            Commands::Config(args) => config::execute(args, &ctx).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_reserva_list_filters() {
        let cli = Cli::try_parse_from([
            "reservas", "--format", "json", "reserva", "list", "--status", "pendiente", "--periodo", "3",
            "--page", "2",
        ])
        .expect("parse");
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Reserva(args) => match args.command {
                reserva::ReservaCommand::List { filters, page } => {
                    assert_eq!(filters.status.map(|s| s.as_str()), Some("PENDIENTE"));
                    assert_eq!(filters.periodo.map(|p| p.get()), Some(3));
                    assert_eq!(page.to_request(20), PageRequest::new(2, 20));
                }
                other => panic!("unexpected command: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_status() {
        let err = Cli::try_parse_from(["reservas", "reserva", "status", "4", "perdida"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_page_limit_is_clamped() {
        let args = PageArgs {
            page: 0,
            limit: Some(500),
        };
        assert_eq!(args.to_request(20), PageRequest::new(1, 100));
    }
}
