//! Sistema de Reservas command-line client.
//!
//! Loads configuration, initializes logging and dispatches to the CLI
//! commands.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use reservas_cli::Cli;
use reservas_cli::output;
use reservas_core::config::ClientConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ClientConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::print_error(&format!("No se pudo cargar la configuración: {}", e.message));
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::debug!(config = %cli.config, api = %config.api.base_url, "Configuration loaded");

    if let Err(e) = cli.execute(config).await {
        tracing::debug!(error = %e, "Command failed");
        output::print_error(&e.message);
        if e.is_login_required() {
            output::print_warning("Inicia sesión con `reservas auth login`.");
        }
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &ClientConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        "pretty" => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        other => {
            fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            tracing::warn!(format = other, "Unknown log format, using plain output");
        }
    }
}
