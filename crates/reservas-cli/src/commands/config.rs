//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use reservas_core::config::ClientConfig;
use reservas_core::error::AppError;

use super::Context;
use crate::output;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
    /// Write a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, ctx: &Context) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => output::print_json(&ctx.config),
        ConfigCommand::Validate => match ClientConfig::load(&ctx.config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuración '{}' válida", ctx.config_path));
                output::print_kv("API", &config.api.base_url);
                output::print_kv("Timeout", &format!("{}s", config.api.request_timeout_seconds));
                output::print_kv("Tokens", &config.auth.token_file);
                output::print_kv("Logging", &format!("{} ({})", config.logging.level, config.logging.format));
            }
            Err(e) => {
                output::print_error(&format!("Configuración inválida: {}", e.message));
                return Err(e);
            }
        },
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::internal(format!("No se pudo crear el directorio: {e}")))?;
            }

            tokio::fs::write(out_path, default_config)
                .await
                .map_err(|e| AppError::internal(format!("No se pudo escribir la configuración: {e}")))?;

            output::print_success(&format!("Configuración por defecto escrita en '{out_path}'"));
        }
    }

    Ok(())
}
