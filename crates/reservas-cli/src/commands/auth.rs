//! Login, logout and session commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use reservas_core::error::AppError;
use reservas_entity::dto::{LoginDto, RegisterDto};
use reservas_entity::dto::rules::PASSWORD_REQUIREMENTS;
use reservas_entity::format::{format_datetime, truncate_text};
use reservas_entity::user::{Session, User};

use super::Context;
use crate::output::{self, OutputFormat};
use crate::prompt;

/// Arguments for auth commands
#[derive(Debug, Args)]
pub struct AuthArgs {
    /// Auth subcommand
    #[command(subcommand)]
    pub command: AuthCommand,
}

/// Auth subcommands
#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Log in and store credentials
    Login {
        /// Account email
        #[arg(short, long)]
        email: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Revoke the session and forget stored credentials
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Create a new account
    Register {
        /// Full name
        #[arg(short, long)]
        name: Option<String>,
        /// Account email
        #[arg(short, long)]
        email: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// List active sessions
    Sessions,
    /// Revoke one session
    RevokeSession {
        /// Session ID
        id: String,
    },
}

/// Session display row for table output
#[derive(Debug, Serialize, Tabled)]
struct SessionRow {
    id: String,
    user_agent: String,
    ip_address: String,
    created_at: String,
    expires_at: String,
}

impl From<&Session> for SessionRow {
    fn from(s: &Session) -> Self {
        Self {
            id: s.id.clone(),
            user_agent: s
                .user_agent
                .as_deref()
                .map(|ua| truncate_text(ua, 40))
                .unwrap_or_else(|| "-".to_string()),
            ip_address: output::or_dash(s.ip_address.as_deref()),
            created_at: format_datetime(s.created_at),
            expires_at: format_datetime(s.expires_at),
        }
    }
}

/// Execute auth commands
pub async fn execute(args: &AuthArgs, ctx: &Context) -> Result<(), AppError> {
    let session = ctx.session()?;

    match &args.command {
        AuthCommand::Login { email, password } => {
            let dto = LoginDto {
                email: prompt::text_or_prompt(email, "Email")?,
                password: prompt::password_or_prompt(password, "Contraseña")?,
            };
            let user = session.login(&dto).await?;
            output::print_success(&format!("Sesión iniciada como {} ({})", user.name, user.role.label()));
        }
        AuthCommand::Logout => {
            session.logout().await?;
            output::print_success("Sesión cerrada");
        }
        AuthCommand::Whoami => {
            if !session.is_authenticated().await? {
                output::print_warning("No hay sesión iniciada");
                return Ok(());
            }
            let user = session.current_user().await?;
            print_user(&user, ctx.format);
        }
        AuthCommand::Register {
            name,
            email,
            password,
        } => {
            let name = prompt::text_or_prompt(name, "Nombre completo")?;
            let email = prompt::text_or_prompt(email, "Email")?;
            if password.is_none() && ctx.format == OutputFormat::Table {
                println!("La contraseña debe tener:");
                for requirement in PASSWORD_REQUIREMENTS {
                    println!("  - {requirement}");
                }
            }
            let dto = RegisterDto {
                name,
                email,
                password: prompt::new_password_or_prompt(password, "Contraseña")?,
            };
            let user = session.client().auth().register(&dto).await?;
            output::print_success(&format!("Cuenta creada para {}. Ya puedes iniciar sesión.", user.email));
        }
        AuthCommand::Sessions => {
            let sessions = session.client().auth().sessions().await?;
            let rows: Vec<SessionRow> = sessions.iter().map(SessionRow::from).collect();
            output::print_list(&rows, ctx.format);
        }
        AuthCommand::RevokeSession { id } => {
            let message = session.client().auth().delete_session(id).await?;
            output::print_success(message.as_deref().unwrap_or("Sesión revocada"));
        }
    }

    Ok(())
}

/// Print a user record.
pub(crate) fn print_user(user: &User, format: OutputFormat) {
    output::print_record(
        user,
        &[
            ("ID", user.id.to_string()),
            ("Nombre", user.name.clone()),
            ("Email", user.email.clone()),
            ("Rol", user.role.label().to_string()),
            ("Activo", if user.is_active { "Sí" } else { "No" }.to_string()),
            ("Avatar", output::or_dash(user.avatar.as_deref())),
            ("Creado", format_datetime(user.created_at)),
        ],
        format,
    );
}
