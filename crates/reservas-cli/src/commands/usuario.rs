//! User management CLI commands (admin).

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use reservas_core::error::AppError;
use reservas_core::types::UserId;
use reservas_entity::dto::{CreateUserDto, UpdateUserDto};
use reservas_entity::filters::UserFilters;
use reservas_entity::format::format_datetime;
use reservas_entity::user::{Role, User};

use super::auth::print_user;
use super::{Context, PageArgs};
use crate::output;
use crate::prompt;

/// Arguments for usuario commands
#[derive(Debug, Args)]
pub struct UsuarioArgs {
    /// Usuario subcommand
    #[command(subcommand)]
    pub command: UsuarioCommand,
}

/// Usuario subcommands
#[derive(Debug, Subcommand)]
pub enum UsuarioCommand {
    /// List users
    List {
        /// Filter by role
        #[arg(short, long)]
        role: Option<Role>,
        /// Only active (true) or inactive (false) users
        #[arg(long)]
        activo: Option<bool>,
        /// Search by name or email
        #[arg(short, long)]
        search: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one user
    Show {
        /// User ID
        id: UserId,
    },
    /// Create a user
    Create {
        /// Full name
        #[arg(short, long)]
        name: String,
        /// Email
        #[arg(short, long)]
        email: String,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
        /// Role (defaults to USUARIO on the server)
        #[arg(short, long)]
        role: Option<Role>,
    },
    /// Edit a user
    Update {
        /// User ID
        id: UserId,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        /// Activate (true) or deactivate (false)
        #[arg(long)]
        activo: Option<bool>,
    },
    /// Change a user's role
    Role {
        /// User ID
        id: UserId,
        /// New role
        role: Role,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: UserId,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    role: String,
    activo: String,
    creado: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.get(),
            name: u.name.clone(),
            email: u.email.clone(),
            role: u.role.label().to_string(),
            activo: if u.is_active { "Sí" } else { "No" }.to_string(),
            creado: format_datetime(u.created_at),
        }
    }
}

/// Execute usuario commands
pub async fn execute(args: &UsuarioArgs, ctx: &Context) -> Result<(), AppError> {
    let client = ctx.client()?;
    let users = client.users();

    match &args.command {
        UsuarioCommand::List {
            role,
            activo,
            search,
            page,
        } => {
            let filters = UserFilters {
                page: Some(ctx.page(*page)),
                role: *role,
                is_active: *activo,
                search: search.clone(),
            };
            let result = users.list(&filters).await?;
            let rows: Vec<UserRow> = result.data.iter().map(UserRow::from).collect();
            output::print_page(&rows, &result.pagination, ctx.format);
        }
        UsuarioCommand::Show { id } => {
            let user = users.get(*id).await?;
            print_user(&user, ctx.format);
        }
        UsuarioCommand::Create {
            name,
            email,
            password,
            role,
        } => {
            let dto = CreateUserDto {
                name: name.clone(),
                email: email.clone(),
                password: prompt::new_password_or_prompt(password, "Contraseña")?,
                role: *role,
            };
            let user = users.create(&dto).await?;
            output::print_success(&format!("Usuario #{} '{}' creado", user.id, user.email));
        }
        UsuarioCommand::Update {
            id,
            name,
            email,
            activo,
        } => {
            let dto = UpdateUserDto {
                name: name.clone(),
                email: email.clone(),
                is_active: *activo,
                ..Default::default()
            };
            let user = users.update(*id, &dto).await?;
            output::print_success(&format!("Usuario #{} actualizado", user.id));
        }
        UsuarioCommand::Role { id, role } => {
            let user = users.change_role(*id, *role).await?;
            output::print_success(&format!("{} ahora es {}", user.name, user.role.label()));
        }
        UsuarioCommand::Delete { id, yes } => {
            if !prompt::confirm(&format!("¿Eliminar el usuario #{id} y sus reservas?"), *yes)? {
                output::print_warning("Cancelado");
                return Ok(());
            }
            let message = users.delete(*id).await?;
            output::print_success(message.as_deref().unwrap_or("Usuario eliminado"));
        }
    }

    Ok(())
}
