//! Own-profile commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use reservas_core::error::AppError;
use reservas_entity::dto::{ChangeProfilePasswordDto, UpdateProfileDto};
use reservas_entity::format::{format_datetime, initials};

use super::Context;
use crate::output;
use crate::prompt;

/// Arguments for perfil commands
#[derive(Debug, Args)]
pub struct PerfilArgs {
    /// Perfil subcommand
    #[command(subcommand)]
    pub command: PerfilCommand,
}

/// Perfil subcommands
#[derive(Debug, Subcommand)]
pub enum PerfilCommand {
    /// Show your profile
    Show,
    /// Change your display name
    Update {
        /// New name
        #[arg(short, long)]
        name: String,
    },
    /// Change your password; every session is closed afterwards
    Password {
        /// Current password (prompted when omitted)
        #[arg(long)]
        current: Option<String>,
        /// New password (prompted when omitted)
        #[arg(long)]
        new: Option<String>,
    },
    /// Upload an avatar image (JPG, PNG, GIF or WEBP, up to 5 MB)
    AvatarUpload {
        /// Image file
        file: PathBuf,
    },
    /// Remove your avatar
    AvatarDelete,
}

/// Execute perfil commands
pub async fn execute(args: &PerfilArgs, ctx: &Context) -> Result<(), AppError> {
    let session = ctx.session()?;
    let profile = session.client().profile();

    match &args.command {
        PerfilCommand::Show => {
            let data = profile.get().await?;
            let user = &data.user;
            output::print_record(
                &data,
                &[
                    ("ID", user.id.to_string()),
                    ("Nombre", format!("{} ({})", user.name, initials(&user.name))),
                    ("Email", user.email.clone()),
                    ("Rol", user.role.label().to_string()),
                    ("Avatar", output::or_dash(user.avatar.as_deref())),
                    ("Reservas", output::or_dash(data.count.map(|c| c.reservas))),
                    ("Miembro desde", format_datetime(user.created_at)),
                ],
                ctx.format,
            );
        }
        PerfilCommand::Update { name } => {
            let user = profile.update(&UpdateProfileDto { name: name.clone() }).await?;
            output::print_success(&format!("Perfil actualizado: {}", user.name));
        }
        PerfilCommand::Password { current, new } => {
            let dto = ChangeProfilePasswordDto {
                current_password: prompt::password_or_prompt(current, "Contraseña actual")?,
                new_password: prompt::new_password_or_prompt(new, "Nueva contraseña")?,
            };
            let message = session.change_profile_password(&dto).await?;
            output::print_success(message.as_deref().unwrap_or("Contraseña actualizada"));
            output::print_warning("Todas las sesiones fueron cerradas. Inicia sesión de nuevo con `reservas auth login`.");
        }
        PerfilCommand::AvatarUpload { file } => {
            let user = profile.upload_avatar(file).await?;
            output::print_success(&format!("Avatar actualizado: {}", output::or_dash(user.avatar.as_deref())));
        }
        PerfilCommand::AvatarDelete => {
            profile.delete_avatar().await?;
            output::print_success("Avatar eliminado");
        }
    }

    Ok(())
}
