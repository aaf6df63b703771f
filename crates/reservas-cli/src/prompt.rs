//! Interactive prompts for values not given on the command line.

use reservas_core::error::AppError;

fn prompt_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Error de entrada: {e}"))
}

/// Use `value` when given, otherwise ask for it.
pub fn text_or_prompt(value: &Option<String>, prompt: &str) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => dialoguer::Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(prompt_error),
    }
}

/// Use `value` when given, otherwise ask for a hidden password.
pub fn password_or_prompt(value: &Option<String>, prompt: &str) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => dialoguer::Password::new()
            .with_prompt(prompt)
            .interact()
            .map_err(prompt_error),
    }
}

/// Ask for a new password twice.
pub fn new_password_or_prompt(value: &Option<String>, prompt: &str) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => dialoguer::Password::new()
            .with_prompt(prompt)
            .with_confirmation("Confirmar contraseña", "Las contraseñas no coinciden")
            .interact()
            .map_err(prompt_error),
    }
}

/// Pick one of `items` unless `value` was given.
pub fn select_or_prompt(value: &Option<String>, prompt: &str, items: &[&str]) -> Result<String, AppError> {
    if let Some(v) = value {
        return Ok(v.clone());
    }
    let index = dialoguer::Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    Ok(items[index].to_string())
}

/// Ask for confirmation unless `assume_yes` is set.
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool, AppError> {
    if assume_yes {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(prompt_error)
}
