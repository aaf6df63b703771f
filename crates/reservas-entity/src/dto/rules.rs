//! Custom validators and option lists shared by the request DTOs.

use std::borrow::Cow;

use chrono::NaiveDate;
use validator::ValidationError;

/// Origin regions offered when creating a reservation.
pub const ESTADOS_MEXICO: [&str; 26] = [
    "Aguascalientes",
    "Campeche",
    "Cancún",
    "Chiapas",
    "Chihuahua",
    "CDMX",
    "CDMX Sur",
    "Guadalajara",
    "Guerrero",
    "Hidalgo",
    "Jalisco",
    "Michoacán",
    "Monterrey",
    "Puebla",
    "Puerto Vallarta",
    "Querétaro",
    "San Luis Potosí",
    "Saltillo",
    "Texcoco",
    "Tlaxcala",
    "Tijuana",
    "Toluca",
    "Veracruz",
    "Yucatán",
    "Xalapa",
    "Zacatecas",
];

/// Human-readable password requirements.
pub const PASSWORD_REQUIREMENTS: [&str; 5] = [
    "Mínimo 8 caracteres",
    "Al menos una mayúscula",
    "Al menos una minúscula",
    "Al menos un número",
    "Al menos un carácter especial",
];

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Require a lowercase letter, an uppercase letter, a digit and a
/// non-alphanumeric character. Length is checked separately.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(invalid(
            "password_lowercase",
            "La contraseña debe contener al menos una minúscula",
        ));
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(invalid(
            "password_uppercase",
            "La contraseña debe contener al menos una mayúscula",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid(
            "password_digit",
            "La contraseña debe contener al menos un número",
        ));
    }
    if !password.chars().any(|c| !c.is_alphanumeric()) {
        return Err(invalid(
            "password_special",
            "La contraseña debe contener al menos un carácter especial",
        ));
    }
    Ok(())
}

/// Require a calendar date in `YYYY-MM-DD` form.
pub fn validate_iso_date(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| invalid("iso_date", "La fecha debe tener el formato AAAA-MM-DD"))
}

/// Reject strings that are empty after trimming.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(invalid("required", "Este campo es requerido"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_strength() {
        assert!(validate_password_strength("Secreto#2025").is_ok());
        assert!(validate_password_strength("secreto#2025").is_err());
        assert!(validate_password_strength("SECRETO#2025").is_err());
        assert!(validate_password_strength("Secreto#abcd").is_err());
        assert!(validate_password_strength("Secreto2025").is_err());
    }

    #[test]
    fn test_iso_date() {
        assert!(validate_iso_date("2025-12-04").is_ok());
        assert!(validate_iso_date("04/12/2025").is_err());
        assert!(validate_iso_date("2025-02-30").is_err());
    }

    #[test]
    fn test_estados_are_unique() {
        let mut estados = ESTADOS_MEXICO.to_vec();
        estados.sort_unstable();
        estados.dedup();
        assert_eq!(estados.len(), ESTADOS_MEXICO.len());
    }
}
