//! Display formatting for dates, quantities and names.

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::libras::Libras;

/// Placeholder for missing or invalid dates.
pub const MISSING: &str = "-";

/// Format an ISO date (`YYYY-MM-DD`) or timestamp as `dd/mm/yyyy`.
///
/// The calendar part of the input is used as-is, so a shipping date never
/// shifts a day because of the local time zone.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return MISSING.to_string();
    };

    let date_part = raw.split('T').next().unwrap_or(raw);
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }

    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%d/%m/%Y").to_string(),
        Err(_) => MISSING.to_string(),
    }
}

/// Format a timestamp as `dd/mm/yyyy HH:MM` in local time.
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value
        .with_timezone(&Local)
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

/// Describe how long ago `value` was, relative to `now`.
pub fn format_relative_date(value: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - value).num_days();
    match days {
        i64::MIN..=0 => "Hoy".to_string(),
        1 => "Ayer".to_string(),
        2..=6 => format!("Hace {days} días"),
        7..=29 => format!("Hace {} semanas", days / 7),
        30..=364 => format!("Hace {} meses", days / 30),
        _ => format!("Hace {} años", days / 365),
    }
}

/// Format a quantity with thousands separators: `1,234.56 lbs`.
pub fn format_libras(value: impl Into<Libras>) -> String {
    let value = value.into().value();
    if !value.is_finite() {
        return "0.00 lbs".to_string();
    }
    format!("{} lbs", group_thousands(&format!("{value:.2}")))
}

/// Format a percentage with two decimals: `85.50%`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

/// Cut `text` to `max_chars` characters, appending `...` when shortened.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Uppercase the first letter and lowercase the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Two-letter initials: first and last word, or the first two letters of a
/// single word.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.as_slice() {
        [] => String::new(),
        [single] => single.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
    }
}

fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2025-12-04")), "04/12/2025");
        assert_eq!(format_date(Some("2025-12-04T23:30:00.000Z")), "04/12/2025");
        assert_eq!(format_date(Some("no es fecha")), "-");
        assert_eq!(format_date(Some("")), "-");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_format_libras() {
        assert_eq!(format_libras(1234.56), "1,234.56 lbs");
        assert_eq!(format_libras(1_000_000.0), "1,000,000.00 lbs");
        assert_eq!(format_libras(12.5), "12.50 lbs");
        assert_eq!(format_libras(-1234.5), "-1,234.50 lbs");
        assert_eq!(format_libras(Libras::parse_lenient("abc")), "0.00 lbs");
        assert_eq!(format_libras(f64::NAN), "0.00 lbs");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(85.5), "85.50%");
        assert_eq!(format_percentage(0.0), "0.00%");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hola", 10), "hola");
        assert_eq!(truncate_text("observación larga", 11), "observación...");
    }

    #[test]
    fn test_initials_and_capitalize() {
        assert_eq!(initials("María José López"), "ML");
        assert_eq!(initials("admin"), "AD");
        assert_eq!(initials("   "), "");
        assert_eq!(capitalize("jALISCO"), "Jalisco");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_relative_date() {
        let now = Utc.with_ymd_and_hms(2025, 12, 31, 12, 0, 0).unwrap();
        let ago = |days| now - chrono::Duration::days(days);
        assert_eq!(format_relative_date(now, now), "Hoy");
        assert_eq!(format_relative_date(ago(1), now), "Ayer");
        assert_eq!(format_relative_date(ago(3), now), "Hace 3 días");
        assert_eq!(format_relative_date(ago(14), now), "Hace 2 semanas");
        assert_eq!(format_relative_date(ago(90), now), "Hace 3 meses");
        assert_eq!(format_relative_date(ago(800), now), "Hace 2 años");
    }
}
