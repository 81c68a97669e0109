//! Deterministic pure formatting helpers.
//!
//! The rule everywhere: formatting never raises. When a value does not parse,
//! the raw string is kept so the renderer still receives something printable.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use super::error::ValidationError;

/// Maximum length for sanitized free-text identifiers.
pub const MAX_TEXT_LENGTH: usize = 50;

/// Maximum length for generated download filenames.
pub const MAX_FILENAME_LENGTH: usize = 128;

/// Reformat a strict `YYYY-MM-DD` date as `DD/MM/YYYY`.
///
/// Anything that does not parse is returned unchanged.
pub fn format_date_es(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Format a timestamp as `DD/MM/YYYY HH:MM`.
pub fn format_datetime_es<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Format a numeric string with a fixed number of decimals.
///
/// `"1.5"` with 2 decimals becomes `"1.50"`; unparsable input passes
/// through raw.
pub fn format_amount(raw: &str, decimals: usize) -> String {
    match Decimal::from_str(raw.trim()) {
        Ok(d) => format!("{d:.decimals$}"),
        Err(_) => raw.to_string(),
    }
}

/// Reformat a tax rate: 2 decimals, then strip trailing zeros and a
/// trailing decimal point (`"4.00"` → `"4"`, `"7.50"` → `"7.5"`).
///
/// A comma decimal separator is tolerated. Unparsable input is kept trimmed.
pub fn format_rate(raw: &str) -> String {
    let normalized = raw.trim().replace(',', ".");
    match Decimal::from_str(&normalized) {
        Ok(d) => {
            let fixed = format!("{d:.2}");
            fixed
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        }
        Err(_) => raw.trim().to_string(),
    }
}

/// Accepted timestamp formats, tried in order. Naive values are taken as UTC.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Parse a free-form timestamp against an explicit ordered format list.
///
/// RFC 3339 (with offset) is tried first; naive datetime and bare date forms
/// follow and are assumed UTC. No guessing beyond the list — behavior must be
/// identical across platforms.
pub fn parse_datetime_multi(raw: &str) -> Result<DateTime<Utc>, String> {
    let s = raw.trim();
    if s.is_empty() {
        return Err("fecha vacía".to_string());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(Utc.from_utc_datetime(&d.and_time(chrono::NaiveTime::MIN)));
        }
    }
    Err(format!("'{s}' no coincide con ningún formato admitido"))
}

/// Trim and validate a free-text identifier (registry numbers, RCF numbers).
///
/// Allowed: letters, digits, `-`, `_`, `/`, `.`; 1 to `max_length` chars.
pub fn sanitize_text(value: &str, max_length: usize) -> Result<String, ValidationError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ValidationError::new(
            "texto",
            "el valor no puede estar vacío",
        ));
    }
    if v.chars().count() > max_length {
        return Err(ValidationError::new(
            "texto",
            format!("el valor excede la longitud máxima de {max_length} caracteres"),
        ));
    }
    let allowed =
        |c: char| c.is_alphanumeric() || matches!(c, '-' | '_' | '/' | '.');
    if !v.chars().all(allowed) {
        return Err(ValidationError::new(
            "texto",
            format!(
                "valor inválido; usa letras, números, guiones, guiones bajos, \
                 barras o puntos (1–{max_length})"
            ),
        ));
    }
    Ok(v.to_string())
}

/// Turn an arbitrary string into a safe download filename.
///
/// Runs of characters outside `[letters digits _ . -]` collapse into a single
/// underscore; the result is clamped to `max_length` characters.
pub fn safe_filename(base: &str, max_length: usize) -> String {
    let mut out = String::with_capacity(base.len());
    let mut last_was_replacement = false;
    for c in base.trim().chars() {
        if c.is_alphanumeric() || matches!(c, '_' | '.' | '-') {
            out.push(c);
            last_was_replacement = false;
        } else if !last_was_replacement {
            out.push('_');
            last_was_replacement = true;
        }
    }
    out.chars().take(max_length).collect()
}
