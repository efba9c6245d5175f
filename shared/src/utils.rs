//! Formatting helpers shared across pages.

use chrono::DateTime;

/// Format a number with commas (e.g. 1234567.89 -> "1,234,567.89").
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, d),
        None => (formatted.as_str(), ""),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let integer_with_commas: String = grouped.chars().rev().collect();

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Render a rupee amount for display.
pub fn format_currency(value: f64) -> String {
    format!("\u{20b9}{}", format_number(value, 2))
}

/// Render an ISO-8601 timestamp as a date (`DD/MM/YYYY`); falls back to the
/// raw string when the server sends something unparseable.
pub fn format_date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.format("%d/%m/%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Render an ISO-8601 timestamp with time of day.
pub fn format_datetime(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(-1234.5, 2), "-1,234.50");
        assert_eq!(format_number(999.0, 0), "999");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(15500.0), "\u{20b9}15,500.00");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-03-15T10:30:00.000Z"), "15/03/2026");
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }
}
