//! Number formatting utilities for human-readable display.
//!
//! Handles f64 values with thousands separators, currency text, and
//! percentages. Values that are absent upstream render as [`NOT_APPLICABLE`],
//! never as zero.

/// Placeholder for a field that does not apply to a record.
pub const NOT_APPLICABLE: &str = "N/A";

/// Adds thousands separators to the integer part of an already-formatted number.
///
/// The fractional part is kept as-is.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };

    let mut parts = unsigned.splitn(2, '.');
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next();

    let grouped = integer
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Trims trailing zeros, adds thousands separators.
pub fn display_formatted_string(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    group_thousands(&trimmed)
}

fn get_decimal_places(value: f64) -> usize {
    let abs_value = value.abs();

    if abs_value >= 1.0 || abs_value == 0.0 {
        return 2;
    }

    let exponent = abs_value.log10().floor().abs() as usize;
    (exponent + 2).min(8)
}

/// Format an f64 for display with auto-detected decimal places.
pub fn display(amount: &f64) -> String {
    display_with_decimals(amount, get_decimal_places(*amount))
}

/// Format an f64 for display with explicit decimal places.
pub fn display_with_decimals(amount: &f64, decimals: usize) -> String {
    let formatted = format!("{:.1$}", amount, decimals);
    display_formatted_string(formatted)
}

/// Dollar price text: two decimals at or above one unit, enough precision to
/// show the leading significant digits below it.
///
/// `43000.5` → `$43,000.50`, `0.000123` → `$0.000123`.
pub fn usd(amount: f64) -> String {
    let sign = if amount.is_sign_negative() && amount != 0.0 {
        "-"
    } else {
        ""
    };
    let abs = amount.abs();

    let body = if abs >= 1.0 {
        group_thousands(&format!("{:.2}", abs))
    } else {
        display(&abs)
    };
    format!("{}${}", sign, body)
}

/// Dollar text rounded to whole units, for large aggregates like market cap.
pub fn usd_whole(amount: f64) -> String {
    let formatted = group_thousands(&format!("{:.0}", amount.abs()));
    if amount.is_sign_negative() && amount.abs() >= 0.5 {
        format!("-${}", formatted)
    } else {
        format!("${}", formatted)
    }
}

/// Percentage text with exactly two decimals: `-1.234` → `-1.23%`.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// [`usd`] for an optional value, [`NOT_APPLICABLE`] when absent.
pub fn usd_or_na(amount: Option<f64>) -> String {
    amount.map(usd).unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

/// [`percent`] for an optional value, [`NOT_APPLICABLE`] when absent.
pub fn percent_or_na(value: Option<f64>) -> String {
    value.map(percent).unwrap_or_else(|| NOT_APPLICABLE.to_string())
}
