//! Display formatting for calculation results
//!
//! Pure functions over a finished [`SprayCalculation`]; nothing here changes
//! the record.

use spray_types::Language;

use crate::model::SprayCalculation;

/// Separators used when printing quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub decimal_separator: char,
    pub grouping_separator: Option<char>,
}

impl NumberLocale {
    pub const POLISH: NumberLocale = NumberLocale {
        decimal_separator: ',',
        grouping_separator: Some(' '),
    };

    pub const ENGLISH: NumberLocale = NumberLocale {
        decimal_separator: '.',
        grouping_separator: Some(','),
    };

    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Polish => Self::POLISH,
            Language::English => Self::ENGLISH,
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::POLISH
    }
}

/// Format a quantity with at most two fraction digits and no trailing zeros
pub fn format_quantity(value: f64, locale: &NumberLocale) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    // "-0" is printed as "0"
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale.grouping_separator));
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(sep) = separator else {
        return digits.to_string();
    };
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Human-readable tank fills, e.g. `4 full + 1 partial`
pub fn describe_tank_fills(result: &SprayCalculation, full_label: &str, partial_label: &str) -> String {
    let full_tanks = result.full_tanks();
    match (full_tanks > 0, result.has_partial_tank()) {
        (true, true) => format!("{} {} + 1 {}", full_tanks, full_label, partial_label),
        (true, false) => format!("{} {}", full_tanks, full_label),
        (false, true) => format!("1 {}", partial_label),
        (false, false) => "0".to_string(),
    }
}

/// Same as [`describe_tank_fills`], with the partial volume appended
pub fn describe_tank_fills_with_volume(
    result: &SprayCalculation,
    full_label: &str,
    partial_label: &str,
    locale: &NumberLocale,
) -> String {
    let description = describe_tank_fills(result, full_label, partial_label);
    if result.has_partial_tank() {
        format!(
            "{} ({} l)",
            description,
            format_quantity(result.partial_tank_volume(), locale)
        )
    } else {
        description
    }
}
