//! Lenient parsing of raw form values
//!
//! Blank or malformed fields never fail a simulation: amounts fall back to
//! zero and terms fall back to a single month. Like the web forms, only the
//! leading number counts, so `1500 reais` reads as 1500.

use crate::amortization::MAX_TERM_MONTHS;

/// Parse a decimal field. Accepts `1234.56`, `1234,56` and `1.234,56`;
/// anything unparseable or non-finite reads as 0.
pub fn parse_amount(raw: &str) -> f64 {
    parse_decimal(raw).unwrap_or(0.0)
}

/// Parse a term in months, keeping the integer part. Blank, malformed or
/// values below one read as 1; terms are capped at `MAX_TERM_MONTHS`.
pub fn parse_months(raw: &str) -> u32 {
    match parse_decimal(raw) {
        Some(value) if value >= 1.0 => value.trunc().min(MAX_TERM_MONTHS as f64) as u32,
        _ => 1,
    }
}

fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let numeric_len = trimmed
        .char_indices()
        .find(|&(i, c)| {
            !(c.is_ascii_digit() || matches!(c, '.' | ',' | 'e' | 'E') || (i == 0 && matches!(c, '+' | '-')))
        })
        .map_or(trimmed.len(), |(i, _)| i);
    let mut candidate = &trimmed[..numeric_len];

    // Longest prefix that still reads as a number, e.g. "12e" -> "12"
    while !candidate.is_empty() {
        let normalized = if candidate.contains(',') {
            candidate.replace('.', "").replace(',', ".")
        } else {
            candidate.to_string()
        };
        if let Some(value) = normalized.parse::<f64>().ok().filter(|v| v.is_finite()) {
            return Some(value);
        }
        candidate = &candidate[..candidate.len() - 1];
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1500"), 1500.0);
        assert_eq!(parse_amount(" 1234.56 "), 1234.56);
        assert_eq!(parse_amount("1234,56"), 1234.56);
        assert_eq!(parse_amount("1.234,56"), 1234.56);
        assert_eq!(parse_amount("-200"), -200.0);
    }

    #[test]
    fn test_parse_amount_fallbacks() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("R$ 1500"), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
    }

    #[test]
    fn test_parse_amount_reads_leading_number() {
        assert_eq!(parse_amount("12abc"), 12.0);
        assert_eq!(parse_amount("1500 reais"), 1500.0);
        assert_eq!(parse_amount("2.500,75 BRL"), 2500.75);
        assert_eq!(parse_amount("9,5%"), 9.5);
        assert_eq!(parse_amount("12e"), 12.0);
        assert_eq!(parse_amount("1e3"), 1000.0);
    }

    #[test]
    fn test_parse_months() {
        assert_eq!(parse_months("48"), 48);
        assert_eq!(parse_months("12.9"), 12);
        assert_eq!(parse_months("12,5"), 12);
        assert_eq!(parse_months("48 meses"), 48);
    }

    #[test]
    fn test_parse_months_capped() {
        assert_eq!(parse_months("1200"), MAX_TERM_MONTHS);
        assert_eq!(parse_months("4294967295"), MAX_TERM_MONTHS);
        assert_eq!(parse_months("1e12"), MAX_TERM_MONTHS);
    }

    #[test]
    fn test_parse_months_fallbacks() {
        assert_eq!(parse_months(""), 1);
        assert_eq!(parse_months("0"), 1);
        assert_eq!(parse_months("-6"), 1);
        assert_eq!(parse_months("0.5"), 1);
        assert_eq!(parse_months("twelve"), 1);
    }
}
