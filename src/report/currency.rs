//! pt-BR currency formatting

/// Placeholder shown where no figure is available
pub const EMPTY_FIGURE: &str = "—";

/// Format a value as Brazilian reais, e.g. `R$ 1.234,56`.
///
/// Uses a non-breaking space after the symbol, `.` for thousands and `,`
/// for decimals. Non-finite values render as the empty placeholder.
pub fn format_brl(value: f64) -> String {
    if !value.is_finite() {
        return EMPTY_FIGURE.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}R$\u{a0}{},{}", sign, grouped, cents)
}

/// Format a percentage with up to two decimals (`12` -> `12%`, `9.5` -> `9,5%`)
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return EMPTY_FIGURE.to_string();
    }

    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    format!("{}%", trimmed.replace('.', ","))
}
