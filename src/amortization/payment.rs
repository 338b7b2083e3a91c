//! Annuity payment formula

/// Convert an annual percentage rate (e.g. 12.0 for 12%) into the monthly
/// fraction used by the formulas (0.01).
pub fn monthly_rate_from_annual_percent(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Constant monthly payment that fully retires `principal` over `months`
/// with compound interest charged on the declining balance.
///
/// # Arguments
/// * `principal` - Financed amount (>= 0)
/// * `monthly_rate` - Monthly rate as a fraction (0.01 for 1%)
/// * `months` - Number of installments; must be at least 1
///
/// A zero rate degenerates to an equal split of the principal.
pub fn monthly_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if monthly_rate == 0.0 {
        return principal / months as f64;
    }

    principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-(months as f64)))
}
