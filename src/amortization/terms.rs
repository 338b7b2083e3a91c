//! Validated loan terms

use serde::{Deserialize, Serialize};

use super::payment::{monthly_payment, monthly_rate_from_annual_percent};
use super::schedule::{generate_schedule, PaymentSchedule};
use crate::error::{SimulationError, SimulationResult};

/// Longest term accepted by the simulators (100 years)
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Immutable input to a calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Financed amount before interest
    pub principal: f64,
    /// Annual nominal rate in percent (12.0 = 12% a year)
    pub annual_rate_percent: f64,
    /// Number of monthly installments (>= 1)
    pub term_months: u32,
}

impl LoanTerms {
    /// Build terms, rejecting values the formulas cannot handle.
    pub fn new(principal: f64, annual_rate_percent: f64, term_months: u32) -> SimulationResult<Self> {
        if !principal.is_finite() || principal < 0.0 {
            return Err(SimulationError::invalid(
                "principal",
                format!("must be a non-negative amount, got {}", principal),
            ));
        }
        if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
            return Err(SimulationError::invalid(
                "annual_rate_percent",
                format!("must be a non-negative rate, got {}", annual_rate_percent),
            ));
        }
        if term_months == 0 {
            return Err(SimulationError::invalid("term_months", "must be at least 1"));
        }
        if term_months > MAX_TERM_MONTHS {
            return Err(SimulationError::invalid(
                "term_months",
                format!("must be at most {}, got {}", MAX_TERM_MONTHS, term_months),
            ));
        }

        Ok(Self {
            principal,
            annual_rate_percent,
            term_months,
        })
    }

    /// Monthly rate as a fraction
    pub fn monthly_rate(&self) -> f64 {
        monthly_rate_from_annual_percent(self.annual_rate_percent)
    }

    /// Constant annuity payment for these terms
    pub fn monthly_payment(&self) -> f64 {
        monthly_payment(self.principal, self.monthly_rate(), self.term_months)
    }

    /// Full amortization schedule for these terms
    pub fn schedule(&self) -> PaymentSchedule {
        generate_schedule(
            self.principal,
            self.monthly_rate(),
            self.monthly_payment(),
            self.term_months,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_terms_drive_engine() {
        let terms = LoanTerms::new(30_000.0, 12.0, 12).unwrap();

        assert_abs_diff_eq!(terms.monthly_rate(), 0.01, epsilon = 1e-15);
        assert_eq!(format!("{:.2}", terms.monthly_payment()), "2665.46");

        let schedule = terms.schedule();
        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule.last().unwrap().remaining_balance, 0.0);
    }

    #[test]
    fn test_rejects_zero_months() {
        let err = LoanTerms::new(1000.0, 10.0, 0).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput { ref field, .. } if field == "term_months"));
    }

    #[test]
    fn test_term_upper_bound() {
        let terms = LoanTerms::new(1000.0, 12.0, MAX_TERM_MONTHS).unwrap();
        assert_eq!(terms.schedule().len(), MAX_TERM_MONTHS as usize);

        for months in [MAX_TERM_MONTHS + 1, 2_147_483_648, u32::MAX] {
            let err = LoanTerms::new(1000.0, 12.0, months).unwrap_err();
            assert!(matches!(err, SimulationError::InvalidInput { ref field, .. } if field == "term_months"));
        }
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert!(LoanTerms::new(-1.0, 10.0, 12).is_err());
        assert!(LoanTerms::new(f64::NAN, 10.0, 12).is_err());
        assert!(LoanTerms::new(1000.0, -0.5, 12).is_err());
        assert!(LoanTerms::new(1000.0, f64::INFINITY, 12).is_err());
    }

    #[test]
    fn test_zero_principal_is_valid() {
        let terms = LoanTerms::new(0.0, 24.0, 36).unwrap();
        assert_eq!(terms.monthly_payment(), 0.0);
    }
}
