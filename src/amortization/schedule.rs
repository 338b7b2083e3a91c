//! Amortization schedule rows and generation

use serde::{Deserialize, Serialize};

/// A single month of the amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    /// 1-based installment number
    pub index: u32,
    /// Portion of the payment that reduces principal
    pub amortization: f64,
    /// Interest charged on the opening balance
    pub interest: f64,
    /// Balance after this installment
    pub remaining_balance: f64,
}

impl Installment {
    /// Total paid in this installment
    pub fn payment(&self) -> f64 {
        self.amortization + self.interest
    }
}

/// Ordered installments, one per month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    pub installments: Vec<Installment>,
}

impl PaymentSchedule {
    pub fn new() -> Self {
        Self { installments: Vec::new() }
    }

    /// Append an installment
    pub fn add_installment(&mut self, installment: Installment) {
        self.installments.push(installment);
    }

    pub fn len(&self) -> usize {
        self.installments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }

    pub fn last(&self) -> Option<&Installment> {
        self.installments.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Installment> {
        self.installments.iter()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let total_amortization: f64 = self.installments.iter().map(|i| i.amortization).sum();
        let total_interest: f64 = self.installments.iter().map(|i| i.interest).sum();
        let final_balance = self.last().map(|i| i.remaining_balance).unwrap_or(0.0);

        ScheduleSummary {
            installments: self.installments.len() as u32,
            total_amortization,
            total_interest,
            total_paid: total_amortization + total_interest,
            final_balance,
        }
    }
}

impl<'a> IntoIterator for &'a PaymentSchedule {
    type Item = &'a Installment;
    type IntoIter = std::slice::Iter<'a, Installment>;

    fn into_iter(self) -> Self::IntoIter {
        self.installments.iter()
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub installments: u32,
    pub total_amortization: f64,
    pub total_interest: f64,
    pub total_paid: f64,
    pub final_balance: f64,
}

/// Build the month-by-month schedule for a constant payment.
///
/// Interest accrues on the running balance and the rest of the payment
/// amortizes principal. The final installment amortizes whatever balance is
/// left, so the schedule always closes at exactly zero regardless of drift
/// in the earlier rows. Balances are floored at zero.
pub fn generate_schedule(
    principal: f64,
    monthly_rate: f64,
    monthly_payment: f64,
    months: u32,
) -> PaymentSchedule {
    let mut schedule = PaymentSchedule {
        installments: Vec::with_capacity(months as usize),
    };
    let mut balance = principal;

    for index in 1..=months {
        let interest = balance * monthly_rate;
        let amortization = if index == months {
            balance
        } else {
            monthly_payment - interest
        };
        let remaining_balance = (balance - amortization).max(0.0);

        schedule.add_installment(Installment {
            index,
            amortization,
            interest,
            remaining_balance,
        });
        balance = remaining_balance;
    }

    log::debug!(
        "Generated {} installments for principal {:.2} at monthly rate {:.6}",
        schedule.len(),
        principal,
        monthly_rate
    );

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::monthly_payment;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    fn build(principal: f64, monthly_rate: f64, months: u32) -> PaymentSchedule {
        let payment = monthly_payment(principal, monthly_rate, months);
        generate_schedule(principal, monthly_rate, payment, months)
    }

    #[test]
    fn test_reference_loan_closes_at_zero() {
        let schedule = build(30_000.0, 0.01, 12);

        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule.last().unwrap().remaining_balance, 0.0);
        assert_eq!(format!("{:.2}", schedule.last().unwrap().remaining_balance), "0.00");

        let first = schedule.installments[0];
        assert_eq!(first.index, 1);
        assert_abs_diff_eq!(first.interest, 300.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.amortization, 2365.4637, epsilon = 1e-4);

        // Every payment but the last is the constant annuity
        for installment in schedule.iter().take(11) {
            assert_abs_diff_eq!(installment.payment(), 2665.4637, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_zero_rate_rows() {
        let schedule = build(1000.0, 0.0, 10);

        assert_eq!(schedule.len(), 10);
        for (i, installment) in schedule.iter().enumerate() {
            assert_eq!(installment.index, i as u32 + 1);
            assert_eq!(installment.interest, 0.0);
            assert_abs_diff_eq!(installment.amortization, 100.0, epsilon = 1e-9);
            assert_eq!(format!("{:.2}", installment.payment()), "100.00");
        }
        assert_eq!(schedule.last().unwrap().remaining_balance, 0.0);
    }

    #[test]
    fn test_zero_principal_rows_are_zero() {
        let schedule = build(0.0, 0.015, 24);

        assert_eq!(schedule.len(), 24);
        for installment in &schedule {
            assert_eq!(installment.amortization, 0.0);
            assert_eq!(installment.interest, 0.0);
            assert_eq!(installment.remaining_balance, 0.0);
        }
    }

    #[test]
    fn test_final_installment_absorbs_drift() {
        // A payment slightly too small leaves a residual the last row must clear
        let schedule = generate_schedule(1000.0, 0.01, 80.0, 12);
        let last = schedule.last().unwrap();

        assert_eq!(last.remaining_balance, 0.0);
        assert!(last.amortization > 80.0);
        assert_abs_diff_eq!(schedule.summary().total_amortization, 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_overpayment_floors_balance() {
        let schedule = generate_schedule(1000.0, 0.0, 600.0, 3);

        let balances: Vec<f64> = schedule.iter().map(|i| i.remaining_balance).collect();
        assert_eq!(balances, vec![400.0, 0.0, 0.0]);
    }

    #[test]
    fn test_summary() {
        let schedule = build(30_000.0, 0.01, 12);
        let summary = schedule.summary();

        assert_eq!(summary.installments, 12);
        assert_abs_diff_eq!(summary.total_amortization, 30_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(summary.total_interest, 2665.4637 * 12.0 - 30_000.0, epsilon = 1e-2);
        assert_eq!(summary.final_balance, 0.0);
    }

    #[test]
    fn test_empty_schedule_summary() {
        let summary = PaymentSchedule::new().summary();
        assert_eq!(summary.installments, 0);
        assert_eq!(summary.final_balance, 0.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_schedule_invariants(
            principal_cents in 0u64..100_000_000,
            rate_bp in 0u32..500,
            months in 1u32..480
        ) {
            let principal = principal_cents as f64 / 100.0;
            let monthly_rate = rate_bp as f64 / 10_000.0;
            let schedule = build(principal, monthly_rate, months);

            prop_assert_eq!(schedule.len(), months as usize);
            prop_assert_eq!(schedule.last().unwrap().remaining_balance, 0.0);

            let total: f64 = schedule.iter().map(|i| i.amortization).sum();
            prop_assert!(
                (total - principal).abs() <= 1e-6,
                "amortization sum {} != principal {}", total, principal
            );

            let mut previous = principal;
            for installment in &schedule {
                prop_assert!(installment.remaining_balance >= 0.0);
                prop_assert!(installment.remaining_balance <= previous);
                previous = installment.remaining_balance;
            }
        }

        #[test]
        fn prop_zero_rate_is_exact_division(
            principal_cents in 0u64..100_000_000,
            months in 1u32..480
        ) {
            let principal = principal_cents as f64 / 100.0;
            prop_assert_eq!(monthly_payment(principal, 0.0, months), principal / months as f64);
        }
    }
}
