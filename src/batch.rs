//! Batch runner for many simulations
//!
//! Requests are independent, so they are fanned out over the rayon pool and
//! collected back in input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::SimulationResult;
use crate::simulators::{simulate, SimulationOutcome, SimulationRequest};

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchRunner {
    /// Run sequentially instead of on the rayon pool
    sequential: bool,
}

impl BatchRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner that keeps everything on the calling thread
    pub fn sequential() -> Self {
        Self { sequential: true }
    }

    /// Run every request; one result per request, in input order
    pub fn run(&self, requests: &[SimulationRequest]) -> Vec<SimulationResult<SimulationOutcome>> {
        let results: Vec<_> = if self.sequential {
            requests.iter().map(simulate).collect()
        } else {
            requests.par_iter().map(simulate).collect()
        };

        let failures = results.iter().filter(|r| r.is_err()).count();
        if failures > 0 {
            log::warn!("{} of {} simulations were rejected", failures, results.len());
        }
        log::info!("Ran {} simulations", results.len());

        results
    }
}

/// Aggregate figures across a batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchTotals {
    pub simulations: usize,
    pub failures: usize,
    pub total_financed: f64,
    pub total_monthly_payment: f64,
}

impl BatchTotals {
    pub fn from_results(results: &[SimulationResult<SimulationOutcome>]) -> Self {
        results.iter().fold(Self::default(), |mut totals, result| {
            match result {
                Ok(outcome) => {
                    totals.simulations += 1;
                    totals.total_financed += outcome.financed_amount();
                    totals.total_monthly_payment += outcome.monthly_payment();
                }
                Err(_) => totals.failures += 1,
            }
            totals
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulators::{ConsortiumInput, PayrollInput, VehicleInput};
    use approx::assert_abs_diff_eq;

    fn requests() -> Vec<SimulationRequest> {
        vec![
            SimulationRequest::Vehicle(VehicleInput {
                price: 1000.0,
                down_payment: 0.0,
                months: 10,
                annual_rate_percent: 0.0,
            }),
            SimulationRequest::Consortium(ConsortiumInput {
                credit_value: 1000.0,
                months: 0,
                admin_fee_percent: 10.0,
                bid: 0.0,
            }),
            SimulationRequest::PayrollPublic(PayrollInput {
                amount: 2000.0,
                months: 20,
                annual_rate_percent: 0.0,
                monthly_income: 1000.0,
            }),
        ]
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let parallel = BatchRunner::new().run(&requests());
        let sequential = BatchRunner::sequential().run(&requests());

        assert_eq!(parallel.len(), 3);
        for (p, s) in parallel.iter().zip(&sequential) {
            match (p, s) {
                (Ok(a), Ok(b)) => assert_eq!(a, b),
                (Err(_), Err(_)) => {}
                _ => panic!("parallel and sequential runs disagree"),
            }
        }
    }

    #[test]
    fn test_rejected_request_does_not_abort_batch() {
        let results = BatchRunner::new().run(&requests());

        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_totals() {
        let results = BatchRunner::new().run(&requests());
        let totals = BatchTotals::from_results(&results);

        assert_eq!(totals.simulations, 2);
        assert_eq!(totals.failures, 1);
        assert_abs_diff_eq!(totals.total_financed, 3000.0);
        assert_abs_diff_eq!(totals.total_monthly_payment, 200.0);
    }
}
