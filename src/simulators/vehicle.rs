//! Vehicle financing

use serde::{Deserialize, Serialize};

use super::ensure_amount;
use crate::amortization::{LoanTerms, PaymentSchedule};
use crate::error::SimulationResult;
use crate::report::{format_brl, format_percent};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleInput {
    pub price: f64,
    pub down_payment: f64,
    pub months: u32,
    pub annual_rate_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleOutcome {
    pub input: VehicleInput,
    pub terms: LoanTerms,
    pub monthly_payment: f64,
    /// Installments plus the down payment
    pub total_paid: f64,
    /// Total paid above the vehicle price
    pub total_interest: f64,
}

pub fn simulate(input: &VehicleInput) -> SimulationResult<VehicleOutcome> {
    ensure_amount("price", input.price)?;
    ensure_amount("down_payment", input.down_payment)?;

    let principal = (input.price - input.down_payment).max(0.0);
    let terms = LoanTerms::new(principal, input.annual_rate_percent, input.months)?;
    let monthly_payment = terms.monthly_payment();
    let total_paid = monthly_payment * input.months as f64 + input.down_payment;

    Ok(VehicleOutcome {
        input: input.clone(),
        terms,
        monthly_payment,
        total_paid,
        total_interest: total_paid - input.price,
    })
}

impl VehicleOutcome {
    pub fn schedule(&self) -> PaymentSchedule {
        self.terms.schedule()
    }

    pub fn share_text(&self) -> String {
        [
            "Simulação de financiamento".to_string(),
            format!("Valor do veículo: {}", format_brl(self.input.price)),
            format!("Entrada: {}", format_brl(self.input.down_payment)),
            format!("Parcela mensal: {}", format_brl(self.monthly_payment)),
            format!("Prazo: {} meses", self.input.months),
            format!("Taxa anual: {}", format_percent(self.input.annual_rate_percent)),
        ]
        .join("\n")
    }
}
