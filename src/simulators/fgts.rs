//! Retirement-fund (FGTS) withdrawal advance

use serde::{Deserialize, Serialize};

use super::ensure_amount;
use crate::amortization::LoanTerms;
use crate::error::SimulationResult;
use crate::report::format_brl;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FgtsInput {
    /// Fund balance
    pub balance: f64,
    /// Share of the balance advanced, in percent
    pub withdrawal_percent: f64,
    pub months: u32,
    pub annual_rate_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FgtsOutcome {
    pub input: FgtsInput,
    pub terms: LoanTerms,
    /// Amount released to the account holder
    pub released: f64,
    pub monthly_payment: f64,
}

pub fn simulate(input: &FgtsInput) -> SimulationResult<FgtsOutcome> {
    ensure_amount("balance", input.balance)?;
    ensure_amount("withdrawal_percent", input.withdrawal_percent)?;

    let released = input.balance * (input.withdrawal_percent / 100.0);
    let terms = LoanTerms::new(released, input.annual_rate_percent, input.months)?;

    Ok(FgtsOutcome {
        input: input.clone(),
        terms,
        released,
        monthly_payment: terms.monthly_payment(),
    })
}

impl FgtsOutcome {
    pub fn share_text(&self) -> String {
        [
            "Simulação FGTS".to_string(),
            format!("Valor liberado estimado: {}", format_brl(self.released)),
            format!("Parcela estimada: {}", format_brl(self.monthly_payment)),
            format!("Prazo: {} meses", self.input.months),
        ]
        .join("\n")
    }
}
