//! Property-backed credit line

use serde::{Deserialize, Serialize};

use super::ensure_amount;
use crate::amortization::LoanTerms;
use crate::error::SimulationResult;
use crate::report::{format_brl, format_percent};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInput {
    pub property_value: f64,
    /// Loan-to-value ceiling in percent
    pub ltv_percent: f64,
    pub months: u32,
    pub annual_rate_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyOutcome {
    pub input: PropertyInput,
    pub terms: LoanTerms,
    pub max_financed: f64,
    pub monthly_payment: f64,
}

pub fn simulate(input: &PropertyInput) -> SimulationResult<PropertyOutcome> {
    ensure_amount("property_value", input.property_value)?;
    ensure_amount("ltv_percent", input.ltv_percent)?;

    let max_financed = input.property_value * (input.ltv_percent / 100.0);
    let terms = LoanTerms::new(max_financed, input.annual_rate_percent, input.months)?;

    Ok(PropertyOutcome {
        input: input.clone(),
        terms,
        max_financed,
        monthly_payment: terms.monthly_payment(),
    })
}

impl PropertyOutcome {
    pub fn share_text(&self) -> String {
        [
            "Simulação Garantia Imóvel".to_string(),
            format!("Valor imóvel: {}", format_brl(self.input.property_value)),
            format!("LTV: {}", format_percent(self.input.ltv_percent)),
            format!("Valor financiável: {}", format_brl(self.max_financed)),
            format!("Parcela estimada: {}", format_brl(self.monthly_payment)),
            format!("Prazo: {} meses", self.input.months),
        ]
        .join("\n")
    }
}
