//! Consortium share (no interest; the administrative fee is charged up front)

use serde::{Deserialize, Serialize};

use super::ensure_amount;
use crate::amortization::MAX_TERM_MONTHS;
use crate::error::{SimulationError, SimulationResult};
use crate::report::{format_brl, format_percent};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsortiumInput {
    pub credit_value: f64,
    pub months: u32,
    pub admin_fee_percent: f64,
    /// Bid offered to anticipate the award
    pub bid: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsortiumOutcome {
    pub input: ConsortiumInput,
    pub admin_fee: f64,
    /// Credit value plus administrative fee
    pub total: f64,
    pub balance_after_bid: f64,
    pub installment: f64,
}

pub fn simulate(input: &ConsortiumInput) -> SimulationResult<ConsortiumOutcome> {
    ensure_amount("credit_value", input.credit_value)?;
    ensure_amount("admin_fee_percent", input.admin_fee_percent)?;
    ensure_amount("bid", input.bid)?;
    if input.months == 0 || input.months > MAX_TERM_MONTHS {
        return Err(SimulationError::invalid(
            "months",
            format!("must be between 1 and {}", MAX_TERM_MONTHS),
        ));
    }

    let admin_fee = input.credit_value * (input.admin_fee_percent / 100.0);
    let total = input.credit_value + admin_fee;
    let balance_after_bid = (total - input.bid).max(0.0);

    log::debug!("Consortium total {:.2}, balance after bid {:.2}", total, balance_after_bid);

    Ok(ConsortiumOutcome {
        input: input.clone(),
        admin_fee,
        total,
        balance_after_bid,
        installment: balance_after_bid / input.months as f64,
    })
}

impl ConsortiumOutcome {
    pub fn share_text(&self) -> String {
        [
            "Simulação de Consórcio".to_string(),
            format!("Valor: {}", format_brl(self.input.credit_value)),
            format!("Prazo: {} meses", self.input.months),
            format!("Taxa administrativa: {}", format_percent(self.input.admin_fee_percent)),
            format!("Lance: {}", format_brl(self.input.bid)),
            format!("Parcela estimada: {}", format_brl(self.installment)),
        ]
        .join("\n")
    }
}
