//! Payroll-deduction loans for social-security (INSS) beneficiaries and
//! public servants

use serde::{Deserialize, Serialize};

use super::ensure_amount;
use crate::amortization::{LoanTerms, PaymentSchedule};
use crate::error::SimulationResult;
use crate::report::format_brl;

/// Who repays the loan through payroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayrollVariant {
    /// Social-security beneficiaries
    Inss,
    /// Public servants
    Public,
}

impl PayrollVariant {
    fn title(&self) -> &'static str {
        match self {
            PayrollVariant::Inss => "Simulação Consignado INSS",
            PayrollVariant::Public => "Simulação Consignado Servidores",
        }
    }

    /// Only the INSS simulator publishes an amortization table
    pub fn offers_schedule(&self) -> bool {
        matches!(self, PayrollVariant::Inss)
    }
}

/// How much of the monthly income the installment takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitmentBand {
    /// Below 30%
    Good,
    /// From 30% up to 50%
    Warning,
    /// 50% or more
    Danger,
}

impl CommitmentBand {
    pub fn from_percent(percent: u32) -> Self {
        if percent < 30 {
            CommitmentBand::Good
        } else if percent < 50 {
            CommitmentBand::Warning
        } else {
            CommitmentBand::Danger
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollInput {
    pub amount: f64,
    pub months: u32,
    pub annual_rate_percent: f64,
    /// Net monthly income; zero when not informed
    pub monthly_income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollOutcome {
    pub variant: PayrollVariant,
    pub input: PayrollInput,
    pub terms: LoanTerms,
    pub monthly_payment: f64,
    /// Installment as a whole percentage of income, when income is known
    pub income_commitment_percent: Option<u32>,
    pub commitment_band: Option<CommitmentBand>,
}

pub fn simulate(variant: PayrollVariant, input: &PayrollInput) -> SimulationResult<PayrollOutcome> {
    ensure_amount("amount", input.amount)?;
    ensure_amount("monthly_income", input.monthly_income)?;

    let terms = LoanTerms::new(input.amount, input.annual_rate_percent, input.months)?;
    let monthly_payment = terms.monthly_payment();
    let income_commitment_percent = income_commitment(monthly_payment, input.monthly_income);

    Ok(PayrollOutcome {
        variant,
        input: input.clone(),
        terms,
        monthly_payment,
        income_commitment_percent,
        commitment_band: income_commitment_percent.map(CommitmentBand::from_percent),
    })
}

fn income_commitment(monthly_payment: f64, monthly_income: f64) -> Option<u32> {
    if monthly_income <= 0.0 {
        return None;
    }
    Some((monthly_payment / monthly_income * 100.0).round() as u32)
}

impl PayrollOutcome {
    /// Schedule for the variants that publish one
    pub fn schedule(&self) -> Option<PaymentSchedule> {
        self.variant.offers_schedule().then(|| self.terms.schedule())
    }

    pub fn share_text(&self) -> String {
        [
            self.variant.title().to_string(),
            format!("Valor: {}", format_brl(self.input.amount)),
            format!("Parcela estimada: {}", format_brl(self.monthly_payment)),
            format!("Prazo: {} meses", self.input.months),
        ]
        .join("\n")
    }
}
