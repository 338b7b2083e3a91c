//! Product simulators built on the amortization engine
//!
//! Each product turns its own form fields into loan terms, then reports the
//! monthly payment and the figures its page displays.

pub mod consortium;
pub mod fgts;
pub mod payroll;
pub mod property;
pub mod vehicle;

pub use consortium::{ConsortiumInput, ConsortiumOutcome};
pub use fgts::{FgtsInput, FgtsOutcome};
pub use payroll::{CommitmentBand, PayrollInput, PayrollOutcome, PayrollVariant};
pub use property::{PropertyInput, PropertyOutcome};
pub use vehicle::{VehicleInput, VehicleOutcome};

use serde::{Deserialize, Serialize};

use crate::amortization::PaymentSchedule;
use crate::config::SimulatorConfig;
use crate::error::{SimulationError, SimulationResult};
use crate::report::{self, DEFAULT_EXPORT_FILE};

/// Product being simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationKind {
    Vehicle,
    Fgts,
    Consortium,
    PayrollInss,
    PayrollPublic,
    Property,
}

impl SimulationKind {
    pub const ALL: [SimulationKind; 6] = [
        SimulationKind::Vehicle,
        SimulationKind::Fgts,
        SimulationKind::Consortium,
        SimulationKind::PayrollInss,
        SimulationKind::PayrollPublic,
        SimulationKind::Property,
    ];

    /// Code used in request files
    pub fn code(&self) -> &'static str {
        match self {
            SimulationKind::Vehicle => "vehicle",
            SimulationKind::Fgts => "fgts",
            SimulationKind::Consortium => "consortium",
            SimulationKind::PayrollInss => "payroll_inss",
            SimulationKind::PayrollPublic => "payroll_public",
            SimulationKind::Property => "property",
        }
    }

    pub fn from_code(code: &str) -> SimulationResult<Self> {
        let normalized = code.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == normalized)
            .ok_or_else(|| SimulationError::UnknownKind(code.to_string()))
    }

    /// Default file name for the exported schedule
    pub fn export_file_name(&self) -> &'static str {
        match self {
            SimulationKind::Vehicle => "amortizacao_veiculo.csv",
            SimulationKind::PayrollInss => "amortizacao_consignado_inss.csv",
            _ => DEFAULT_EXPORT_FILE,
        }
    }
}

/// Inputs for any product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimulationRequest {
    Vehicle(VehicleInput),
    Fgts(FgtsInput),
    Consortium(ConsortiumInput),
    PayrollInss(PayrollInput),
    PayrollPublic(PayrollInput),
    Property(PropertyInput),
}

impl SimulationRequest {
    pub fn kind(&self) -> SimulationKind {
        match self {
            SimulationRequest::Vehicle(_) => SimulationKind::Vehicle,
            SimulationRequest::Fgts(_) => SimulationKind::Fgts,
            SimulationRequest::Consortium(_) => SimulationKind::Consortium,
            SimulationRequest::PayrollInss(_) => SimulationKind::PayrollInss,
            SimulationRequest::PayrollPublic(_) => SimulationKind::PayrollPublic,
            SimulationRequest::Property(_) => SimulationKind::Property,
        }
    }
}

/// Result of one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimulationOutcome {
    Vehicle(VehicleOutcome),
    Fgts(FgtsOutcome),
    Consortium(ConsortiumOutcome),
    PayrollInss(PayrollOutcome),
    PayrollPublic(PayrollOutcome),
    Property(PropertyOutcome),
}

/// Run the simulator matching the request
pub fn simulate(request: &SimulationRequest) -> SimulationResult<SimulationOutcome> {
    let outcome = match request {
        SimulationRequest::Vehicle(input) => SimulationOutcome::Vehicle(vehicle::simulate(input)?),
        SimulationRequest::Fgts(input) => SimulationOutcome::Fgts(fgts::simulate(input)?),
        SimulationRequest::Consortium(input) => {
            SimulationOutcome::Consortium(consortium::simulate(input)?)
        }
        SimulationRequest::PayrollInss(input) => {
            SimulationOutcome::PayrollInss(payroll::simulate(PayrollVariant::Inss, input)?)
        }
        SimulationRequest::PayrollPublic(input) => {
            SimulationOutcome::PayrollPublic(payroll::simulate(PayrollVariant::Public, input)?)
        }
        SimulationRequest::Property(input) => SimulationOutcome::Property(property::simulate(input)?),
    };

    log::debug!(
        "{} simulation: monthly payment {:.2} over {} months",
        outcome.kind().code(),
        outcome.monthly_payment(),
        outcome.term_months()
    );

    Ok(outcome)
}

impl SimulationOutcome {
    pub fn kind(&self) -> SimulationKind {
        match self {
            SimulationOutcome::Vehicle(_) => SimulationKind::Vehicle,
            SimulationOutcome::Fgts(_) => SimulationKind::Fgts,
            SimulationOutcome::Consortium(_) => SimulationKind::Consortium,
            SimulationOutcome::PayrollInss(_) => SimulationKind::PayrollInss,
            SimulationOutcome::PayrollPublic(_) => SimulationKind::PayrollPublic,
            SimulationOutcome::Property(_) => SimulationKind::Property,
        }
    }

    /// Headline monthly figure (installment for consortium shares)
    pub fn monthly_payment(&self) -> f64 {
        match self {
            SimulationOutcome::Vehicle(o) => o.monthly_payment,
            SimulationOutcome::Fgts(o) => o.monthly_payment,
            SimulationOutcome::Consortium(o) => o.installment,
            SimulationOutcome::PayrollInss(o) | SimulationOutcome::PayrollPublic(o) => {
                o.monthly_payment
            }
            SimulationOutcome::Property(o) => o.monthly_payment,
        }
    }

    /// Amount being repaid through the installments
    pub fn financed_amount(&self) -> f64 {
        match self {
            SimulationOutcome::Vehicle(o) => o.terms.principal,
            SimulationOutcome::Fgts(o) => o.released,
            SimulationOutcome::Consortium(o) => o.balance_after_bid,
            SimulationOutcome::PayrollInss(o) | SimulationOutcome::PayrollPublic(o) => {
                o.terms.principal
            }
            SimulationOutcome::Property(o) => o.max_financed,
        }
    }

    pub fn term_months(&self) -> u32 {
        match self {
            SimulationOutcome::Vehicle(o) => o.input.months,
            SimulationOutcome::Fgts(o) => o.input.months,
            SimulationOutcome::Consortium(o) => o.input.months,
            SimulationOutcome::PayrollInss(o) | SimulationOutcome::PayrollPublic(o) => {
                o.input.months
            }
            SimulationOutcome::Property(o) => o.input.months,
        }
    }

    /// Amortization schedule, for the products whose page shows one
    pub fn schedule(&self) -> Option<PaymentSchedule> {
        match self {
            SimulationOutcome::Vehicle(o) => Some(o.schedule()),
            SimulationOutcome::PayrollInss(o) | SimulationOutcome::PayrollPublic(o) => o.schedule(),
            _ => None,
        }
    }

    /// Multi-line summary sent through the share link
    pub fn share_text(&self) -> String {
        match self {
            SimulationOutcome::Vehicle(o) => o.share_text(),
            SimulationOutcome::Fgts(o) => o.share_text(),
            SimulationOutcome::Consortium(o) => o.share_text(),
            SimulationOutcome::PayrollInss(o) | SimulationOutcome::PayrollPublic(o) => {
                o.share_text()
            }
            SimulationOutcome::Property(o) => o.share_text(),
        }
    }

    pub fn share_link(&self, config: &SimulatorConfig) -> SimulationResult<url::Url> {
        report::share_link(config, &self.share_text())
    }
}

/// Amounts and percentages must be finite and non-negative
pub(crate) fn ensure_amount(field: &str, value: f64) -> SimulationResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SimulationError::invalid(
            field,
            format!("must be a non-negative number, got {}", value),
        ));
    }
    Ok(())
}
