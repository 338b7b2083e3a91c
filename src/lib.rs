//! Loan Simulator - Financing simulations built on a shared amortization engine
//!
//! This library provides:
//! - Fixed-rate annuity payments and amortization schedules
//! - Vehicle, FGTS, consortium, payroll (INSS and public) and property simulators
//! - Lenient form-field parsing and CSV request loading
//! - pt-BR currency text, semicolon-delimited export and share links
//! - Parallel batch simulation

pub mod amortization;
pub mod batch;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod simulators;

// Re-export commonly used types
pub use amortization::{
    generate_schedule, monthly_payment, Installment, LoanTerms, PaymentSchedule, MAX_TERM_MONTHS,
};
pub use batch::{BatchRunner, BatchTotals};
pub use config::SimulatorConfig;
pub use error::{SimulationError, SimulationResult};
pub use simulators::{simulate, SimulationKind, SimulationOutcome, SimulationRequest};
