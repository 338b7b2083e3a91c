//! Amortization engine shared by every simulator
//!
//! Two closed-form operations:
//! - Fixed-rate annuity payment (French/amortizing system)
//! - Month-by-month schedule with a final installment that closes the balance

mod payment;
mod schedule;
mod terms;

pub use payment::{monthly_payment, monthly_rate_from_annual_percent};
pub use schedule::{generate_schedule, Installment, PaymentSchedule, ScheduleSummary};
pub use terms::{LoanTerms, MAX_TERM_MONTHS};
