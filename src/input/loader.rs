//! Load simulation requests from CSV
//!
//! One request per row. `Kind` selects the product; the remaining columns
//! are the raw form fields, and columns a product does not use may be blank
//! or absent.

use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::form::{parse_amount, parse_months};
use crate::error::SimulationResult;
use crate::simulators::{
    ConsortiumInput, FgtsInput, PayrollInput, PropertyInput, SimulationKind, SimulationRequest,
    VehicleInput,
};

/// Raw CSV row; every field is kept as typed so the form fallbacks apply
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct CsvRow {
    #[serde(rename = "Kind")]
    kind: String,
    #[serde(rename = "Months")]
    months: String,
    #[serde(rename = "AnnualRatePercent")]
    annual_rate_percent: String,
    #[serde(rename = "Price")]
    price: String,
    #[serde(rename = "DownPayment")]
    down_payment: String,
    #[serde(rename = "Balance")]
    balance: String,
    #[serde(rename = "WithdrawalPercent")]
    withdrawal_percent: String,
    #[serde(rename = "CreditValue")]
    credit_value: String,
    #[serde(rename = "AdminFeePercent")]
    admin_fee_percent: String,
    #[serde(rename = "Bid")]
    bid: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "MonthlyIncome")]
    monthly_income: String,
    #[serde(rename = "PropertyValue")]
    property_value: String,
    #[serde(rename = "LtvPercent")]
    ltv_percent: String,
}

impl CsvRow {
    fn into_request(self) -> SimulationResult<SimulationRequest> {
        let months = parse_months(&self.months);
        let annual_rate_percent = parse_amount(&self.annual_rate_percent);

        let payroll = || PayrollInput {
            amount: parse_amount(&self.amount),
            months,
            annual_rate_percent,
            monthly_income: parse_amount(&self.monthly_income),
        };

        let request = match SimulationKind::from_code(&self.kind)? {
            SimulationKind::Vehicle => SimulationRequest::Vehicle(VehicleInput {
                price: parse_amount(&self.price),
                down_payment: parse_amount(&self.down_payment),
                months,
                annual_rate_percent,
            }),
            SimulationKind::Fgts => SimulationRequest::Fgts(FgtsInput {
                balance: parse_amount(&self.balance),
                withdrawal_percent: parse_amount(&self.withdrawal_percent),
                months,
                annual_rate_percent,
            }),
            SimulationKind::Consortium => SimulationRequest::Consortium(ConsortiumInput {
                credit_value: parse_amount(&self.credit_value),
                months,
                admin_fee_percent: parse_amount(&self.admin_fee_percent),
                bid: parse_amount(&self.bid),
            }),
            SimulationKind::PayrollInss => SimulationRequest::PayrollInss(payroll()),
            SimulationKind::PayrollPublic => SimulationRequest::PayrollPublic(payroll()),
            SimulationKind::Property => SimulationRequest::Property(PropertyInput {
                property_value: parse_amount(&self.property_value),
                ltv_percent: parse_amount(&self.ltv_percent),
                months,
                annual_rate_percent,
            }),
        };

        Ok(request)
    }
}

/// Load all requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(path: P) -> SimulationResult<Vec<SimulationRequest>> {
    let file = std::fs::File::open(path.as_ref())?;
    let requests = load_requests_from_reader(file)?;
    log::info!("Loaded {} requests from {}", requests.len(), path.as_ref().display());
    Ok(requests)
}

/// Load requests from any reader (e.g., string buffer, stdin)
pub fn load_requests_from_reader<R: std::io::Read>(reader: R) -> SimulationResult<Vec<SimulationRequest>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut requests = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        requests.push(row.into_request()?);
    }

    Ok(requests)
}
