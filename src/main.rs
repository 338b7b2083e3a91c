//! Loan Simulator CLI
//!
//! Runs one simulation from command-line fields and prints the figures,
//! optionally with the amortization table, a CSV export and a share link.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use loan_simulator::input::{parse_amount, parse_months};
use loan_simulator::report::{export_schedule, format_brl};
use loan_simulator::simulators::{
    CommitmentBand, ConsortiumInput, FgtsInput, PayrollInput, PropertyInput, VehicleInput,
};
use loan_simulator::{simulate, PaymentSchedule, SimulationOutcome, SimulationRequest, SimulatorConfig};

/// Financing simulations: vehicle, FGTS, consortium, payroll and property loans
#[derive(Parser)]
#[command(name = "loan_simulator", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON configuration file (contact phone, share URL)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the amortization table
    #[arg(long, global = true)]
    schedule: bool,

    /// Export the amortization table as CSV (default file name per product)
    #[arg(long, global = true)]
    export: Option<Option<PathBuf>>,

    /// Print the pre-filled share link
    #[arg(long, global = true)]
    share: bool,

    /// Print the outcome as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

// Fields are taken as typed and go through the same lenient parsing as the
// web forms: blank amounts read as 0 and blank terms as 1 month.
#[derive(Subcommand)]
enum Command {
    /// Vehicle financing
    Vehicle {
        #[arg(long, default_value = "")]
        price: String,
        #[arg(long, default_value = "")]
        down: String,
        #[arg(long, default_value = "")]
        months: String,
        /// Annual rate in percent
        #[arg(long, default_value = "")]
        rate: String,
    },
    /// FGTS withdrawal advance
    Fgts {
        /// Fund balance
        #[arg(long, default_value = "")]
        balance: String,
        /// Share of the balance advanced, in percent
        #[arg(long, default_value = "")]
        percent: String,
        #[arg(long, default_value = "")]
        months: String,
        #[arg(long, default_value = "")]
        rate: String,
    },
    /// Consortium share
    Consortium {
        /// Credit value
        #[arg(long, default_value = "")]
        value: String,
        #[arg(long, default_value = "")]
        months: String,
        /// Administrative fee in percent
        #[arg(long, default_value = "")]
        admin_fee: String,
        #[arg(long, default_value = "")]
        bid: String,
    },
    /// Payroll loan for INSS beneficiaries
    PayrollInss(PayrollArgs),
    /// Payroll loan for public servants
    PayrollPublic(PayrollArgs),
    /// Property-backed credit line
    Property {
        #[arg(long, default_value = "")]
        property_value: String,
        /// Loan-to-value in percent
        #[arg(long, default_value = "")]
        ltv: String,
        #[arg(long, default_value = "")]
        months: String,
        #[arg(long, default_value = "")]
        rate: String,
    },
}

#[derive(Args)]
struct PayrollArgs {
    #[arg(long, default_value = "")]
    amount: String,
    #[arg(long, default_value = "")]
    months: String,
    #[arg(long, default_value = "")]
    rate: String,
    /// Net monthly income
    #[arg(long, default_value = "")]
    income: String,
}

impl PayrollArgs {
    fn to_input(&self) -> PayrollInput {
        PayrollInput {
            amount: parse_amount(&self.amount),
            months: parse_months(&self.months),
            annual_rate_percent: parse_amount(&self.rate),
            monthly_income: parse_amount(&self.income),
        }
    }
}

impl Command {
    fn to_request(&self) -> SimulationRequest {
        match self {
            Command::Vehicle { price, down, months, rate } => SimulationRequest::Vehicle(VehicleInput {
                price: parse_amount(price),
                down_payment: parse_amount(down),
                months: parse_months(months),
                annual_rate_percent: parse_amount(rate),
            }),
            Command::Fgts { balance, percent, months, rate } => SimulationRequest::Fgts(FgtsInput {
                balance: parse_amount(balance),
                withdrawal_percent: parse_amount(percent),
                months: parse_months(months),
                annual_rate_percent: parse_amount(rate),
            }),
            Command::Consortium { value, months, admin_fee, bid } => {
                SimulationRequest::Consortium(ConsortiumInput {
                    credit_value: parse_amount(value),
                    months: parse_months(months),
                    admin_fee_percent: parse_amount(admin_fee),
                    bid: parse_amount(bid),
                })
            }
            Command::PayrollInss(args) => SimulationRequest::PayrollInss(args.to_input()),
            Command::PayrollPublic(args) => SimulationRequest::PayrollPublic(args.to_input()),
            Command::Property { property_value, ltv, months, rate } => {
                SimulationRequest::Property(PropertyInput {
                    property_value: parse_amount(property_value),
                    ltv_percent: parse_amount(ltv),
                    months: parse_months(months),
                    annual_rate_percent: parse_amount(rate),
                })
            }
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SimulatorConfig::load(cli.config.as_deref()).context("Unable to load configuration")?;
    let request = cli.command.to_request();
    let outcome = simulate(&request).context("Simulation rejected")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_figures(&outcome);
    }

    let schedule = requested_schedule(cli, &outcome);
    if let Some(schedule) = &schedule {
        if cli.schedule {
            print_schedule(schedule);
        }
        if let Some(export) = &cli.export {
            let path = export
                .clone()
                .unwrap_or_else(|| PathBuf::from(outcome.kind().export_file_name()));
            export_schedule(schedule, &path)
                .with_context(|| format!("Unable to export schedule to {}", path.display()))?;
            println!("\nSchedule written to: {}", path.display());
        }
    }

    if cli.share {
        let link = outcome.share_link(&config).context("Unable to build share link")?;
        println!("\nShare: {}", link);
    }

    Ok(())
}

/// Build the amortization table only when it will be printed or exported
fn requested_schedule(cli: &Cli, outcome: &SimulationOutcome) -> Option<PaymentSchedule> {
    if !cli.schedule && cli.export.is_none() {
        return None;
    }

    let schedule = outcome.schedule();
    if schedule.is_none() {
        log::warn!("{} simulations have no amortization table", outcome.kind().code());
    }
    schedule
}

fn print_figures(outcome: &SimulationOutcome) {
    match outcome {
        SimulationOutcome::Vehicle(o) => {
            println!("Vehicle financing");
            println!("  Financed:       {}", format_brl(o.terms.principal));
            println!("  Monthly:        {}", format_brl(o.monthly_payment));
            println!("  Total paid:     {}", format_brl(o.total_paid));
            println!("  Total interest: {}", format_brl(o.total_interest));
        }
        SimulationOutcome::Fgts(o) => {
            println!("FGTS advance");
            println!("  Released:       {}", format_brl(o.released));
            println!("  Monthly:        {}", format_brl(o.monthly_payment));
        }
        SimulationOutcome::Consortium(o) => {
            println!("Consortium");
            println!("  Total:          {}", format_brl(o.total));
            println!("  After bid:      {}", format_brl(o.balance_after_bid));
            println!("  Installment:    {}", format_brl(o.installment));
        }
        SimulationOutcome::PayrollInss(o) | SimulationOutcome::PayrollPublic(o) => {
            println!("Payroll loan ({:?})", o.variant);
            println!("  Monthly:        {}", format_brl(o.monthly_payment));
            println!("  Term:           {} meses", o.input.months);
            match (o.income_commitment_percent, o.commitment_band) {
                (Some(pct), Some(band)) => {
                    let label = match band {
                        CommitmentBand::Good => "good",
                        CommitmentBand::Warning => "warn",
                        CommitmentBand::Danger => "danger",
                    };
                    println!("  Income share:   {}% ({})", pct, label);
                }
                _ => println!("  Income share:   —"),
            }
        }
        SimulationOutcome::Property(o) => {
            println!("Property-backed credit");
            println!("  Max financed:   {}", format_brl(o.max_financed));
            println!("  Monthly:        {}", format_brl(o.monthly_payment));
        }
    }
}

fn print_schedule(schedule: &PaymentSchedule) {
    println!();
    println!("{:>7} {:>16} {:>16} {:>16}", "Parcela", "Amortização", "Juros", "Saldo");
    println!("{}", "-".repeat(58));

    for installment in schedule {
        println!(
            "{:>7} {:>16} {:>16} {:>16}",
            installment.index,
            format_brl(installment.amortization),
            format_brl(installment.interest),
            format_brl(installment.remaining_balance),
        );
    }

    let summary = schedule.summary();
    println!("{}", "-".repeat(58));
    println!(
        "{:>7} {:>16} {:>16}",
        summary.installments,
        format_brl(summary.total_amortization),
        format_brl(summary.total_interest),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome_for(cli: &Cli) -> SimulationOutcome {
        simulate(&cli.command.to_request()).unwrap()
    }

    #[test]
    fn test_schedule_not_built_for_figures_only() {
        let cli = Cli::try_parse_from([
            "loan_simulator", "vehicle", "--price", "30000", "--months", "4294967295", "--rate", "12",
        ])
        .unwrap();
        let outcome = outcome_for(&cli);

        assert_eq!(outcome.term_months(), loan_simulator::MAX_TERM_MONTHS);
        assert!(outcome.monthly_payment() > 0.0);
        assert!(requested_schedule(&cli, &outcome).is_none());
    }

    #[test]
    fn test_schedule_built_when_requested() {
        let cli = Cli::try_parse_from([
            "loan_simulator", "--schedule", "vehicle", "--price", "30000", "--months", "12", "--rate", "12",
        ])
        .unwrap();
        let outcome = outcome_for(&cli);

        let schedule = requested_schedule(&cli, &outcome).unwrap();
        assert_eq!(schedule.len(), 12);
    }

    #[test]
    fn test_export_alone_requests_schedule() {
        let cli = Cli::try_parse_from([
            "loan_simulator", "payroll-inss", "--amount", "10000", "--months", "24", "--rate", "20", "--export",
        ])
        .unwrap();
        let outcome = outcome_for(&cli);

        assert_eq!(cli.export, Some(None));
        assert_eq!(requested_schedule(&cli, &outcome).unwrap().len(), 24);
    }

    #[test]
    fn test_products_without_table() {
        let cli = Cli::try_parse_from([
            "loan_simulator", "--schedule", "fgts", "--balance", "10000", "--percent", "50", "--months", "12",
        ])
        .unwrap();
        let outcome = outcome_for(&cli);

        assert!(requested_schedule(&cli, &outcome).is_none());
    }
}
